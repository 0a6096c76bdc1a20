//! Tests for alert_render

use super::*;
use crate::alert::Alert;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::{Duration, Instant};

const DWELL: Duration = Duration::from_secs(5);

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn showing(texts: &[&str]) -> AlertQueue {
    let mut alerts = AlertQueue::new();
    for text in texts {
        alerts.enqueue(Alert::new(*text, DWELL));
    }
    alerts.advance(Instant::now());
    alerts
}

fn render_to_lines(alerts: &AlertQueue, width: u16, height: u16) -> (Option<Rect>, Vec<String>) {
    let mut terminal = create_test_terminal(width, height);
    let mut drawn = None;
    terminal
        .draw(|f| {
            let area = f.area();
            drawn = render_alert(f, area, alerts);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let lines = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect();
    (drawn, lines)
}

#[test]
fn test_idle_queue_draws_nothing() {
    let alerts = AlertQueue::new();
    let (drawn, lines) = render_to_lines(&alerts, 40, 10);

    assert!(drawn.is_none());
    assert!(lines.iter().all(|line| line.trim().is_empty()));
}

#[test]
fn test_alert_box_is_centered() {
    let alerts = showing(&["hello"]);
    let (drawn, lines) = render_to_lines(&alerts, 30, 6);

    let area = drawn.expect("alert should be drawn");
    assert_eq!(area, Rect::new(10, 1, 9, 3));
    assert_eq!(lines[2], "          │ hello │           ");
}

#[test]
fn test_long_alert_wraps_inside_margins() {
    let text = "a long alert that will not fit on one line";
    let alerts = showing(&[text]);
    let (drawn, lines) = render_to_lines(&alerts, 24, 10);

    let area = drawn.expect("alert should be drawn");
    assert_eq!(area.width, 20);
    assert!(area.height > 3, "wrapped alert should span several rows");

    let body: String = lines.join(" ");
    for word in text.split(' ') {
        assert!(body.contains(word), "missing word '{}'", word);
    }
}

#[test]
fn test_pending_count_on_bottom_border() {
    let alerts = showing(&["first", "second", "third"]);
    let (drawn, lines) = render_to_lines(&alerts, 40, 8);

    let area = drawn.unwrap();
    let bottom = &lines[(area.y + area.height - 1) as usize];
    assert!(bottom.contains("+2"), "got: {}", bottom);
}

#[test]
fn test_no_pending_count_when_queue_drained() {
    let alerts = showing(&["only"]);
    let (drawn, lines) = render_to_lines(&alerts, 40, 8);

    let area = drawn.unwrap();
    let bottom = &lines[(area.y + area.height - 1) as usize];
    assert!(!bottom.contains('+'));
}

#[test]
fn test_tiny_area_draws_nothing() {
    let alerts = showing(&["hello"]);
    let (drawn, _) = render_to_lines(&alerts, 4, 2);

    assert!(drawn.is_none());
}

#[test]
fn test_fitted_height_follows_word_wrap() {
    let plain = |text: &'static str| {
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
    };

    assert_eq!(fitted_height(&plain(""), 10, 50), 3);
    assert_eq!(fitted_height(&plain("abc"), 10, 50), 3);
    assert_eq!(fitted_height(&plain("one\ntwo"), 10, 50), 4);
    // Word breaks need three rows where a character split would need two
    assert_eq!(fitted_height(&plain("aaaaaaa bbbbbbb ccccccc"), 12, 50), 5);
    assert_eq!(fitted_height(&plain("aaaaaaa bbbbbbb ccccccc"), 12, 4), 4);
}

#[test]
fn test_word_wrapped_alert_shows_every_word() {
    let text = "aaaaaaa bbbbbbb ccccccc";
    let alerts = showing(&[text]);
    let (drawn, lines) = render_to_lines(&alerts, 20, 12);

    let area = drawn.expect("alert should be drawn");
    assert_eq!(area.height, 5);

    let body: String = lines.join(" ");
    for word in text.split(' ') {
        assert!(body.contains(word), "missing word '{}'", word);
    }
}

#[test]
fn test_huge_alert_is_capped_to_area() {
    let text = vec!["x"; 70_000].join("\n");
    let alerts = showing(&[text.as_str()]);
    let (drawn, lines) = render_to_lines(&alerts, 40, 10);

    let area = drawn.expect("alert should be drawn");
    assert_eq!(area.height, 10);
    assert!(lines[1].contains('x'));
}

#[test]
fn test_very_wide_line_is_capped_to_area() {
    let text = "y".repeat(70_000);
    let alerts = showing(&[text.as_str()]);
    let (drawn, _) = render_to_lines(&alerts, 40, 10);

    let area = drawn.expect("alert should be drawn");
    assert_eq!(area.width, 36);
    assert_eq!(area.height, 10);
}
