//! Alert rendering
//!
//! Draws the shown alert as a bordered box centered in the given area. Nothing
//! is drawn while the queue is idle.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use super::alert_queue::AlertQueue;
use crate::theme;
use crate::widgets::popup;

/// Columns kept free on each side of the alert box
const SIDE_MARGIN: u16 = 2;

/// Borders plus one column of padding on each side
const CHROME_WIDTH: u16 = 4;
const CHROME_HEIGHT: u16 = 2;

/// Render the current alert, returning the box area when one was drawn
pub fn render_alert(frame: &mut Frame, area: Rect, alerts: &AlertQueue) -> Option<Rect> {
    let shown = alerts.current()?;
    let text = shown.alert.text.as_str();

    let max_text_width = area
        .width
        .saturating_sub(CHROME_WIDTH + SIDE_MARGIN * 2)
        .max(1);
    let text_width = text
        .lines()
        .map(|line| u16::try_from(Line::raw(line).width()).unwrap_or(u16::MAX))
        .max()
        .unwrap_or(0)
        .clamp(1, max_text_width);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme::alert::BORDER))
        .style(Style::default().bg(theme::alert::BG))
        .padding(Padding::horizontal(1));

    let pending = alerts.pending();
    if pending > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" +{} ", pending),
                Style::default()
                    .fg(theme::alert::PENDING)
                    .add_modifier(Modifier::DIM),
            ))
            .right_aligned(),
        );
    }

    let paragraph = Paragraph::new(text)
        .style(
            Style::default()
                .fg(theme::alert::TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    let box_width = text_width.saturating_add(CHROME_WIDTH);
    let box_height = fitted_height(&paragraph, text_width, area.height);
    let box_area = popup::centered_popup(area, box_width, box_height);

    if box_area.width < CHROME_WIDTH + 1 || box_area.height < CHROME_HEIGHT + 1 {
        return None;
    }

    popup::clear_area(frame, box_area);
    frame.render_widget(paragraph, box_area);

    Some(box_area)
}

/// Box height for `paragraph` wrapped at `text_width`, borders included
///
/// Uses the paragraph's own word wrapping so the count matches what gets
/// drawn. Never less than one text row, never more than `max_height`.
fn fitted_height(paragraph: &Paragraph, text_width: u16, max_height: u16) -> u16 {
    u16::try_from(paragraph.line_count(text_width))
        .unwrap_or(u16::MAX)
        .max(CHROME_HEIGHT + 1)
        .min(max_height)
}

#[cfg(test)]
#[path = "alert_render_tests.rs"]
mod alert_render_tests;
