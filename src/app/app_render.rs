use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::alert::render_alert;
use crate::notification::render_notification;
use crate::theme;

const HINTS: &[(&str, &str)] = &[("q", "quit"), ("n", "skip")];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
        let (alert_area, help_area) = (layout[0], layout[1]);

        render_alert(frame, alert_area, &self.alerts);
        self.render_help_line(frame, help_area);

        render_notification(frame, &mut self.notification);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let endpoint = format!("{} ", self.endpoint);
        let endpoint_width = Line::raw(endpoint.as_str()).width() as u16;

        let [hints_area, endpoint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(endpoint_width)])
                .areas(area);

        let hints = theme::border_hints::build_hints(HINTS, theme::help_line::KEY);
        frame.render_widget(Paragraph::new(hints), hints_area);

        let endpoint_line = Line::from(Span::styled(
            endpoint,
            Style::default()
                .fg(theme::help_line::ENDPOINT)
                .add_modifier(Modifier::DIM),
        ));
        frame.render_widget(Paragraph::new(endpoint_line).right_aligned(), endpoint_area);
    }
}
