//! Notification rendering
//!
//! Draws the notification overlay in the top-right corner of the frame.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after the main UI so the notification appears on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let message = &notif.message;
    let style = &notif.style;

    // 2 padding + 2 borders around a single line
    let content_width = Line::raw(message.as_str()).width() as u16;
    let notification_width = content_width + 4;
    let notification_height = 3;

    let frame_area = frame.area();
    let margin = 2;
    let notification_area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width + margin),
        y: margin,
        width: notification_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    popup::clear_area(frame, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
