//! Message area rendering for status messages and the jump-mode hint.

use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorState, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Hint shown while jump mode is active and no message is pending.
pub const JUMP_HINT: &str = "-- JUMP --";

/// Renders the message area at the bottom of the screen.
///
/// Displays:
/// - The current message, colored by level
/// - The jump-mode hint while jump mode is active
/// - Nothing otherwise
pub fn render_message_area(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let content = if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        Line::from(vec![Span::styled(
            message.text.as_str(),
            Style::default().fg(color),
        )])
    } else if state.mode() == EditorMode::Jump {
        Line::from(vec![Span::styled(
            JUMP_HINT,
            Style::default().fg(colors.jump_mode_label),
        )])
    } else {
        Line::from("")
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
