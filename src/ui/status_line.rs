//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, JUMP)
//! - Filename (or "[No Name]" when reading from stdin)
//! - Cursor position (line:col) and line count
//!
//! Example status line: `NORMAL | notes.txt                    12:5  40L`

use crate::editor::mode::EditorMode;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line showing mode, filename and cursor position.
///
/// The mode label is drawn in the theme's jump-mode color while jump mode is
/// active.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let base = Style::default()
        .bg(colors.status_line_bg)
        .fg(colors.status_line_fg);
    let mode_style = match state.mode() {
        EditorMode::Jump => base
            .fg(colors.jump_mode_label)
            .add_modifier(Modifier::BOLD),
        EditorMode::Normal => base,
    };

    let mode_text = format!("{}", state.mode());
    let file_text = format!(" | {}", state.filename().unwrap_or("[No Name]"));
    let cursor = state.cursor();
    let position_text = format!("{}  {}L ", cursor, state.buffer().line_count());

    let used = mode_text.len() + file_text.len() + position_text.len();
    let padding = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(mode_text, mode_style),
        Span::styled(file_text, base),
        Span::styled(" ".repeat(padding), base),
        Span::styled(position_text, base),
    ]);

    f.render_widget(Paragraph::new(line).style(base), area);
}
