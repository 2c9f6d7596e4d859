//! Text view with highlight marks.
//!
//! Renders the visible lines of the buffer, styling each cell by the most
//! recent mark covering it. Marks of the jump cursor group get the jump
//! cursor colors, marks of the shade group dim the text. Shade rectangles
//! extend past the end of short lines, so lines are padded with styled
//! spaces up to the last marked column.

use crate::editor::mode::EditorMode;
use crate::editor::port::CellSpan;
use crate::editor::state::EditorState;
use crate::jump::overlay::HighlightGroups;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the visible window of `state` into `area`.
pub fn render_text_view(
    f: &mut Frame,
    area: Rect,
    state: &EditorState,
    colors: &ThemeColors,
    groups: &HighlightGroups,
) {
    let base = Style::default().bg(colors.background).fg(colors.foreground);
    let gutter = state.gutter_width();
    let width = state.viewport_width();
    let cursor = state.cursor();

    let mut lines = Vec::new();
    for line in state.window_top()..=state.window_bottom() {
        let marks = state.marks().spans_on_line(line);
        let cursor_col = (state.mode() == EditorMode::Normal && cursor.line == line)
            .then_some(cursor.col);
        let style_at = |col: usize| cell_style(col, &marks, cursor_col, base, colors, groups);

        let mut row = RowBuilder::default();
        if gutter > 0 {
            row.spans.push(Span::styled(
                format!("{:>w$} ", line, w = gutter - 1),
                Style::default()
                    .fg(colors.line_number)
                    .add_modifier(Modifier::DIM),
            ));
        }

        let mut next_col = 1;
        for (col, c) in state.buffer().cells(line) {
            if col > width {
                break;
            }
            row.push(c, style_at(col));
            next_col = col + unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        }

        let padded_to = marks
            .iter()
            .map(|(span, _)| span.col + span.len - 1)
            .chain(cursor_col)
            .max()
            .unwrap_or(0)
            .min(width);
        for col in next_col..=padded_to {
            row.push(' ', style_at(col));
        }

        lines.push(row.finish());
    }

    let paragraph = Paragraph::new(lines).style(base);
    f.render_widget(paragraph, area);
}

fn cell_style(
    col: usize,
    marks: &[(CellSpan, &str)],
    cursor_col: Option<usize>,
    base: Style,
    colors: &ThemeColors,
    groups: &HighlightGroups,
) -> Style {
    let group = marks
        .iter()
        .rev()
        .find(|(span, _)| span.col <= col && col < span.col + span.len)
        .map(|(_, group)| *group);

    match group {
        Some(g) if g == groups.cursor => Style::default()
            .fg(colors.jump_cursor_fg)
            .bg(colors.jump_cursor)
            .add_modifier(Modifier::BOLD),
        Some(g) if g == groups.shade => base.fg(colors.shade).bg(colors.shade_bg),
        _ if cursor_col == Some(col) => base.bg(colors.cursor),
        _ => base,
    }
}

/// Collects characters into spans, starting a new span when the style
/// changes.
#[derive(Default)]
struct RowBuilder {
    spans: Vec<Span<'static>>,
    text: String,
    style: Style,
}

impl RowBuilder {
    fn push(&mut self, c: char, style: Style) {
        if style != self.style && !self.text.is_empty() {
            self.flush();
        }
        self.style = style;
        self.text.push(c);
    }

    fn flush(&mut self) {
        let text = std::mem::take(&mut self.text);
        self.spans.push(Span::styled(text, self.style));
    }

    fn finish(mut self) -> Line<'static> {
        if !self.text.is_empty() {
            self.flush();
        }
        Line::from(self.spans)
    }
}
