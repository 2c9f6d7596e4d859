//! Editor state: text, cursor, viewport, marks and messages.
//!
//! `EditorState` is the in-memory editor both [`EditorPort`] implementations
//! sit on. It owns no terminal; callers report the viewport size with
//! [`EditorState::set_viewport`] and the state keeps the cursor visible by
//! scrolling.
//!
//! [`EditorPort`]: crate::editor::port::EditorPort

use tracing::debug;

use crate::editor::buffer::TextBuffer;
use crate::editor::marks::MarkSet;
use crate::editor::mode::EditorMode;
use crate::editor::port::{PortError, PortResult, Position};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// A message shown in the message area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// The viewer's state.
#[derive(Debug, Clone)]
pub struct EditorState {
    buffer: TextBuffer,
    filename: Option<String>,
    cursor: Position,
    scroll_top: usize,
    viewport_width: usize,
    viewport_height: usize,
    marks: MarkSet,
    mode: EditorMode,
    message: Option<Message>,
    show_line_numbers: bool,
}

impl EditorState {
    /// Creates a state with the cursor on the first cell and an 80x24 viewport.
    pub fn new(buffer: TextBuffer) -> Self {
        Self {
            buffer,
            filename: None,
            cursor: Position::new(1, 1),
            scroll_top: 1,
            viewport_width: 80,
            viewport_height: 24,
            marks: MarkSet::new(),
            mode: EditorMode::Normal,
            message: None,
            show_line_numbers: false,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    pub fn marks_mut(&mut self) -> &mut MarkSet {
        &mut self.marks
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.message = Some(Message {
            text: text.into(),
            level,
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    /// Width of the line-number gutter including its trailing space.
    pub fn gutter_width(&self) -> usize {
        if self.show_line_numbers {
            self.buffer.line_count().to_string().len() + 1
        } else {
            0
        }
    }

    /// Sets the text area size in cells. Zero sizes are treated as 1.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport_width = width.max(1);
        self.viewport_height = height.max(1);
        self.scroll_to_cursor();
    }

    pub fn viewport_width(&self) -> usize {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// First visible line.
    pub fn window_top(&self) -> usize {
        self.scroll_top
    }

    /// Last visible line.
    pub fn window_bottom(&self) -> usize {
        (self.scroll_top + self.viewport_height - 1).min(self.buffer.line_count())
    }

    /// Moves the cursor, clamping it into the buffer, and scrolls it into view.
    ///
    /// The column is limited to the line's width (at least 1) and the
    /// viewport width.
    pub fn set_cursor(&mut self, position: Position) {
        let line = position.line.clamp(1, self.buffer.line_count());
        let width = self.buffer.display_width(line).unwrap_or(0).max(1);
        let col = position.col.clamp(1, width.min(self.viewport_width));
        self.cursor = Position::new(line, col);
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        let line = self.cursor.line;
        if line < self.scroll_top {
            self.scroll_top = line;
        } else if line >= self.scroll_top + self.viewport_height {
            self.scroll_top = line + 1 - self.viewport_height;
        }
    }

    pub fn move_left(&mut self, count: usize) {
        let Position { line, col } = self.cursor;
        self.set_cursor(Position::new(line, col.saturating_sub(count)));
    }

    pub fn move_right(&mut self, count: usize) {
        let Position { line, col } = self.cursor;
        self.set_cursor(Position::new(line, col + count));
    }

    pub fn move_up(&mut self, count: usize) {
        let Position { line, col } = self.cursor;
        self.set_cursor(Position::new(line.saturating_sub(count), col));
    }

    pub fn move_down(&mut self, count: usize) {
        let Position { line, col } = self.cursor;
        self.set_cursor(Position::new(line + count, col));
    }

    pub fn move_line_start(&mut self) {
        self.set_cursor(Position::new(self.cursor.line, 1));
    }

    pub fn move_line_end(&mut self) {
        self.set_cursor(Position::new(self.cursor.line, usize::MAX));
    }

    pub fn move_top(&mut self) {
        self.set_cursor(Position::new(1, self.cursor.col));
    }

    pub fn move_bottom(&mut self) {
        self.set_cursor(Position::new(self.buffer.line_count(), self.cursor.col));
    }

    pub fn half_page_down(&mut self) {
        self.move_down((self.viewport_height / 2).max(1));
    }

    pub fn half_page_up(&mut self) {
        self.move_up((self.viewport_height / 2).max(1));
    }

    /// Runs one normal-mode key. Returns false for keys it does not know.
    pub fn normal_key(&mut self, key: char) -> bool {
        match key {
            'h' => self.move_left(1),
            'j' => self.move_down(1),
            'k' => self.move_up(1),
            'l' => self.move_right(1),
            '0' => self.move_line_start(),
            '$' => self.move_line_end(),
            'g' => self.move_top(),
            'G' => self.move_bottom(),
            '\u{4}' => self.half_page_down(),
            '\u{15}' => self.half_page_up(),
            _ => return false,
        }
        true
    }

    /// Executes a literal command.
    ///
    /// Only `normal <keys>` and `normal! <keys>` are understood; keys the
    /// viewer has no binding for are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::UnsupportedCommand`] for anything else.
    pub fn execute_command(&mut self, command: &str) -> PortResult<()> {
        let keys = command
            .strip_prefix("normal!")
            .or_else(|| command.strip_prefix("normal"))
            .ok_or_else(|| PortError::UnsupportedCommand(command.to_string()))?;
        let keys = keys.strip_prefix(' ').unwrap_or(keys);
        for key in keys.chars() {
            if !self.normal_key(key) {
                debug!(?key, "no normal-mode binding");
            }
        }
        Ok(())
    }
}
