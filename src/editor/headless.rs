//! An [`EditorPort`] without a terminal.
//!
//! `HeadlessEditor` wraps an [`EditorState`] and takes its keyboard input from
//! a queue. It records every executed command and counts redraws, which
//! makes it the editor of choice for tests and for hosts that only want the
//! resulting cursor position.
//!
//! # Example
//!
//! ```
//! use bsmotion::editor::headless::HeadlessEditor;
//! use bsmotion::editor::port::{EditorPort, Position};
//! use bsmotion::jump::{JumpOptions, KeyBindings, ModeController, OverlayRenderer};
//!
//! let text = "x".repeat(64) + "\n";
//! let mut editor = HeadlessEditor::new(&text.repeat(32), 64, 32);
//! editor.set_cursor(Position::new(16, 32)).unwrap();
//! editor.push_input("jlq");
//!
//! let mut controller = ModeController::new(JumpOptions::default(), OverlayRenderer::default());
//! controller.run(&mut editor, KeyBindings::vim()).unwrap();
//!
//! assert_eq!(editor.cursor().unwrap(), Position::new(24, 48));
//! assert!(editor.state().marks().is_empty());
//! ```

use std::collections::VecDeque;

use crate::editor::buffer::TextBuffer;
use crate::editor::port::{
    CellSpan, EditorPort, LineWidths, MarkId, PortError, PortResult, Position,
};
use crate::editor::state::EditorState;

/// Editor with scripted input.
#[derive(Debug, Clone)]
pub struct HeadlessEditor {
    state: EditorState,
    input: VecDeque<char>,
    executed: Vec<String>,
    redraws: usize,
}

impl HeadlessEditor {
    /// Creates an editor over `text` with a `width` x `height` window.
    pub fn new(text: &str, width: usize, height: usize) -> Self {
        let mut state = EditorState::new(TextBuffer::from_text(text));
        state.set_viewport(width, height);
        Self::from_state(state)
    }

    pub fn from_state(state: EditorState) -> Self {
        Self {
            state,
            input: VecDeque::new(),
            executed: Vec::new(),
            redraws: 0,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    /// Queues keys for [`EditorPort::read_char`].
    pub fn push_input(&mut self, keys: &str) {
        self.input.extend(keys.chars());
    }

    /// Keys not yet consumed.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Commands passed to [`EditorPort::execute`], oldest first.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }
}

impl LineWidths for HeadlessEditor {
    fn line_width(&self, line: usize) -> PortResult<usize> {
        self.state.buffer().line_width(line)
    }
}

impl EditorPort for HeadlessEditor {
    fn cursor(&self) -> PortResult<Position> {
        Ok(self.state.cursor())
    }

    fn window_top(&self) -> PortResult<usize> {
        Ok(self.state.window_top())
    }

    fn window_bottom(&self) -> PortResult<usize> {
        Ok(self.state.window_bottom())
    }

    fn window_width(&self) -> PortResult<usize> {
        Ok(self.state.viewport_width())
    }

    fn last_line(&self) -> PortResult<usize> {
        Ok(self.state.buffer().line_count())
    }

    fn line_text(&self, line: usize) -> PortResult<String> {
        let buffer = self.state.buffer();
        buffer
            .line(line)
            .map(str::to_string)
            .ok_or(PortError::LineOutOfRange {
                line,
                last: buffer.line_count(),
            })
    }

    fn set_cursor(&mut self, position: Position) -> PortResult<()> {
        self.state.set_cursor(position);
        Ok(())
    }

    fn add_mark(&mut self, group: &str, cells: &[CellSpan]) -> PortResult<MarkId> {
        Ok(self.state.marks_mut().add(group, cells))
    }

    fn delete_mark(&mut self, id: MarkId) -> PortResult<()> {
        self.state
            .marks_mut()
            .remove(id)
            .map(|_| ())
            .ok_or(PortError::UnknownMark(id))
    }

    fn redraw(&mut self) -> PortResult<()> {
        self.redraws += 1;
        Ok(())
    }

    fn read_char(&mut self) -> PortResult<char> {
        self.input.pop_front().ok_or(PortError::InputClosed)
    }

    fn execute(&mut self, command: &str) -> PortResult<()> {
        self.executed.push(command.to_string());
        self.state.execute_command(command)
    }
}
