//! The terminal viewer: an [`EditorPort`] drawn with ratatui.
//!
//! [`TerminalEditor`] ties the editor state, the UI and the input handler to
//! one `Terminal`. [`run_app`] is the normal-mode event loop; the jump key
//! hands the keyboard to a [`ModeController`] until jump mode is left.

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, error, warn};

use crate::editor::mode::EditorMode;
use crate::editor::port::{
    CellSpan, EditorPort, LineWidths, MarkId, PortError, PortResult, Position,
};
use crate::editor::state::{EditorState, MessageLevel};
use crate::input::{Dispatch, InputHandler};
use crate::jump::{KeyBindings, ModeController};
use crate::ui::UI;

/// An editor rendering to a ratatui terminal and reading termion events.
pub struct TerminalEditor<B: Backend> {
    terminal: Terminal<B>,
    ui: UI,
    state: EditorState,
    input: InputHandler,
}

impl<B: Backend> TerminalEditor<B> {
    /// Wraps the parts and sizes the viewport to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size can't be queried.
    pub fn new(
        terminal: Terminal<B>,
        ui: UI,
        mut state: EditorState,
        input: InputHandler,
    ) -> std::io::Result<Self> {
        let size = terminal.size()?;
        ui.sync_viewport(Rect::new(0, 0, size.width, size.height), &mut state);
        Ok(Self {
            terminal,
            ui,
            state,
            input,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Draws one frame.
    pub fn draw(&mut self) -> std::io::Result<()> {
        self.ui.render(&mut self.terminal, &mut self.state)
    }

    /// Runs jump mode to completion.
    ///
    /// Port failures are logged and shown in the message area; the overlay
    /// is cleared either way. Returns false once the input source is closed.
    fn jump(&mut self, controller: &mut ModeController, bindings: &KeyBindings) -> bool {
        self.state.set_mode(EditorMode::Jump);
        let result = controller.run(self, bindings.clone());

        if controller.is_active() {
            if let Err(err) = controller.leave(self) {
                warn!(%err, "failed to clear jump overlay");
                self.state.marks_mut().clear();
            }
        }
        self.state.set_mode(EditorMode::Normal);

        match result {
            Ok(()) => true,
            Err(PortError::InputClosed) => {
                debug!("input closed during jump mode");
                false
            }
            Err(err) => {
                error!(%err, "jump mode failed");
                self.state
                    .set_message(format!("jump mode failed: {}", err), MessageLevel::Error);
                true
            }
        }
    }
}

impl<B: Backend> LineWidths for TerminalEditor<B> {
    fn line_width(&self, line: usize) -> PortResult<usize> {
        self.state.buffer().line_width(line)
    }
}

impl<B: Backend> EditorPort for TerminalEditor<B> {
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
        self.draw()?;
        Ok(())
    }

    fn read_char(&mut self) -> PortResult<char> {
        self.input.next_char()?.ok_or(PortError::InputClosed)
    }

    fn execute(&mut self, command: &str) -> PortResult<()> {
        self.state.execute_command(command)
    }
}

/// Runs the viewer until the user quits or input ends.
///
/// # Errors
///
/// Returns an error if drawing or reading the terminal fails outside jump
/// mode.
pub fn run_app<B: Backend>(
    editor: &mut TerminalEditor<B>,
    controller: &mut ModeController,
    bindings: &KeyBindings,
    jump_key: char,
) -> Result<()> {
    loop {
        editor.draw()?;

        let Some(event) = editor.input.next_event()? else {
            break;
        };

        match InputHandler::handle_event(event, &mut editor.state, jump_key) {
            Dispatch::Continue => {}
            Dispatch::Quit => break,
            Dispatch::EnterJumpMode => {
                if !editor.jump(controller, bindings) {
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::buffer::TextBuffer;
    use crate::jump::{JumpOptions, OverlayRenderer};
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;
    use termion::event::{Event, Key};

    fn editor(keys: &str) -> TerminalEditor<TestBackend> {
        let text = format!("{}\n", "-".repeat(40)).repeat(30);
        let events = keys.chars().map(|c| Event::Key(Key::Char(c))).collect();
        TerminalEditor::new(
            Terminal::new(TestBackend::new(40, 12)).unwrap(),
            UI::new(get_builtin_theme("default-dark").unwrap()),
            EditorState::new(TextBuffer::from_text(&text)),
            InputHandler::scripted(events),
        )
        .unwrap()
    }

    #[test]
    fn test_viewport_follows_terminal_size() {
        let editor = editor("");
        assert_eq!(editor.window_width().unwrap(), 40);
        assert_eq!(editor.window_bottom().unwrap(), 10);
    }

    #[test]
    fn test_redraw_shows_jump_overlay() {
        let mut editor = editor("");
        let mut controller =
            ModeController::new(JumpOptions::default(), OverlayRenderer::default());
        editor.state_mut().set_mode(EditorMode::Jump);
        controller.enter(&mut editor, KeyBindings::vim()).unwrap();

        let colors = get_builtin_theme("default-dark").unwrap().colors;
        let buffer = editor.terminal().backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, colors.jump_cursor);
        assert_eq!(buffer[(0, 10)].symbol(), "J");

        controller.leave(&mut editor).unwrap();
        assert!(editor.state().marks().is_empty());
    }

    #[test]
    fn test_unsupported_command_is_an_error() {
        let mut editor = editor("");
        assert!(matches!(
            editor.execute("quit"),
            Err(PortError::UnsupportedCommand(_))
        ));
    }
}
