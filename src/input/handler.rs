//! Input event handler for polling and processing keyboard events.

use super::keys::{key_to_char, map_key_event, InputEvent};
use crate::editor::state::EditorState;
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Stdin};
use termion::event::{Event, MouseButton, MouseEvent};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
    /// Replaying a fixed list of events
    Scripted(VecDeque<Event>),
}

impl std::fmt::Debug for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventSource::Stdin(_) => write!(f, "Stdin"),
            EventSource::Tty(_) => write!(f, "Tty"),
            EventSource::Scripted(events) => write!(f, "Scripted({} pending)", events.len()),
        }
    }
}

/// What the viewer should do after a normal-mode event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep going
    Continue,
    /// Hand the keyboard to jump mode
    EnterJumpMode,
    /// Exit the viewer
    Quit,
}

/// Reads terminal events and applies normal-mode keys to the editor state.
#[derive(Debug)]
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Creates an InputHandler that replays `events` and then reports end of
    /// input.
    ///
    /// # Example
    ///
    /// ```
    /// use bsmotion::input::InputHandler;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::scripted(vec![Event::Key(Key::Char('j'))]);
    /// assert_eq!(handler.next_char().unwrap(), Some('j'));
    /// assert_eq!(handler.next_char().unwrap(), None);
    /// ```
    pub fn scripted(events: Vec<Event>) -> Self {
        Self {
            events: EventSource::Scripted(events.into()),
        }
    }

    /// Waits for the next terminal event.
    ///
    /// Returns None once the input source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the terminal fails
    pub fn next_event(&mut self) -> io::Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input buffer.
        // This prevents character loss during rapid input (paste operations).
        match &mut self.events {
            EventSource::Stdin(events) => events.next().transpose(),
            EventSource::Tty(events) => events.next().transpose(),
            EventSource::Scripted(events) => Ok(events.pop_front()),
        }
    }

    /// Waits for the next key that produces a character.
    ///
    /// Mouse events and keys without a character are skipped.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        while let Some(event) = self.next_event()? {
            if let Event::Key(key) = event {
                if let Some(c) = key_to_char(key) {
                    return Ok(Some(c));
                }
            }
        }
        Ok(None)
    }

    /// Applies a normal-mode event to the editor state.
    ///
    /// Movement keys and the mouse wheel update the cursor directly; the jump
    /// key and quit are returned for the caller to act on.
    ///
    /// # Example
    ///
    /// ```
    /// use bsmotion::editor::buffer::TextBuffer;
    /// use bsmotion::editor::state::EditorState;
    /// use bsmotion::input::{Dispatch, InputHandler};
    /// use termion::event::{Event, Key};
    ///
    /// let mut state = EditorState::new(TextBuffer::from_text("a\nb\n"));
    /// let dispatch = InputHandler::handle_event(Event::Key(Key::Char('j')), &mut state, 's');
    /// assert_eq!(dispatch, Dispatch::Continue);
    /// assert_eq!(state.cursor().line, 2);
    /// ```
    pub fn handle_event(event: Event, state: &mut EditorState, jump_key: char) -> Dispatch {
        if let Event::Mouse(mouse_event) = event {
            match mouse_event {
                MouseEvent::Press(MouseButton::WheelUp, _, _) => state.move_up(3),
                MouseEvent::Press(MouseButton::WheelDown, _, _) => state.move_down(3),
                _ => {}
            }
            return Dispatch::Continue;
        }

        state.clear_message();
        match map_key_event(event, jump_key) {
            InputEvent::Quit => return Dispatch::Quit,
            InputEvent::EnterJumpMode => return Dispatch::EnterJumpMode,
            InputEvent::MoveDown => state.move_down(1),
            InputEvent::MoveUp => state.move_up(1),
            InputEvent::MoveLeft => state.move_left(1),
            InputEvent::MoveRight => state.move_right(1),
            InputEvent::LineStart => state.move_line_start(),
            InputEvent::LineEnd => state.move_line_end(),
            InputEvent::JumpToTop => state.move_top(),
            InputEvent::JumpToBottom => state.move_bottom(),
            InputEvent::HalfPageDown => state.half_page_down(),
            InputEvent::HalfPageUp => state.half_page_up(),
            InputEvent::Unknown => {}
        }
        Dispatch::Continue
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
