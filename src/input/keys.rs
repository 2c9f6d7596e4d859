//! Keyboard event mapping and input event types.

use termion::event::{Event, Key};

/// High-level normal-mode input events abstracted from raw keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the viewer
    Quit,
    /// Move cursor down
    MoveDown,
    /// Move cursor up
    MoveUp,
    /// Move cursor left
    MoveLeft,
    /// Move cursor right
    MoveRight,
    /// Jump to start of line (0, Home)
    LineStart,
    /// Jump to end of line ($, End)
    LineEnd,
    /// Jump to top of document (g)
    JumpToTop,
    /// Jump to bottom of document (G)
    JumpToBottom,
    /// Half-page down (Ctrl-d)
    HalfPageDown,
    /// Half-page up (Ctrl-u)
    HalfPageUp,
    /// Enter binary-search jump mode
    EnterJumpMode,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to a normal-mode InputEvent.
///
/// `jump_key` is the configured key entering jump mode; it takes precedence
/// over the built-in bindings.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use bsmotion::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_key_event(event, 's'), InputEvent::MoveDown);
/// assert_eq!(map_key_event(Event::Key(Key::Char('s')), 's'), InputEvent::EnterJumpMode);
/// ```
pub fn map_key_event(event: Event, jump_key: char) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    if key_to_char(key) == Some(jump_key) {
        return InputEvent::EnterJumpMode;
    }

    match key {
        Key::Ctrl('d') => InputEvent::HalfPageDown,
        Key::Ctrl('u') => InputEvent::HalfPageUp,
        Key::Char('q') => InputEvent::Quit,
        Key::Char('j') => InputEvent::MoveDown,
        Key::Char('k') => InputEvent::MoveUp,
        Key::Char('h') => InputEvent::MoveLeft,
        Key::Char('l') => InputEvent::MoveRight,
        Key::Char('0') | Key::Char('^') => InputEvent::LineStart,
        Key::Char('$') => InputEvent::LineEnd,
        Key::Char('g') => InputEvent::JumpToTop,
        Key::Char('G') => InputEvent::JumpToBottom,
        Key::Down => InputEvent::MoveDown,
        Key::Up => InputEvent::MoveUp,
        Key::Left => InputEvent::MoveLeft,
        Key::Right => InputEvent::MoveRight,
        Key::Home => InputEvent::LineStart,
        Key::End => InputEvent::LineEnd,
        Key::PageDown => InputEvent::HalfPageDown,
        Key::PageUp => InputEvent::HalfPageUp,
        _ => InputEvent::Unknown,
    }
}

/// The character a key produces, as jump mode reads it.
///
/// Esc becomes `\x1b`, Backspace `\x08`, Ctrl-letter the matching control
/// code. Keys without a character (arrows, function keys) give `None`.
pub fn key_to_char(key: Key) -> Option<char> {
    match key {
        Key::Char(c) => Some(c),
        Key::Esc => Some('\u{1b}'),
        Key::Backspace => Some('\u{8}'),
        Key::Ctrl(c) if c.is_ascii_alphabetic() => {
            Some(char::from(c.to_ascii_lowercase() as u8 - b'a' + 1))
        }
        _ => None,
    }
}
