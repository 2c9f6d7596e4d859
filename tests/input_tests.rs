use bsmotion::editor::buffer::TextBuffer;
use bsmotion::editor::port::Position;
use bsmotion::editor::state::{EditorState, MessageLevel};
use bsmotion::input::keys::{key_to_char, map_key_event};
use bsmotion::input::{Dispatch, InputEvent, InputHandler};
use termion::event::{Event, Key, MouseButton, MouseEvent};

fn key(c: char) -> Event {
    Event::Key(Key::Char(c))
}

fn state() -> EditorState {
    let text: String = (1..=50).map(|i| format!("line {}\n", i)).collect();
    let mut state = EditorState::new(TextBuffer::from_text(&text));
    state.set_viewport(40, 10);
    state
}

#[test]
fn test_jump_key_takes_precedence() {
    assert_eq!(map_key_event(key('j'), 'j'), InputEvent::EnterJumpMode);
    assert_eq!(map_key_event(key('s'), 'j'), InputEvent::Unknown);
    assert_eq!(map_key_event(key('s'), 's'), InputEvent::EnterJumpMode);
}

#[test]
fn test_ctrl_jump_key() {
    assert_eq!(
        map_key_event(Event::Key(Key::Ctrl('f')), '\u{6}'),
        InputEvent::EnterJumpMode
    );
}

#[test]
fn test_arrow_keys() {
    assert_eq!(map_key_event(Event::Key(Key::Down), 's'), InputEvent::MoveDown);
    assert_eq!(map_key_event(Event::Key(Key::Up), 's'), InputEvent::MoveUp);
    assert_eq!(map_key_event(Event::Key(Key::Home), 's'), InputEvent::LineStart);
    assert_eq!(map_key_event(Event::Key(Key::End), 's'), InputEvent::LineEnd);
}

#[test]
fn test_key_to_char() {
    assert_eq!(key_to_char(Key::Char('x')), Some('x'));
    assert_eq!(key_to_char(Key::Char('\n')), Some('\n'));
    assert_eq!(key_to_char(Key::Esc), Some('\u{1b}'));
    assert_eq!(key_to_char(Key::Backspace), Some('\u{8}'));
    assert_eq!(key_to_char(Key::Ctrl('a')), Some('\u{1}'));
    assert_eq!(key_to_char(Key::Ctrl('D')), Some('\u{4}'));
    assert_eq!(key_to_char(Key::F(1)), None);
    assert_eq!(key_to_char(Key::Left), None);
}

#[test]
fn test_scripted_next_char_skips_non_characters() {
    let mut handler = InputHandler::scripted(vec![
        Event::Key(Key::Left),
        Event::Mouse(MouseEvent::Press(MouseButton::WheelUp, 1, 1)),
        Event::Key(Key::Esc),
        key('k'),
    ]);
    assert_eq!(handler.next_char().unwrap(), Some('\u{1b}'));
    assert_eq!(handler.next_char().unwrap(), Some('k'));
    assert_eq!(handler.next_char().unwrap(), None);
    assert_eq!(handler.next_event().unwrap(), None);
}

#[test]
fn test_handle_event_moves_cursor() {
    let mut state = state();
    for c in "jjjl".chars() {
        assert_eq!(
            InputHandler::handle_event(key(c), &mut state, 's'),
            Dispatch::Continue
        );
    }
    assert_eq!(state.cursor(), Position::new(4, 2));

    InputHandler::handle_event(key('G'), &mut state, 's');
    assert_eq!(state.cursor().line, 50);
    assert_eq!(state.window_top(), 41);

    InputHandler::handle_event(Event::Key(Key::Ctrl('u')), &mut state, 's');
    assert_eq!(state.cursor().line, 45);
}

#[test]
fn test_handle_event_dispatch() {
    let mut state = state();
    assert_eq!(
        InputHandler::handle_event(key('s'), &mut state, 's'),
        Dispatch::EnterJumpMode
    );
    assert_eq!(
        InputHandler::handle_event(key('q'), &mut state, 's'),
        Dispatch::Quit
    );
}

#[test]
fn test_mouse_wheel_scrolls_three_lines() {
    let mut state = state();
    InputHandler::handle_event(
        Event::Mouse(MouseEvent::Press(MouseButton::WheelDown, 1, 1)),
        &mut state,
        's',
    );
    assert_eq!(state.cursor().line, 4);
}

#[test]
fn test_key_clears_message() {
    let mut state = state();
    state.set_message("jump mode failed", MessageLevel::Error);
    InputHandler::handle_event(key('j'), &mut state, 's');
    assert!(state.message().is_none());
}
