//! The jump-mode state machine.
//!
//! [`JumpSession`] is event driven: each call consumes one event (enter, a
//! key, a move, a leave) and returns an [`Outcome`] holding the new
//! [`ModeState`] and the [`Effect`]s the driver must apply to the editor. It
//! never touches the editor itself except to read line widths, which keeps
//! the whole lifecycle testable without a terminal.
//!
//! # Example
//!
//! ```
//! use bsmotion::editor::buffer::TextBuffer;
//! use bsmotion::editor::port::Position;
//! use bsmotion::jump::keys::KeyBindings;
//! use bsmotion::jump::region::Region;
//! use bsmotion::jump::session::{Effect, JumpOptions, JumpSession, ModeState};
//!
//! let buffer = TextBuffer::from_text(&"some text\n".repeat(10));
//! let mut session = JumpSession::new(JumpOptions::default());
//! session.enter(Region::new(1, 10, 1, 40, Position::new(5, 1)), KeyBindings::vim());
//!
//! let outcome = session.handle_input('k', &buffer).unwrap();
//! assert_eq!(outcome.state, ModeState::Active);
//! assert_eq!(outcome.effects[0], Effect::MoveCursor(Position::new(3, 1)));
//! ```

use std::fmt;

use tracing::debug;

use crate::editor::port::{LineWidths, PortResult, Position};
use crate::jump::engine::NavigationEngine;
use crate::jump::keys::{Action, Direction, KeyBindings};
use crate::jump::region::{Region, Scope};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModeState {
    #[default]
    Idle,
    Active,
}

impl fmt::Display for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeState::Idle => write!(f, "idle"),
            ModeState::Active => write!(f, "active"),
        }
    }
}

/// Behavior switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpOptions {
    /// Window or whole buffer.
    pub scope: Scope,
    /// Leave automatically once either axis converges.
    pub auto_exit: bool,
    /// Pull the column back to the end of the target line. Always on in
    /// buffer scope.
    pub clamp_to_line_width: bool,
}

impl Default for JumpOptions {
    fn default() -> Self {
        Self {
            scope: Scope::Window,
            auto_exit: true,
            clamp_to_line_width: true,
        }
    }
}

/// A change the driver applies to the editor, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put the editor cursor here.
    MoveCursor(Position),
    /// Replace the overlay with the one for this region, then redraw.
    RenderOverlay(Region),
    /// Remove every overlay mark.
    ClearOverlay,
    /// Run the key as a normal-mode command.
    Replay(String),
}

/// What one event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: ModeState,
    pub effects: Vec<Effect>,
}

impl Outcome {
    fn unchanged(state: ModeState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// True if the event had no effect.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }
}

/// One jump-mode session.
///
/// Owned by the caller; every operation takes the session explicitly, so
/// independent sessions never share state.
#[derive(Debug, Clone)]
pub struct JumpSession {
    options: JumpOptions,
    engine: NavigationEngine,
    state: ModeState,
    region: Option<Region>,
    bindings: KeyBindings,
}

impl JumpSession {
    pub fn new(options: JumpOptions) -> Self {
        let clamp = options.clamp_to_line_width || options.scope == Scope::Buffer;
        Self {
            options,
            engine: NavigationEngine::new(clamp),
            state: ModeState::Idle,
            region: None,
            bindings: KeyBindings::default(),
        }
    }

    pub fn options(&self) -> &JumpOptions {
        &self.options
    }

    pub fn state(&self) -> ModeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ModeState::Active
    }

    /// The active region, `None` while idle.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Bindings of the current (or last) session.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// `Idle -> Active`. Ignored while already active.
    pub fn enter(&mut self, region: Region, bindings: KeyBindings) -> Outcome {
        if self.is_active() {
            return Outcome::unchanged(self.state);
        }
        debug!(%region, scope = %self.options.scope, "entering jump mode");
        self.state = ModeState::Active;
        self.region = Some(region);
        self.bindings = bindings;
        Outcome {
            state: self.state,
            effects: vec![Effect::RenderOverlay(region)],
        }
    }

    /// Feeds one key. Unbound keys are ignored and the session stays active.
    pub fn handle_input<W: LineWidths + ?Sized>(
        &mut self,
        input: char,
        widths: &W,
    ) -> PortResult<Outcome> {
        if !self.is_active() {
            return Ok(Outcome::unchanged(self.state));
        }
        match self.bindings.resolve(input) {
            Some(Action::Move(direction)) => self.move_toward(direction, widths),
            Some(Action::Exit) => Ok(self.leave()),
            Some(Action::ExitTransparent) => Ok(self.leave_transparent(&input.to_string())),
            None => {
                debug!(?input, "unbound key ignored");
                Ok(Outcome::unchanged(self.state))
            }
        }
    }

    /// Moves by direction name. Unknown names are ignored.
    pub fn jump_move<W: LineWidths + ?Sized>(
        &mut self,
        direction: &str,
        widths: &W,
    ) -> PortResult<Outcome> {
        match direction.parse::<Direction>() {
            Ok(direction) => self.move_toward(direction, widths),
            Err(err) => {
                debug!(%err, "jump move ignored");
                Ok(Outcome::unchanged(self.state))
            }
        }
    }

    /// Bisects toward `direction`; leaves on convergence when `auto_exit` is on.
    pub fn move_toward<W: LineWidths + ?Sized>(
        &mut self,
        direction: Direction,
        widths: &W,
    ) -> PortResult<Outcome> {
        let Some(region) = self.region.filter(|_| self.is_active()) else {
            return Ok(Outcome::unchanged(self.state));
        };

        let step = self.engine.advance(&region, direction, widths)?;
        self.region = Some(step.region);

        let mut effects = vec![
            Effect::MoveCursor(step.region.cursor()),
            Effect::RenderOverlay(step.region),
        ];
        if step.converged && self.options.auto_exit {
            debug!(region = %step.region, "region converged");
            effects.extend(self.leave().effects);
        }
        Ok(Outcome {
            state: self.state,
            effects,
        })
    }

    /// `Active -> Idle`, leaving the cursor on the current cell. Ignored while
    /// idle.
    pub fn leave(&mut self) -> Outcome {
        if !self.is_active() {
            return Outcome::unchanged(self.state);
        }
        let Some(region) = self.region.take() else {
            return Outcome::unchanged(self.state);
        };
        debug!(cursor = %region.cursor(), "leaving jump mode");
        self.state = ModeState::Idle;
        Outcome {
            state: self.state,
            effects: vec![Effect::ClearOverlay, Effect::MoveCursor(region.cursor())],
        }
    }

    /// Leaves, then replays `key` as a normal-mode command. Ignored while
    /// idle or when `key` is empty.
    pub fn leave_transparent(&mut self, key: &str) -> Outcome {
        if key.is_empty() || !self.is_active() {
            return Outcome::unchanged(self.state);
        }
        let mut outcome = self.leave();
        outcome.effects.push(Effect::Replay(key.to_string()));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::buffer::TextBuffer;

    fn buffer() -> TextBuffer {
        let line = "0123456789".repeat(8);
        TextBuffer::from_text(&format!("{}\n", line).repeat(40))
    }

    fn active_session(region: Region) -> JumpSession {
        let mut session = JumpSession::new(JumpOptions::default());
        session.enter(region, KeyBindings::vim());
        session
    }

    #[test]
    fn test_enter_renders_initial_overlay() {
        let region = Region::new(1, 40, 1, 80, Position::new(20, 40));
        let mut session = JumpSession::new(JumpOptions::default());
        let outcome = session.enter(region, KeyBindings::vim());
        assert_eq!(outcome.state, ModeState::Active);
        assert_eq!(outcome.effects, vec![Effect::RenderOverlay(region)]);
    }

    #[test]
    fn test_enter_twice_is_noop() {
        let region = Region::new(1, 40, 1, 80, Position::new(20, 40));
        let mut session = active_session(region);
        let other = Region::new(1, 10, 1, 10, Position::new(1, 1));
        assert!(session.enter(other, KeyBindings::default()).is_noop());
        assert_eq!(session.region(), Some(&region));
        assert_eq!(session.bindings(), &KeyBindings::vim());
    }

    #[test]
    fn test_leave_while_idle_is_noop() {
        let mut session = JumpSession::new(JumpOptions::default());
        assert!(session.leave().is_noop());
        assert!(session.leave_transparent("i").is_noop());
        assert!(session.jump_move("up", &buffer()).unwrap().is_noop());
    }

    #[test]
    fn test_move_emits_cursor_then_overlay() {
        let mut session = active_session(Region::new(1, 40, 1, 80, Position::new(20, 40)));
        let outcome = session.jump_move("up", &buffer()).unwrap();
        let expected = Region::new(1, 20, 1, 80, Position::new(10, 40));
        assert_eq!(
            outcome.effects,
            vec![Effect::MoveCursor(Position::new(10, 40)), Effect::RenderOverlay(expected)]
        );
        assert_eq!(session.region(), Some(&expected));
    }

    #[test]
    fn test_unknown_direction_is_ignored() {
        let region = Region::new(1, 40, 1, 80, Position::new(20, 40));
        let mut session = active_session(region);
        assert!(session.jump_move("diagonal", &buffer()).unwrap().is_noop());
        assert_eq!(session.region(), Some(&region));
        assert!(session.is_active());
    }

    #[test]
    fn test_convergence_without_auto_exit_stays_active() {
        let mut session = JumpSession::new(JumpOptions {
            auto_exit: false,
            ..JumpOptions::default()
        });
        session.enter(
            Region::new(1, 3, 1, 80, Position::new(2, 40)),
            KeyBindings::vim(),
        );
        let outcome = session.handle_input('k', &buffer()).unwrap();
        assert_eq!(outcome.state, ModeState::Active);
        assert_eq!(outcome.effects.len(), 2);
    }

    #[test]
    fn test_transparent_exit_replays_key_last() {
        let mut session = active_session(Region::new(1, 40, 1, 80, Position::new(20, 40)));
        let outcome = session.handle_input('a', &buffer()).unwrap();
        assert_eq!(outcome.state, ModeState::Idle);
        assert_eq!(
            outcome.effects,
            vec![
                Effect::ClearOverlay,
                Effect::MoveCursor(Position::new(20, 40)),
                Effect::Replay("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_buffer_scope_always_clamps_to_line_width() {
        let session = JumpSession::new(JumpOptions {
            scope: Scope::Buffer,
            clamp_to_line_width: false,
            ..JumpOptions::default()
        });
        assert!(session.engine.clamps_to_line_width());
    }
}
