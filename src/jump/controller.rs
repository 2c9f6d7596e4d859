//! Drives a [`JumpSession`] against an [`EditorPort`].
//!
//! The controller captures the initial region from the editor, feeds keys to
//! the session and applies the resulting effects: cursor moves, overlay
//! marks, redraws and replayed keys.

use tracing::debug;

use crate::editor::port::{EditorPort, PortResult};
use crate::jump::keys::KeyBindings;
use crate::jump::overlay::OverlayRenderer;
use crate::jump::region::{Region, Scope};
use crate::jump::session::{Effect, JumpOptions, JumpSession, ModeState, Outcome};

/// Prefix used when replaying a transparent-exit key.
pub const REPLAY_COMMAND: &str = "normal!";

/// Owns one jump-mode session and the overlay marks it created.
#[derive(Debug)]
pub struct ModeController {
    session: JumpSession,
    overlay: OverlayRenderer,
}

impl ModeController {
    pub fn new(options: JumpOptions, overlay: OverlayRenderer) -> Self {
        Self {
            session: JumpSession::new(options),
            overlay,
        }
    }

    pub fn state(&self) -> ModeState {
        self.session.state()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn session(&self) -> &JumpSession {
        &self.session
    }

    pub fn overlay(&self) -> &OverlayRenderer {
        &self.overlay
    }

    /// Enters jump mode and blocks reading keys until it is left.
    ///
    /// Does nothing if a session is already active.
    ///
    /// # Errors
    ///
    /// Any port failure ends the loop and is returned as is.
    pub fn run<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        bindings: KeyBindings,
    ) -> PortResult<()> {
        if self.is_active() {
            return Ok(());
        }
        self.enter(port, bindings)?;
        while self.is_active() {
            let input = port.read_char()?;
            self.handle_input(port, input)?;
        }
        Ok(())
    }

    /// `Idle -> Active` without starting the input loop.
    ///
    /// Use with [`ModeController::handle_input`] when the host owns the event
    /// loop.
    pub fn enter<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        bindings: KeyBindings,
    ) -> PortResult<ModeState> {
        if self.is_active() {
            return Ok(self.state());
        }
        for conflict in bindings.conflicts() {
            debug!(%conflict, "overlapping trigger");
        }
        let region = initial_region(port, self.session.options().scope)?;
        let outcome = self.session.enter(region, bindings);
        self.apply(port, outcome)
    }

    /// Feeds one key to the session.
    pub fn handle_input<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        input: char,
    ) -> PortResult<ModeState> {
        let outcome = self.session.handle_input(input, &*port)?;
        self.apply(port, outcome)
    }

    /// Moves by direction name (`left`, `down`, `up`, `right`).
    pub fn jump_move<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        direction: &str,
    ) -> PortResult<ModeState> {
        let outcome = self.session.jump_move(direction, &*port)?;
        self.apply(port, outcome)
    }

    /// Leaves jump mode at the current cell.
    ///
    /// While idle this only removes overlay marks left behind by an earlier
    /// leave that failed part way.
    pub fn leave<P: EditorPort + ?Sized>(&mut self, port: &mut P) -> PortResult<ModeState> {
        if !self.is_active() && self.overlay.mark_count() > 0 {
            self.overlay.clear(port)?;
            port.redraw()?;
            return Ok(self.state());
        }
        let outcome = self.session.leave();
        self.apply(port, outcome)
    }

    /// Leaves jump mode and replays `key` as a normal-mode command.
    pub fn leave_transparent<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        key: &str,
    ) -> PortResult<ModeState> {
        let outcome = self.session.leave_transparent(key);
        self.apply(port, outcome)
    }

    fn apply<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        outcome: Outcome,
    ) -> PortResult<ModeState> {
        let left = outcome.effects.contains(&Effect::ClearOverlay);
        for effect in outcome.effects {
            match effect {
                Effect::MoveCursor(position) => port.set_cursor(position)?,
                Effect::RenderOverlay(region) => self.overlay.render(port, &region)?,
                Effect::ClearOverlay => self.overlay.clear(port)?,
                Effect::Replay(key) => port.execute(&format!("{} {}", REPLAY_COMMAND, key))?,
            }
        }
        if left {
            port.redraw()?;
        }
        Ok(outcome.state)
    }
}

/// Reads the starting region for `scope` from the editor.
pub fn initial_region<P: EditorPort + ?Sized>(port: &P, scope: Scope) -> PortResult<Region> {
    let cursor = port.cursor()?;
    match scope {
        Scope::Window => Ok(Region::for_window(cursor, port.window()?)),
        Scope::Buffer => Ok(Region::for_buffer(
            cursor,
            port.last_line()?,
            port.line_width(cursor.line)?,
        )),
    }
}
