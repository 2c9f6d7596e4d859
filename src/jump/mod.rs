//! Binary-search jump mode.
//!
//! Each key press halves the active region toward a direction, so any cell
//! of an `n`-column, `m`-row window is reachable in about
//! `log2(n) + log2(m)` presses.
//!
//! - `region`: the shrinking rectangle and the current cell
//! - `keys`: trigger bindings and the key resolver
//! - `engine`: the halving step and its clamping policy
//! - `overlay`: cursor and shade highlights for a region
//! - `session`: the event-driven state machine
//! - `controller`: applies a session to an [`EditorPort`](crate::editor::port::EditorPort)

pub mod controller;
pub mod engine;
pub mod keys;
pub mod overlay;
pub mod region;
pub mod session;

pub use controller::ModeController;
pub use keys::{Action, Direction, KeyBindings};
pub use overlay::{HighlightGroups, OverlayRenderer, OverlayStrategy};
pub use region::{Region, Scope};
pub use session::{Effect, JumpOptions, JumpSession, ModeState};
