//! bsmotion: binary-search jump mode for text editors.
//!
//! Jump mode moves the cursor by repeatedly halving a rectangle of the
//! buffer, reaching any visible cell in a logarithmic number of key presses.
//!
//! - [`jump`]: the mode itself, independent of any editor
//! - [`editor`]: the [`EditorPort`](editor::port::EditorPort) trait and an
//!   in-memory editor implementing it
//! - [`app`], [`ui`], [`input`], [`theme`]: the terminal viewer
//! - [`config`], [`logging`]: settings and log output for the binary

pub mod app;
pub mod config;
pub mod editor;
pub mod input;
pub mod jump;
pub mod logging;
pub mod theme;
pub mod ui;
