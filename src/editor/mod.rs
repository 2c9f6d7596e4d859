//! Editor state and the port jump mode talks to.
//!
//! # Modules
//!
//! - `port`: the [`EditorPort`](port::EditorPort) trait and its value types
//! - `buffer`: line storage with display widths
//! - `marks`: highlight marks
//! - `mode`: the mode shown in the status line
//! - `state`: cursor, viewport, marks and messages
//! - `headless`: an `EditorPort` with scripted input

pub mod buffer;
pub mod headless;
pub mod marks;
pub mod mode;
pub mod port;
pub mod state;
