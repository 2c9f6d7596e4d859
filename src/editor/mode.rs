//! Editor mode shown in the status line.
//!
//! # Example
//!
//! ```
//! use bsmotion::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", EditorMode::Jump), "JUMP");
//! ```

use std::fmt;

/// Represents the current editing mode of the viewer.
///
/// In `Normal` mode keys move the cursor one step at a time. `Jump` is set
/// while a jump-mode session owns the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// Normal mode for single-step navigation.
    #[default]
    Normal,
    /// Binary-search jump mode.
    Jump,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string suitable for display in the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Jump => write!(f, "JUMP"),
        }
    }
}
