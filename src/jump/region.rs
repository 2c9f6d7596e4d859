//! The shrinking rectangle jump mode bisects.
//!
//! A [`Region`] holds the active row range `[top_line, bottom_line]`, the
//! active column range `[left_col, right_col]` and the current cell inside
//! them. All coordinates are 1-based.
//!
//! # Example
//!
//! ```
//! use bsmotion::editor::port::{Position, WindowBounds};
//! use bsmotion::jump::region::Region;
//!
//! let window = WindowBounds { top: 1, bottom: 40, width: 80 };
//! let region = Region::for_window(Position::new(12, 30), window);
//!
//! assert_eq!(region.top_line, 1);
//! assert_eq!(region.bottom_line, 40);
//! assert_eq!(region.right_col, 80);
//! assert_eq!(region.cursor(), Position::new(12, 30));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::editor::port::{Position, WindowBounds};

/// What jump mode bisects: the visible window or the whole buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Rows are the visible window, columns the window width.
    #[default]
    Window,
    /// Rows are the whole buffer, columns the width of the cursor line.
    Buffer,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Window => write!(f, "window"),
            Scope::Buffer => write!(f, "buffer"),
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "window" => Ok(Scope::Window),
            "buffer" => Ok(Scope::Buffer),
            other => Err(format!(
                "unknown scope '{}', expected 'window' or 'buffer'",
                other
            )),
        }
    }
}

/// The active rectangle plus the current cell.
///
/// Invariants: `top_line <= current_line <= bottom_line` and
/// `left_col <= current_col <= right_col`. The constructors establish them and
/// the navigation engine preserves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top_line: usize,
    pub bottom_line: usize,
    pub left_col: usize,
    pub right_col: usize,
    pub current_line: usize,
    pub current_col: usize,
}

impl Region {
    /// Builds a region from raw bounds, normalizing them.
    ///
    /// Zero bounds become 1, an inverted range collapses onto its first bound
    /// and the cursor is clamped into the rectangle.
    pub fn new(
        top_line: usize,
        bottom_line: usize,
        left_col: usize,
        right_col: usize,
        cursor: Position,
    ) -> Self {
        let top_line = top_line.max(1);
        let bottom_line = bottom_line.max(top_line);
        let left_col = left_col.max(1);
        let right_col = right_col.max(left_col);

        Self {
            top_line,
            bottom_line,
            left_col,
            right_col,
            current_line: cursor.line.clamp(top_line, bottom_line),
            current_col: cursor.col.clamp(left_col, right_col),
        }
    }

    /// Region covering the visible window. A zero window width is treated as 1.
    pub fn for_window(cursor: Position, window: WindowBounds) -> Self {
        Self::new(window.top, window.bottom, 1, window.width.max(1), cursor)
    }

    /// Region covering the whole buffer, with the columns of the cursor line.
    pub fn for_buffer(cursor: Position, last_line: usize, line_width: usize) -> Self {
        Self::new(1, last_line, 1, line_width.max(1), cursor)
    }

    /// The current cell.
    pub fn cursor(&self) -> Position {
        Position::new(self.current_line, self.current_col)
    }

    /// `bottom_line - top_line`.
    pub fn line_span(&self) -> usize {
        self.bottom_line - self.top_line
    }

    /// `right_col - left_col`.
    pub fn col_span(&self) -> usize {
        self.right_col - self.left_col
    }

    /// True once either axis is down to single-step granularity.
    pub fn is_converged(&self) -> bool {
        self.line_span() <= 1 || self.col_span() <= 1
    }

    /// True if the cell lies inside the active rectangle.
    pub fn contains(&self, position: Position) -> bool {
        (self.top_line..=self.bottom_line).contains(&position.line)
            && (self.left_col..=self.right_col).contains(&position.col)
    }

    /// Checks the ordering invariants.
    pub fn is_valid(&self) -> bool {
        self.top_line >= 1
            && self.left_col >= 1
            && self.top_line <= self.current_line
            && self.current_line <= self.bottom_line
            && self.left_col <= self.current_col
            && self.current_col <= self.right_col
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines {}..={} cols {}..={} at {}:{}",
            self.top_line,
            self.bottom_line,
            self.left_col,
            self.right_col,
            self.current_line,
            self.current_col
        )
    }
}
