//! Region bisection.
//!
//! Each move treats the old current position as the new near boundary and
//! the midpoint toward the far boundary as the new current position:
//!
//! ```text
//! up:    current' = (top + current) / 2      bottom' = current
//! down:  current' = (bottom + current) / 2   top'    = current
//! left:  current' = (left + current) / 2     right'  = current
//! right: current' = (right + current) / 2    left'   = current
//! ```
//!
//! so the span on the moved axis never grows and halves on every press.

use tracing::trace;

use crate::editor::port::{LineWidths, PortResult};
use crate::jump::keys::Direction;
use crate::jump::region::Region;

/// Result of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The bisected and clamped region.
    pub region: Region,
    /// Either axis reached single-step granularity.
    pub converged: bool,
}

/// Applies halving moves and the post-move clamping policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEngine {
    clamp_to_line_width: bool,
}

impl Default for NavigationEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NavigationEngine {
    /// With `clamp_to_line_width`, the column is pulled back to the end of the
    /// line the move lands on.
    pub fn new(clamp_to_line_width: bool) -> Self {
        Self {
            clamp_to_line_width,
        }
    }

    pub fn clamps_to_line_width(&self) -> bool {
        self.clamp_to_line_width
    }

    /// Bisects `region` toward `direction` and clamps the result.
    ///
    /// `widths` is consulted only for the line the move lands on.
    ///
    /// # Errors
    ///
    /// Propagates failures reading the target line's width.
    pub fn advance<W: LineWidths + ?Sized>(
        &self,
        region: &Region,
        direction: Direction,
        widths: &W,
    ) -> PortResult<Step> {
        let mut next = halve(region, direction);

        if self.clamp_to_line_width {
            let width = widths.line_width(next.current_line)?;
            next = clamp_to_width(next, width);
        }
        next.current_line = next.current_line.clamp(next.top_line, next.bottom_line);

        trace!(%direction, from = %region, to = %next, "jump move");

        Ok(Step {
            region: next,
            converged: next.is_converged(),
        })
    }
}

/// The pure halving step, followed by clamping the column into its range.
pub fn halve(region: &Region, direction: Direction) -> Region {
    let mut next = *region;
    match direction {
        Direction::Up => {
            next.current_line = (region.top_line + region.current_line) / 2;
            next.bottom_line = region.current_line;
        }
        Direction::Down => {
            next.current_line = (region.bottom_line + region.current_line) / 2;
            next.top_line = region.current_line;
        }
        Direction::Left => {
            next.current_col = (region.left_col + region.current_col) / 2;
            next.right_col = region.current_col;
        }
        Direction::Right => {
            next.current_col = (region.right_col + region.current_col) / 2;
            next.left_col = region.current_col;
        }
    }
    next.current_col = next.current_col.clamp(next.left_col, next.right_col);
    next
}

/// Pulls the column back to `width`, the display width of the current line.
///
/// A zero-width line bounds the column at 1. The column never drops below
/// `left_col`, so the region stays well-formed even when the line ends left
/// of the active columns.
pub fn clamp_to_width(mut region: Region, width: usize) -> Region {
    let bound = width.max(1);
    if region.current_col > bound {
        region.current_col = bound.max(region.left_col);
    }
    region
}
