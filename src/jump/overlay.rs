//! Highlight overlay for the active region.
//!
//! The overlay is one cursor cell plus up to four shade rectangles covering
//! the part of the window outside the region:
//!
//! ```text
//!  +---------------------------+
//!  |         a (above)         |
//!  +-----+-------------+-------+
//!  |  c  |   region    |   d   |
//!  +-----+-------------+-------+
//!  |         b (below)         |
//!  +---------------------------+
//! ```
//!
//! [`OverlayRenderer`] turns an [`Overlay`] into editor marks. The default
//! [`OverlayStrategy::Full`] deletes every mark and recreates the set on each
//! render; [`OverlayStrategy::Incremental`] only touches rectangles that
//! changed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::editor::port::{CellSpan, EditorPort, MarkId, PortResult, WindowBounds};
use crate::jump::region::Region;

/// Highlight group for the cursor cell unless configured otherwise.
pub const DEFAULT_CURSOR_GROUP: &str = "BSMotionCursor";
/// Highlight group for shaded cells unless configured otherwise.
pub const DEFAULT_SHADE_GROUP: &str = "BSMotionShade";

/// An inclusive, 1-based rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadeRect {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl ShadeRect {
    /// One span per row.
    pub fn spans(&self) -> Vec<CellSpan> {
        let len = self.right + 1 - self.left;
        (self.top..=self.bottom)
            .map(|line| CellSpan::new(line, self.left, len))
            .collect()
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        (self.bottom + 1 - self.top) * (self.right + 1 - self.left)
    }

    fn checked(top: usize, bottom: usize, left: usize, right: usize) -> Option<Self> {
        (top >= 1 && left >= 1 && top <= bottom && left <= right).then_some(Self {
            top,
            bottom,
            left,
            right,
        })
    }
}

/// Highlights for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub cursor: CellSpan,
    pub shades: Vec<ShadeRect>,
}

impl Overlay {
    /// Computes the overlay for `region` inside `window`.
    ///
    /// Shades are clipped to the window rows, which only matters in buffer
    /// scope where the region may extend past the screen.
    pub fn compute(region: &Region, window: WindowBounds) -> Self {
        let width = window.width.max(1);
        let mut shades = Vec::with_capacity(4);

        // above
        if region.top_line > window.top {
            shades.extend(ShadeRect::checked(
                window.top,
                (region.top_line - 1).min(window.bottom),
                1,
                width,
            ));
        }
        // below
        if region.bottom_line < window.bottom {
            shades.extend(ShadeRect::checked(
                (region.bottom_line + 1).max(window.top),
                window.bottom,
                1,
                width,
            ));
        }

        let rows_top = region.top_line.max(window.top);
        let rows_bottom = region.bottom_line.min(window.bottom);
        if region.left_col > 1 {
            shades.extend(ShadeRect::checked(
                rows_top,
                rows_bottom,
                1,
                (region.left_col - 1).min(width),
            ));
        }
        if region.right_col < width {
            shades.extend(ShadeRect::checked(
                rows_top,
                rows_bottom,
                region.right_col + 1,
                width,
            ));
        }

        Self {
            cursor: CellSpan::new(region.current_line, region.current_col, 1),
            shades,
        }
    }
}

/// How marks are refreshed between renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayStrategy {
    /// Delete everything, recreate everything.
    #[default]
    Full,
    /// Keep marks whose rectangle did not change.
    Incremental,
}

/// Highlight group names used for the overlay marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightGroups {
    pub cursor: String,
    pub shade: String,
}

impl Default for HighlightGroups {
    fn default() -> Self {
        Self {
            cursor: DEFAULT_CURSOR_GROUP.to_string(),
            shade: DEFAULT_SHADE_GROUP.to_string(),
        }
    }
}

/// Owns the marks making up the visible overlay.
#[derive(Debug, Default)]
pub struct OverlayRenderer {
    strategy: OverlayStrategy,
    groups: HighlightGroups,
    cursor_mark: Option<(CellSpan, MarkId)>,
    shade_marks: Vec<(ShadeRect, MarkId)>,
}

impl OverlayRenderer {
    pub fn new(strategy: OverlayStrategy, groups: HighlightGroups) -> Self {
        Self {
            strategy,
            groups,
            cursor_mark: None,
            shade_marks: Vec::new(),
        }
    }

    pub fn strategy(&self) -> OverlayStrategy {
        self.strategy
    }

    pub fn groups(&self) -> &HighlightGroups {
        &self.groups
    }

    /// Number of marks currently held.
    pub fn mark_count(&self) -> usize {
        self.cursor_mark.iter().count() + self.shade_marks.len()
    }

    /// The rectangles currently shaded.
    pub fn shaded(&self) -> impl Iterator<Item = &ShadeRect> {
        self.shade_marks.iter().map(|(rect, _)| rect)
    }

    /// Replaces the overlay with the one for `region` and redraws.
    ///
    /// The window bounds are read from the port at render time since moving
    /// the cursor in buffer scope may scroll the window.
    pub fn render<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        region: &Region,
    ) -> PortResult<()> {
        let overlay = Overlay::compute(region, port.window()?);
        match self.strategy {
            OverlayStrategy::Full => {
                self.clear(port)?;
                self.create(port, &overlay)?;
            }
            OverlayStrategy::Incremental => self.update(port, &overlay)?,
        }
        trace!(marks = self.mark_count(), "overlay rendered");
        port.redraw()
    }

    /// Deletes every mark this renderer created.
    ///
    /// A handle is dropped only once its delete succeeds, so after an error
    /// the remaining marks are still tracked and a retry removes them.
    pub fn clear<P: EditorPort + ?Sized>(&mut self, port: &mut P) -> PortResult<()> {
        if let Some((_, id)) = self.cursor_mark {
            port.delete_mark(id)?;
            self.cursor_mark = None;
        }
        while let Some(&(_, id)) = self.shade_marks.last() {
            port.delete_mark(id)?;
            self.shade_marks.pop();
        }
        Ok(())
    }

    fn create<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        overlay: &Overlay,
    ) -> PortResult<()> {
        let id = port.add_mark(&self.groups.cursor, &[overlay.cursor])?;
        self.cursor_mark = Some((overlay.cursor, id));
        for rect in &overlay.shades {
            let id = port.add_mark(&self.groups.shade, &rect.spans())?;
            self.shade_marks.push((*rect, id));
        }
        Ok(())
    }

    fn update<P: EditorPort + ?Sized>(
        &mut self,
        port: &mut P,
        overlay: &Overlay,
    ) -> PortResult<()> {
        match self.cursor_mark {
            Some((span, _)) if span == overlay.cursor => {}
            _ => {
                if let Some((_, id)) = self.cursor_mark {
                    port.delete_mark(id)?;
                    self.cursor_mark = None;
                }
                let id = port.add_mark(&self.groups.cursor, &[overlay.cursor])?;
                self.cursor_mark = Some((overlay.cursor, id));
            }
        }

        let mut index = 0;
        while let Some(&(rect, id)) = self.shade_marks.get(index) {
            if overlay.shades.contains(&rect) {
                index += 1;
            } else {
                port.delete_mark(id)?;
                self.shade_marks.remove(index);
            }
        }
        for rect in &overlay.shades {
            if !self.shade_marks.iter().any(|(existing, _)| existing == rect) {
                let id = port.add_mark(&self.groups.shade, &rect.spans())?;
                self.shade_marks.push((*rect, id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::port::Position;

    fn window(top: usize, bottom: usize, width: usize) -> WindowBounds {
        WindowBounds { top, bottom, width }
    }

    fn rect(top: usize, bottom: usize, left: usize, right: usize) -> ShadeRect {
        ShadeRect {
            top,
            bottom,
            left,
            right,
        }
    }

    #[test]
    fn test_full_window_region_has_no_shade() {
        let region = Region::for_window(Position::new(5, 5), window(1, 20, 80));
        let overlay = Overlay::compute(&region, window(1, 20, 80));
        assert!(overlay.shades.is_empty());
        assert_eq!(overlay.cursor, CellSpan::new(5, 5, 1));
    }

    #[test]
    fn test_four_sided_shade() {
        let region = Region::new(5, 10, 20, 40, Position::new(7, 30));
        let overlay = Overlay::compute(&region, window(1, 20, 80));
        assert_eq!(
            overlay.shades,
            vec![
                rect(1, 4, 1, 80),
                rect(11, 20, 1, 80),
                rect(5, 10, 1, 19),
                rect(5, 10, 41, 80),
            ]
        );
    }

    #[test]
    fn test_shade_clipped_to_window_rows() {
        // buffer scope: region runs past both window edges
        let region = Region::new(1, 500, 1, 30, Position::new(120, 10));
        let overlay = Overlay::compute(&region, window(100, 140, 80));
        assert_eq!(overlay.shades, vec![rect(100, 140, 31, 80)]);
    }

    #[test]
    fn test_spans_cover_each_row() {
        let shade = rect(3, 5, 2, 4);
        assert_eq!(
            shade.spans(),
            vec![
                CellSpan::new(3, 2, 3),
                CellSpan::new(4, 2, 3),
                CellSpan::new(5, 2, 3),
            ]
        );
        assert_eq!(shade.area(), 9);
    }
}
