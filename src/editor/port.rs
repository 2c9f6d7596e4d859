//! The editor capability consumed by jump mode.
//!
//! Jump mode never touches a concrete editor. Everything it needs (cursor,
//! window bounds, line widths, highlight marks, input) goes through the
//! [`EditorPort`] trait so the same state machine can drive the terminal
//! viewer, the headless editor used in tests, or any embedding host.
//!
//! All positions are 1-based: line 1 is the first buffer line and column 1 is
//! the first display cell of a line.

use std::fmt;
use std::io;

use thiserror::Error;

/// A 1-based (line, column) cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Buffer line, starting at 1.
    pub line: usize,
    /// Display column, starting at 1.
    pub col: usize,
}

impl Position {
    /// Creates a position from a line and column.
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A horizontal run of `len` cells on one line, starting at `col`.
///
/// This is the unit a highlight mark covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSpan {
    pub line: usize,
    pub col: usize,
    pub len: usize,
}

impl CellSpan {
    pub fn new(line: usize, col: usize, len: usize) -> Self {
        Self { line, col, len }
    }

    /// Returns true if the span covers the given cell.
    pub fn contains(&self, line: usize, col: usize) -> bool {
        self.line == line && col >= self.col && col < self.col + self.len
    }
}

/// Opaque handle to a highlight mark created through an [`EditorPort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl fmt::Display for MarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The visible window of the buffer: first and last visible line and the
/// number of text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub top: usize,
    pub bottom: usize,
    pub width: usize,
}

/// Errors reported by an [`EditorPort`].
///
/// Jump mode does not handle these; they propagate to whoever drives the
/// session.
#[derive(Debug, Error)]
pub enum PortError {
    /// A line outside `1..=last` was requested.
    #[error("line {line} is out of range (buffer has {last} lines)")]
    LineOutOfRange { line: usize, last: usize },

    /// A mark handle that the editor does not know about.
    #[error("no highlight mark with id {0}")]
    UnknownMark(MarkId),

    /// The input source ended while jump mode was waiting for a key.
    #[error("input closed while waiting for a key")]
    InputClosed,

    /// The editor refused a literal command.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    /// Terminal or file I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias for [`EditorPort`] operations.
pub type PortResult<T> = Result<T, PortError>;

/// Read-only access to line display widths.
///
/// Split from [`EditorPort`] so the pure navigation code can clamp columns
/// without holding the whole editor mutably.
pub trait LineWidths {
    /// Display width of `line` in cells. An empty line has width 0.
    fn line_width(&self, line: usize) -> PortResult<usize>;
}

/// Editor primitives jump mode is built on.
pub trait EditorPort: LineWidths {
    /// Current cursor cell.
    fn cursor(&self) -> PortResult<Position>;

    /// First visible line of the window.
    fn window_top(&self) -> PortResult<usize>;

    /// Last visible line of the window.
    fn window_bottom(&self) -> PortResult<usize>;

    /// Number of text columns in the window.
    fn window_width(&self) -> PortResult<usize>;

    /// Number of the last line in the buffer.
    fn last_line(&self) -> PortResult<usize>;

    /// Text of `line`.
    fn line_text(&self, line: usize) -> PortResult<String>;

    /// Moves the cursor. Editors may clamp the position to the buffer.
    fn set_cursor(&mut self, position: Position) -> PortResult<()>;

    /// Highlights `cells` with `group` and returns a handle for later removal.
    fn add_mark(&mut self, group: &str, cells: &[CellSpan]) -> PortResult<MarkId>;

    /// Removes a mark created by [`EditorPort::add_mark`].
    fn delete_mark(&mut self, id: MarkId) -> PortResult<()>;

    /// Forces the screen to reflect the current state.
    fn redraw(&mut self) -> PortResult<()>;

    /// Blocks until one character of input is available.
    fn read_char(&mut self) -> PortResult<char>;

    /// Executes a literal editor command such as `normal! j`.
    fn execute(&mut self, command: &str) -> PortResult<()>;

    /// Reads the three window bounds at once.
    fn window(&self) -> PortResult<WindowBounds> {
        Ok(WindowBounds {
            top: self.window_top()?,
            bottom: self.window_bottom()?,
            width: self.window_width()?,
        })
    }
}
