//! Line-oriented text storage.

use std::fs;
use std::io;
use std::path::Path;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::editor::port::{LineWidths, PortError, PortResult};

/// Immutable text split into lines.
///
/// A buffer always has at least one line, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    /// Splits `text` on newlines. A trailing newline does not add a line.
    ///
    /// # Example
    ///
    /// ```
    /// use bsmotion::editor::buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::from_text("one\ntwo\n");
    /// assert_eq!(buffer.line_count(), 2);
    /// assert_eq!(buffer.line(2), Some("two"));
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text
            .lines()
            .map(|line| line.replace('\t', "    "))
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Reads a file. Invalid UTF-8 is replaced.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a 1-based line.
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    /// Display width of a 1-based line in terminal cells.
    pub fn display_width(&self, line: usize) -> Option<usize> {
        self.line(line).map(UnicodeWidthStr::width)
    }

    /// Iterates the characters of a line with the 1-based display column each
    /// one starts at.
    pub fn cells(&self, line: usize) -> impl Iterator<Item = (usize, char)> + '_ {
        let mut col = 1;
        self.line(line).unwrap_or("").chars().map(move |c| {
            let start = col;
            col += c.width().unwrap_or(0);
            (start, c)
        })
    }
}

impl LineWidths for TextBuffer {
    fn line_width(&self, line: usize) -> PortResult<usize> {
        self.display_width(line).ok_or(PortError::LineOutOfRange {
            line,
            last: self.line_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_one_line() {
        let buffer = TextBuffer::from_text("");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(1), Some(""));
        assert_eq!(buffer.line_width(1).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range_lines() {
        let buffer = TextBuffer::from_text("a\nb");
        assert_eq!(buffer.line(0), None);
        assert_eq!(buffer.line(3), None);
        assert!(matches!(
            buffer.line_width(3),
            Err(PortError::LineOutOfRange { line: 3, last: 2 })
        ));
    }

    #[test]
    fn test_wide_characters_count_double() {
        let buffer = TextBuffer::from_text("日本語");
        assert_eq!(buffer.display_width(1), Some(6));
        let cells: Vec<_> = buffer.cells(1).collect();
        assert_eq!(cells, vec![(1, '日'), (3, '本'), (5, '語')]);
    }

    #[test]
    fn test_tabs_expand_to_spaces() {
        let buffer = TextBuffer::from_text("\tx");
        assert_eq!(buffer.line(1), Some("    x"));
        assert_eq!(buffer.display_width(1), Some(5));
    }
}
