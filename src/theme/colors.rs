//! Color definitions for bsmotion themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the bsmotion terminal UI. Colors are organized into three
//! categories: text, jump-mode highlights, and UI chrome.

use ratatui::style::Color;

/// Defines all colors used in a bsmotion theme.
///
/// # Examples
///
/// ```
/// use bsmotion::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Shade: {:?}", dark.shade);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Text colors
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Color for the line-number gutter.
    pub line_number: Color,
    /// Background of the normal-mode cursor cell.
    pub cursor: Color,

    // Jump-mode colors
    /// Background of the jump-mode cursor cell.
    pub jump_cursor: Color,
    /// Foreground of the jump-mode cursor cell.
    pub jump_cursor_fg: Color,
    /// Foreground of text outside the active region.
    pub shade: Color,
    /// Background of cells outside the active region.
    pub shade_bg: Color,

    // UI colors
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Color of the mode label while jump mode is active.
    pub jump_mode_label: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// ANSI colors adapt to the user's terminal color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use bsmotion::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            line_number: Color::DarkGray,
            cursor: Color::LightBlue,

            jump_cursor: Color::LightRed,
            jump_cursor_fg: Color::Black,
            shade: Color::DarkGray,
            shade_bg: Color::Reset,

            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            jump_mode_label: Color::Red,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use bsmotion::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250), // #fafafa
            foreground: Color::Rgb(56, 58, 66),    // #383a42
            line_number: Color::Rgb(160, 161, 167),
            cursor: Color::Rgb(82, 139, 255),

            jump_cursor: Color::Rgb(228, 86, 73),
            jump_cursor_fg: Color::Rgb(250, 250, 250),
            shade: Color::Rgb(190, 190, 195),
            shade_bg: Color::Rgb(240, 240, 240),

            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),
            jump_mode_label: Color::Rgb(228, 86, 73),

            error: Color::Rgb(228, 86, 73),
            warning: Color::Rgb(193, 132, 1),
            info: Color::Rgb(64, 120, 242),
        }
    }

    /// Returns the Gruvbox dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),  // bg0
            foreground: Color::Rgb(235, 219, 178), // fg
            line_number: Color::Rgb(124, 111, 100),
            cursor: Color::Rgb(131, 165, 152),

            jump_cursor: Color::Rgb(251, 73, 52),
            jump_cursor_fg: Color::Rgb(40, 40, 40),
            shade: Color::Rgb(102, 92, 84),
            shade_bg: Color::Rgb(29, 32, 33),

            status_line_bg: Color::Rgb(80, 73, 69),
            status_line_fg: Color::Rgb(235, 219, 178),
            jump_mode_label: Color::Rgb(254, 128, 25),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }
}
