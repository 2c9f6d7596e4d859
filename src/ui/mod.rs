/// UI module for the bsmotion terminal interface.
///
/// This module provides the main UI structure for rendering the terminal interface,
/// including layout management and widget composition.
pub mod message_area;
pub mod status_line;
pub mod text_view;

use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use std::io;

use crate::editor::state::EditorState;
use crate::jump::overlay::HighlightGroups;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of three main areas:
/// - Text view (top): the visible lines with jump-mode highlights
/// - Status line (middle): current mode, file name and cursor position
/// - Message area (bottom): messages to the user
///
/// # Example
///
/// ```
/// use bsmotion::editor::buffer::TextBuffer;
/// use bsmotion::editor::state::EditorState;
/// use bsmotion::theme::get_builtin_theme;
/// use bsmotion::ui::UI;
/// use ratatui::backend::TestBackend;
/// use ratatui::Terminal;
///
/// let ui = UI::new(get_builtin_theme("default-dark").unwrap());
/// let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
/// let mut state = EditorState::new(TextBuffer::from_text("hello\n"));
/// ui.render(&mut terminal, &mut state).unwrap();
/// assert_eq!(state.viewport_height(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct UI {
    theme: Theme,
    groups: HighlightGroups,
}

impl UI {
    /// Creates a new UI instance with the specified theme and the default
    /// highlight groups.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            groups: HighlightGroups::default(),
        }
    }

    /// Uses `groups` to decide which marks are drawn as the jump cursor and
    /// which as shade.
    pub fn with_groups(mut self, groups: HighlightGroups) -> Self {
        self.groups = groups;
        self
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Splits `area` into text view, status line and message area.
    pub fn layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Text view
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Message area
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Tells `state` how much room the text view has inside `area`.
    pub fn sync_viewport(&self, area: Rect, state: &mut EditorState) {
        let [text, _, _] = Self::layout(area);
        let width = (text.width as usize).saturating_sub(state.gutter_width());
        state.set_viewport(width, text.height as usize);
    }

    /// Renders the UI to the terminal.
    ///
    /// The viewport of `state` is updated to the current terminal size before
    /// drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
    ) -> io::Result<()> {
        terminal.draw(|f| {
            let [text, status, message] = Self::layout(f.area());
            self.sync_viewport(f.area(), state);

            text_view::render_text_view(f, text, state, &self.theme.colors, &self.groups);
            status_line::render_status_line(f, status, state, &self.theme.colors);
            message_area::render_message_area(f, message, state, &self.theme.colors);
        })?;

        Ok(())
    }
}
