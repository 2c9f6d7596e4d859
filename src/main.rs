use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing::{info, warn};

use bsmotion::app::{run_app, TerminalEditor};
use bsmotion::config::Config;
use bsmotion::editor::buffer::TextBuffer;
use bsmotion::editor::state::EditorState;
use bsmotion::input::InputHandler;
use bsmotion::jump::{KeyBindings, Scope};
use bsmotion::logging;
use bsmotion::theme::get_builtin_theme;
use bsmotion::ui::UI;

/// bsmotion - reach any visible character in a handful of key presses
#[derive(Parser)]
#[command(name = "bsmotion")]
#[command(version)]
#[command(about = "A terminal file viewer with binary-search jump mode", long_about = None)]
struct Cli {
    /// File to view (omit to read from stdin if piped)
    file: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Config file to use instead of ~/.config/bsmotion/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Jump-mode region: window or buffer (overrides the config file)
    #[arg(short, long)]
    scope: Option<Scope>,

    /// Log file path (default: <data_local_dir>/bsmotion/bsmotion.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with the
/// alternate screen active.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_file.clone())?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(),
    };

    // Read the text BEFORE terminal setup; stdin may carry it
    let (buffer, filename, stdin_was_piped) = if let Some(file_path) = cli.file {
        let buffer = TextBuffer::load(&file_path)
            .with_context(|| format!("Failed to read {}", file_path))?;
        (buffer, Some(file_path), false)
    } else if !io::stdin().is_terminal() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        (TextBuffer::from_text(&text), None, true)
    } else {
        anyhow::bail!("No input: pass a file or pipe text on stdin");
    };

    let mut jump = config.jump.clone();
    if let Some(scope) = cli.scope {
        jump.scope = scope;
    }
    let bindings = if jump.keys.is_empty() {
        warn!("no jump keys configured, using vim defaults");
        KeyBindings::vim()
    } else {
        jump.keys.clone()
    };
    let mut controller = jump.controller();

    // CLI theme overrides config theme
    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);
    let theme = match get_builtin_theme(theme_name) {
        Some(theme) => theme,
        None => {
            warn!(theme = theme_name, "theme not found, using default-dark");
            get_builtin_theme("default-dark").context("Built-in theme missing")?
        }
    };
    let ui = UI::new(theme).with_groups(jump.groups());

    let input = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let mut state = EditorState::new(buffer);
    if let Some(name) = filename {
        state.set_filename(name);
    }
    state.set_show_line_numbers(config.show_line_numbers);

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    info!(scope = %jump.scope, "starting viewer");
    let mut editor = TerminalEditor::new(terminal, ui, state, input)?;
    let result = run_app(&mut editor, &mut controller, &bindings, config.jump_key);

    // Termion handles cleanup through Drop guards, but show the cursor before exiting
    let backend = editor.terminal_mut().backend_mut();
    write!(backend, "{}", termion::cursor::Show)?;
    backend.flush()?;

    result
}
