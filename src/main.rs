//! # Tahseen CLI Entry Point
//!
//! This is the main entry point for the Tahseen TUI application.
//!
//! ## Overview
//!
//! Tahseen is a terminal user interface for polishing Arabic prose. The text
//! in the input editor is sent to the Gemini API together with a fixed
//! instruction prompt, and three rewritten variants come back side by side:
//! corrected (grammar only), improved (fluency), and literary (novel-ready
//! style). Each panel can be copied to the clipboard independently.
//!
//! ## Usage
//!
//! ```bash
//! # Start with an empty editor
//! GEMINI_API_KEY=... tahseen
//!
//! # Preload the editor from a file
//! GEMINI_API_KEY=... tahseen --file draft.txt
//!
//! # Override the model from the config file
//! GEMINI_API_KEY=... tahseen --model gemini-2.5-pro
//! ```
//!
//! ## Architecture
//!
//! 1. **Startup**: read config, resolve the API key (fatal when missing)
//! 2. **UI**: the event loop draws the editor and panels each tick
//! 3. **Submission**: Ctrl+S spawns one enhancement call on the runtime;
//!    the loop polls for its settlement while the input stays disabled
//! 4. **Settlement**: the outcome replaces the panel contents or the error
//!    banner
//!
//! ## Key Bindings
//!
//! - `Ctrl+S` - Submit the editor text for enhancement
//! - `Enter` - Insert a newline in the editor
//! - `Tab` - Cycle focus: editor → corrected → improved → literary
//! - `y` - Copy the focused panel to the clipboard
//! - `Esc` / `Ctrl+C` - Quit

use tahseen::enhance::{EnhanceClient, API_KEY_ENV};
use tahseen::ui;
use tahseen::ui::app::FocusPane;
use tahseen::ui::config::Config;
use tahseen::ui::editor::Editor;
use tahseen::ui::theme::Theme;
use tahseen::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Tahseen - polish Arabic prose into corrected, fluent, and literary variants
#[derive(Parser, Debug)]
#[command(name = "tahseen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Polish Arabic prose with AI, from your terminal", long_about = None)]
struct Args {
    /// Preload the input editor from a text file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Gemini model to use (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    model: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logger();
    log::info!("Starting tahseen v{}", env!("CARGO_PKG_VERSION"));

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    if let Err(ref err) = result {
        log::error!("exited with error: {err:#}");
    }

    result
}

/// Initialize file-backed logging so diagnostics never interfere with the
/// TUI. Without a writable log file the app simply runs without diagnostics.
fn init_logger() {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("tahseen.log");

    let Ok(log_file) = log_file else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
}

async fn run_application(args: Args) -> Result<()> {
    let config = Config::load();

    let model = args.model.unwrap_or_else(|| config.model.clone());
    let theme_name = args.theme.unwrap_or_else(|| config.theme.clone());
    let theme = match Theme::by_name(&theme_name) {
        Some(theme) => theme.clone(),
        None => {
            log::warn!("unknown theme '{theme_name}', falling back to default");
            Theme::default_theme().clone()
        }
    };

    // Optional preload of the editor, validated before the terminal starts.
    let preloaded = match &args.file {
        Some(path) => Some(fs::read_to_string(path).with_context(|| {
            format!("Failed to read input file: {}", path.display())
        })?),
        None => None,
    };

    if let Err(err) = config.ensure_saved() {
        log::warn!("could not write default config: {err:#}");
    }

    // The one required credential. Missing key is fatal before any UI.
    let client = match EnhanceClient::from_env(&model) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Set {API_KEY_ENV} to your Gemini API key to use tahseen.");
            std::process::exit(1);
        }
    };
    log::info!("enhancement client ready (model: {})", client.model());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme);
    if let Some(text) = preloaded {
        app.editor = Editor::from_content(&text);
    }

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, client, &mut event_reader).await;

    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: Arc<EnhanceClient>,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    // Receiver for the in-flight enhancement call, if any. A new submission
    // is prevented by the disabled input, not by cancellation.
    let mut pending: Option<mpsc::Receiver<Result<_, String>>> = None;

    loop {
        // Check whether the in-flight request settled
        if let Some(rx) = &pending {
            match rx.try_recv() {
                Ok(outcome) => {
                    app.finish_request(outcome);
                    pending = None;
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::error!("enhancement task ended without sending a result");
                    app.finish_request(Err("حدث خطأ غير متوقع.".to_string()));
                    pending = None;
                }
            }
        }

        app.editor
            .ensure_cursor_visible(ui::render::INPUT_VIEW_HEIGHT);

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        app.on_tick();

        // Shorter timeout while loading keeps the spinner moving
        let poll_timeout = if app.loading {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        let event = match event_reader.read_event(poll_timeout)? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match key.code {
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('c') if has_ctrl => {
                    app.should_quit = true;
                }
                KeyCode::Char('s') if has_ctrl => {
                    if let Some(text) = app.submit() {
                        pending = Some(spawn_enhancement(&client, text));
                    }
                }
                KeyCode::Tab => {
                    app.toggle_focus();
                }
                _ => match app.focus {
                    FocusPane::Editor if app.input_enabled() => match key.code {
                        KeyCode::Char(c) if !has_ctrl => app.editor.insert_char(c),
                        KeyCode::Enter => app.editor.insert_newline(),
                        KeyCode::Backspace => app.editor.backspace(),
                        KeyCode::Delete => app.editor.delete(),
                        KeyCode::Left => app.editor.move_left(),
                        KeyCode::Right => app.editor.move_right(),
                        KeyCode::Up => app.editor.move_up(),
                        KeyCode::Down => app.editor.move_down(),
                        _ => {}
                    },
                    FocusPane::Results(_) => {
                        if matches!(key.code, KeyCode::Char('y') | KeyCode::Enter) {
                            if let Some(text) = app.copy_focused() {
                                if let Err(err) = ui::clipboard::copy_to_clipboard(&text) {
                                    log::warn!("clipboard write failed: {err:#}");
                                }
                            }
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Spawn one best-effort enhancement call and hand back the channel the
/// event loop polls for its settlement. Failures are logged in full here;
/// only the generic user-facing message crosses into the UI state.
fn spawn_enhancement(
    client: &Arc<EnhanceClient>,
    text: String,
) -> mpsc::Receiver<Result<tahseen::enhance::EnhancementResult, String>> {
    let client = Arc::clone(client);
    let (tx, rx) = mpsc::channel();

    tokio::spawn(async move {
        let outcome = client.enhance(&text).await.map_err(|err| {
            log::error!("enhancement request failed: {err}");
            err.user_message().to_string()
        });
        let _ = tx.send(outcome);
    });

    rx
}
