//! # HENU PS Entry Point
//!
//! Terminal rendition of the HENU PS marketing site and its mock IDE.
//!
//! ## Usage
//!
//! ```bash
//! # Start on the landing page
//! henu
//!
//! # Start directly in the IDE with a different theme
//! henu --route /ide --theme nord
//!
//! # Print the resolved configuration and exit
//! henu --debug
//! ```
//!
//! ## Key Bindings
//!
//! ### Everywhere
//! - `1`..`5` - Landing, Workflow, Blog, Resources, IDE
//! - `t` - Cycle theme (saved to the config file)
//! - `q` / `Ctrl+C` - Quit
//!
//! ### IDE
//! - `Ctrl+`` ` / `Ctrl+Space` / `Ctrl+Scroll` - Open the terminal
//! - `Esc` - Close the terminal
//! - `o` - Open the project folder
//! - `Tab` - Switch pane
//! - `a` - Show/hide the assistant
//!
//! See [`henu::ui::input`] for the full list.

use henu::ide::highlight::Highlighter;
use henu::logging;
use henu::ui;
use henu::ui::app::Route;
use henu::ui::config::Config;
use henu::ui::theme::Theme;
use henu::ui::App;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::time::{Duration, Instant};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// HENU PS - the premium IDE experience, in your terminal
#[derive(Parser, Debug)]
#[command(name = "henu")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive tour of the HENU PS site and its mock IDE", long_about = None)]
struct Args {
    /// Page to open first: /, /workflow, /blog, /resources or /ide
    #[arg(short, long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Theme to use for this session (see --list-themes)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the built-in theme names and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    let route = Route::from_path(&args.route)?;

    let mut config = Config::load();
    if let Some(name) = &args.theme {
        let theme = Theme::by_name(name).with_context(|| {
            format!("Unknown theme: {} (try --list-themes)", name)
        })?;
        config.theme = theme.name.to_string();
    }

    // Debug mode: print the resolved settings and exit
    if args.debug {
        println!("=== Route ===");
        println!("  {}", route.path());
        println!("\n=== Config ===");
        if let Ok(path) = Config::config_path() {
            println!("  Path: {}", path.display());
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?
        );
        if let Ok(dir) = logging::log_directory() {
            println!("\n=== Logs ===\n  {}", dir.display());
        }
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Warning: Logging disabled: {:#}", e);
    }

    let highlighter = Highlighter::new()?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, route, highlighter, Instant::now());
    app.config_path = Config::config_path().ok();

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    if let Err(e) = &run_result {
        tracing::error!("Exited with error: {:#}", e);
    }

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal
            .draw(|f| ui::render(f, app, now))
            .map_err(|e| anyhow::anyhow!("Failed to draw terminal UI: {}", e))?;

        // ~60fps while something moves, slower when the screen is static
        let event = event_reader.read_event(app.poll_timeout(now))?;

        // If no event, continue the loop (re-render for animations)
        if let Some(event) = event {
            ui::input::handle_event(app, &event, Instant::now(), Utc::now());
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(mut ide) = app.ide.take() {
        ide.unmount();
    }
    tracing::info!("HENU PS exiting");

    Ok(())
}
