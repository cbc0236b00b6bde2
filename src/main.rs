mod app;
mod config;
mod error;
mod handlers;
mod model;
mod services;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::{App, AppEvent};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use services::RedditClient;
use std::{fs, io, path::PathBuf, sync::Arc, sync::Mutex, time::Duration};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Multi-column subreddit reader for the terminal.
#[derive(Parser, Debug)]
#[command(name = "subdeck", version, about)]
struct Args {
    /// Subreddits to open as columns at startup (without the r/ prefix)
    subreddits: Vec<String>,

    /// Config file (defaults to <config dir>/subdeck/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL, e.g. a local proxy
    #[arg(long)]
    api_base: Option<String>,

    /// Where to write logs (defaults to <cache dir>/subdeck/subdeck.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    debug: bool,
}

fn init_logging(args: &Args) -> Result<()> {
    let path = args.log_file.clone().unwrap_or_else(Config::default_log_path);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let default_level = if args.debug { "debug" } else { "info" };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn load_configuration(args: &Args) -> Result<Config> {
    let mut config = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(base) = &args.api_base {
        config.api_base = base.clone();
    }
    config.subreddits.extend(args.subreddits.iter().cloned());
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = load_configuration(&args)?;
    info!("Starting subdeck v{}", env!("CARGO_PKG_VERSION"));

    let client = RedditClient::new(&config).context("building HTTP client")?;

    // Enable terminal raw mode
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, Arc::new(client)).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("exiting with error: {:#}", e);
    }
    info!("subdeck stopped");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    client: Arc<RedditClient>,
) -> Result<()> {
    // Create event loop channels
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let startup = config.subreddits.clone();

    let mut app = App::new(config, client, event_tx.clone());
    for name in &startup {
        app.add_subreddit(name);
    }

    // Spawn terminal event handler
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;

            // Drain pending terminal events without blocking
            while event::poll(Duration::from_millis(0)).unwrap_or(false) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(AppEvent::Terminal(ev)).is_err() {
                            return;
                        }
                    }
                    Err(_) => break,
                }
            }

            if event_tx.send(AppEvent::Tick).is_err() {
                return;
            }
        }
    });

    // Main application loop
    while !app.ui.should_quit {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        match event_rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }
    }

    Ok(())
}
