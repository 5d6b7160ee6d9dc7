use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use quotui::clipboard::{self, ClipboardSink};
use quotui::config::{self, Config};
use quotui::export::PngRasterizer;
use quotui::model::Model;
use quotui::quotes::{CategoryFilter, QuoteSet};
use quotui::services::{self, ExportRequest, ExportResponse};
use quotui::{logging, ui, utils};

mod app;
mod handlers;

/// Quotation gallery in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/quotui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Quotation file (YAML, or JSON with a .json extension)
    #[arg(long)]
    quotes: Option<PathBuf>,

    /// Initial category: all, work, study, youth, philosophy, revolution
    #[arg(long)]
    category: Option<String>,
}

pub struct App {
    // Pure application state
    pub model: Model,

    // Services
    clipboard: Box<dyn ClipboardSink>,
    rng: StdRng,
    export_tx: mpsc::UnboundedSender<ExportRequest>,
    export_rx: mpsc::UnboundedReceiver<ExportResponse>,
}

impl App {
    fn new(
        model: Model,
        clipboard: Box<dyn ClipboardSink>,
        rng: StdRng,
        export_tx: mpsc::UnboundedSender<ExportRequest>,
        export_rx: mpsc::UnboundedReceiver<ExportResponse>,
    ) -> Self {
        Self {
            model,
            clipboard,
            rng,
            export_tx,
            export_rx,
        }
    }

    /// Wire up services from configuration
    ///
    /// Must run inside the tokio runtime (the export service spawns a task).
    fn from_config(config: &Config, quotes: QuoteSet) -> Self {
        let rasterizer = PngRasterizer::discover(config.font_path.as_deref());
        let download_dir = config
            .download_dir
            .clone()
            .unwrap_or_else(utils::default_download_dir);
        tracing::debug!("Share cards are saved to {}", download_dir.display());

        let (export_tx, export_rx) = services::spawn_export_service(Arc::new(rasterizer), download_dir);

        Self::new(
            Model::new(quotes, config.vim_mode),
            clipboard::from_config(config.clipboard_command.as_deref()),
            StdRng::from_entropy(),
            export_tx,
            export_rx,
        )
    }

    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        handlers::handle_mouse(self, mouse);
    }

    /// Apply every export response that has arrived, without waiting
    fn drain_export_responses(&mut self) {
        while let Ok(response) = self.export_rx.try_recv() {
            handlers::handle_export_response(self, response);
        }
    }
}

/// Load the quotation set: --quotes, then config `quotes_path`, then built-in
fn load_quotes(cli_path: Option<PathBuf>, config: &Config) -> Result<QuoteSet> {
    match cli_path.or_else(|| config.quotes_path.clone()) {
        Some(path) => {
            tracing::debug!("Loading quotations from {:?}", path);
            QuoteSet::load(&path).with_context(|| format!("Failed to load quotations from {}", path.display()))
        }
        None => QuoteSet::builtin().context("Built-in quotation data is invalid"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    logging::init_logging(args.debug)?;

    // Config file is optional; an explicit --config must exist
    let mut config = match config::get_config_path(args.config.as_deref())? {
        Some(path) => {
            tracing::debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let initial_filter = match args.category.as_deref() {
        Some(id) => Some(CategoryFilter::from_id(id).ok_or_else(|| {
            anyhow!(
                "Unknown category '{}' (expected one of: {})",
                id,
                CategoryFilter::TABS.map(|t| t.id()).join(", ")
            )
        })?),
        None => None,
    };

    let quotes = load_quotes(args.quotes, &config)?;
    tracing::info!("Loaded {} quotations", quotes.len());

    // Initialize app
    let mut app = App::from_config(&config, quotes);
    if let Some(filter) = initial_filter {
        app.model.gallery.set_category(filter);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        let now = Instant::now();
        terminal.draw(|f| {
            ui::render(f, &mut app.model, now);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        let reverted = app.model.copy_acks.expire(Instant::now());
        if !reverted.is_empty() {
            tracing::debug!("Copy acknowledgment cleared for {:?}", reverted);
        }

        app.drain_export_responses();

        // Poll for at most 250ms so timers and export results still redraw
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.model.ui.should_quit {
            break;
        }
    }

    Ok(())
}
