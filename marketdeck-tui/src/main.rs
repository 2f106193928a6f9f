//! marketdeck — three-panel terminal dashboard over simulated market data.
//!
//! Panels:
//! 1. Dashboard — index summary cards and intraday line charts
//! 2. Tickers — static symbol table with trading signals
//! 3. Help — keyboard shortcuts and the signal legend

mod app;
mod input;
mod persistence;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::AppState;
use crate::worker::{WorkerCommand, WorkerResponse};

const DEFAULT_TICK_MS: u64 = 5000;

#[derive(Parser, Debug)]
#[command(
    name = "marketdeck",
    about = "Terminal dashboard over simulated market data",
    version
)]
struct Args {
    /// RNG seed for the jitter engine (entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Periodic update cadence in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Simulated network delay for manual refresh, in milliseconds
    #[arg(long, default_value_t = 1000)]
    refresh_delay_ms: u64,

    /// Override the UI state file location
    #[arg(long)]
    state_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let seed = args.seed.unwrap_or_else(rand::random);
    let state_path = args.state_path.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marketdeck")
            .join("state.json")
    });

    // Load persisted UI state
    let persisted = persistence::load(&state_path);

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));

    // Spawn worker. It gets a derived seed so main-thread ticks and worker
    // refreshes replay independently from one --seed.
    let worker_handle = worker::spawn_worker(
        cmd_rx,
        resp_tx,
        cancel.clone(),
        seed.wrapping_add(1),
        Duration::from_millis(args.refresh_delay_ms),
    );

    // Build app state
    let mut app = AppState::new(
        cmd_tx.clone(),
        resp_rx,
        cancel.clone(),
        seed,
        Duration::from_millis(args.tick_ms),
        state_path.clone(),
    );

    // Apply persisted state; an explicit --tick-ms wins over the saved cadence.
    persistence::apply(&mut app, persisted);
    if args.tick_ms != DEFAULT_TICK_MS {
        app.dashboard.tick_interval = Duration::from_millis(args.tick_ms);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save UI state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Discard any in-flight refresh, then stop the worker.
    cancel.store(true, Ordering::Relaxed);
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Periodic quote perturbation on its wall-clock cadence
        if app.dashboard.tick_due() {
            app.dashboard.apply_tick();
        }

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::RefreshDone { quotes } => app.apply_refresh(quotes),
    }
}
