//! Application state — single-owner, main-thread only.
//!
//! The worker thread communicates via channels; the only state it ever sees
//! is the quote snapshot carried inside a refresh command.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use marketdeck_core::quote::{seed_quotes, Quote};
use marketdeck_core::ticker::{seed_rows, TickerRow};
use marketdeck_core::update;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Dashboard,
    Tickers,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Dashboard => 0,
            Panel::Tickers => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Dashboard),
            1 => Some(Panel::Tickers),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Tickers => "Tickers",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity for the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Dashboard panel state: the quote list plus the periodic-tick machinery.
pub struct DashboardState {
    pub quotes: Vec<Quote>,
    pub is_loading: bool,
    pub tick_interval: Duration,
    pub last_tick: Instant,
    rng: StdRng,
}

impl DashboardState {
    pub fn new(seed: u64, tick_interval: Duration) -> Self {
        Self {
            quotes: seed_quotes(),
            is_loading: false,
            tick_interval,
            last_tick: Instant::now(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Has the periodic cadence elapsed since the last applied tick?
    pub fn tick_due(&self) -> bool {
        self.last_tick.elapsed() >= self.tick_interval
    }

    /// Apply one periodic perturbation and rearm the timer.
    pub fn apply_tick(&mut self) {
        update::tick(&mut self.quotes, &mut self.rng);
        self.last_tick = Instant::now();
    }
}

/// Ticker panel state: static rows and a cursor highlight.
pub struct TickerPanelState {
    pub rows: Vec<TickerRow>,
    pub cursor: usize,
}

impl TickerPanelState {
    pub fn new() -> Self {
        Self {
            rows: seed_rows(),
            cursor: 0,
        }
    }

    pub fn cursor_down(&mut self) {
        if !self.rows.is_empty() && self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Panel states
    pub dashboard: DashboardState,
    pub tickers: TickerPanelState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    pub cancel: Arc<AtomicBool>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        cancel: Arc<AtomicBool>,
        seed: u64,
        tick_interval: Duration,
        state_path: PathBuf,
    ) -> Self {
        Self {
            active_panel: Panel::Dashboard,
            running: true,
            dashboard: DashboardState::new(seed, tick_interval),
            tickers: TickerPanelState::new(),
            worker_tx,
            worker_rx,
            cancel,
            status_message: None,
            state_path,
        }
    }

    /// Kick off a manual refresh unless one is already pending. The trigger is
    /// disabled while the loading flag is up.
    pub fn request_refresh(&mut self) {
        if self.dashboard.is_loading {
            return;
        }
        let command = WorkerCommand::Refresh {
            quotes: self.dashboard.quotes.clone(),
        };
        if self.worker_tx.send(command).is_err() {
            self.set_error("Refresh worker is not running");
            return;
        }
        self.dashboard.is_loading = true;
        self.set_status("Refreshing...");
    }

    /// Apply a completed refresh from the worker. Last writer wins against the
    /// periodic tick.
    pub fn apply_refresh(&mut self, quotes: Vec<Quote>) {
        self.dashboard.quotes = quotes;
        self.dashboard.is_loading = false;
        self.set_status("Quotes refreshed");
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn test_app() -> (AppState, mpsc::Receiver<WorkerCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        let app = AppState::new(
            cmd_tx,
            resp_rx,
            Arc::new(AtomicBool::new(false)),
            42,
            Duration::from_millis(5000),
            PathBuf::from("."),
        );
        (app, cmd_rx)
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Dashboard.next(), Panel::Tickers);
        assert_eq!(Panel::Help.next(), Panel::Dashboard);
        assert_eq!(Panel::Dashboard.prev(), Panel::Help);
        assert_eq!(Panel::Tickers.prev(), Panel::Dashboard);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..3 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(3).is_none());
    }

    #[test]
    fn refresh_sets_loading_and_sends_one_command() {
        let (mut app, cmd_rx) = test_app();
        assert!(!app.dashboard.is_loading);

        app.request_refresh();
        assert!(app.dashboard.is_loading);
        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(WorkerCommand::Refresh { .. })
        ));

        // Trigger is disabled while pending: no second command goes out.
        app.request_refresh();
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn apply_refresh_clears_loading() {
        let (mut app, _cmd_rx) = test_app();
        app.request_refresh();

        let replacement = seed_quotes();
        app.apply_refresh(replacement.clone());
        assert!(!app.dashboard.is_loading);
        assert_eq!(app.dashboard.quotes, replacement);
    }

    #[test]
    fn tick_rearms_timer() {
        let mut dash = DashboardState::new(1, Duration::from_secs(3600));
        assert!(!dash.tick_due());
        let before = dash.quotes.clone();
        dash.apply_tick();
        assert_ne!(dash.quotes, before);
        assert!(!dash.tick_due());
    }

    #[test]
    fn ticker_cursor_stays_in_bounds() {
        let mut t = TickerPanelState::new();
        for _ in 0..100 {
            t.cursor_down();
        }
        assert_eq!(t.cursor, t.rows.len() - 1);
        for _ in 0..100 {
            t.cursor_up();
        }
        assert_eq!(t.cursor, 0);
    }
}
