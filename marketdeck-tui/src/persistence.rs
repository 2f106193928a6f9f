//! UI state persistence — JSON save/load across restarts.
//!
//! Only view preferences persist; quote data is fabricated per session.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::Panel;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_panel: Panel,
    pub tick_ms: u64,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_panel: Panel::Dashboard,
            tick_ms: 5000,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &crate::app::AppState) -> PersistedState {
    PersistedState {
        active_panel: app.active_panel,
        tick_ms: app.dashboard.tick_interval.as_millis() as u64,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut crate::app::AppState, state: PersistedState) {
    app.active_panel = state.active_panel;
    app.dashboard.tick_interval = Duration::from_millis(state.tick_ms.max(100));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("marketdeck_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            active_panel: Panel::Tickers,
            tick_ms: 2500,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.active_panel, Panel::Tickers);
        assert_eq!(loaded.tick_ms, 2500);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.active_panel, Panel::Dashboard);
        assert_eq!(loaded.tick_ms, 5000);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("marketdeck_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.active_panel, Panel::Dashboard);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_floors_degenerate_cadence() {
        let (cmd_tx, _cmd_rx) = std::sync::mpsc::channel();
        let (_resp_tx, resp_rx) = std::sync::mpsc::channel();
        let mut app = crate::app::AppState::new(
            cmd_tx,
            resp_rx,
            std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false)),
            1,
            Duration::from_millis(5000),
            std::path::PathBuf::from("."),
        );
        apply(
            &mut app,
            PersistedState {
                active_panel: Panel::Help,
                tick_ms: 0,
            },
        );
        assert_eq!(app.active_panel, Panel::Help);
        assert_eq!(app.dashboard.tick_interval, Duration::from_millis(100));
    }
}
