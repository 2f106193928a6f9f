//! Keyboard input dispatch — global keys first, then panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Dashboard;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Tickers;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // Panel-specific keys.
    match app.active_panel {
        Panel::Dashboard => handle_dashboard_key(app, key),
        Panel::Tickers => handle_tickers_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('r') = key.code {
        if app.dashboard.is_loading {
            app.set_warning("Refresh already in progress");
        } else {
            app.request_refresh();
        }
    }
}

fn handle_tickers_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.tickers.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.tickers.cursor_up(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::WorkerCommand;
    use std::path::PathBuf;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

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

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let (mut app, _rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn number_keys_switch_panels() {
        let (mut app, _rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_panel, Panel::Tickers);
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_panel, Panel::Help);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_panel, Panel::Dashboard);
    }

    #[test]
    fn tab_cycles_panels() {
        let (mut app, _rx) = test_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Tickers);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.active_panel, Panel::Dashboard);
    }

    #[test]
    fn r_requests_refresh_once() {
        let (mut app, rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(app.dashboard.is_loading);
        assert!(matches!(rx.try_recv(), Ok(WorkerCommand::Refresh { .. })));

        // Disabled while pending.
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn refresh_only_reachable_from_dashboard() {
        let (mut app, rx) = test_app();
        app.active_panel = Panel::Tickers;
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(!app.dashboard.is_loading);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn jk_move_ticker_cursor() {
        let (mut app, _rx) = test_app();
        app.active_panel = Panel::Tickers;
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.tickers.cursor, 2);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.tickers.cursor, 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let (mut app, _rx) = test_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }
}
