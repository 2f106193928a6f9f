//! Panel 3 — Help: keyboard shortcuts and the signal legend.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Dashboard");
    key(&mut lines, "r", "Refresh quotes (disabled while pending)");
    key(&mut lines, "", "Prices auto-update on the configured cadence");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Tickers");
    key(&mut lines, "j / k", "Move cursor down / up");
    lines.push(Line::from(""));

    section(&mut lines, "Signals");
    key(&mut lines, "↗ Buy", "Bullish recommendation (green)");
    key(&mut lines, "↘ Sell", "Bearish recommendation (red)");
    key(&mut lines, "→ Hold", "Neutral recommendation (amber)");
    lines.push(Line::from(""));

    section(&mut lines, "About");
    key(&mut lines, "", "All data is simulated; no market feed is contacted.");
    key(&mut lines, "", "Run with --seed for a reproducible session.");

    f.render_widget(Paragraph::new(lines), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>16}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
