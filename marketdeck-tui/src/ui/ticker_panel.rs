//! Panel 2 — Tickers: static symbol table with signals and row striping.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use marketdeck_core::format;
use marketdeck_core::ticker::glyph_for_label;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.tickers;

    if state.rows.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No tickers to display.", theme::muted())),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let header_line = Line::from(vec![
        Span::styled(format!("{} symbols", state.rows.len()), theme::accent()),
        Span::styled("  [j/k]move", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(header_line), chunks[0]);

    render_table(f, chunks[1], app);
}

fn render_table(f: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.tickers;

    let header_cells = ["Ticker", "Last", "Change", "Chg%", "Signal"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::accent_bold()));
    let header = Row::new(header_cells).height(1);

    let rows = state.rows.iter().enumerate().map(|(i, row)| {
        // Striping by zero-based index parity; the cursor row renders
        // reversed on top of its stripe.
        let mut row_style = theme::stripe(i);
        if i == state.cursor {
            row_style = row_style.add_modifier(Modifier::REVERSED);
        }

        let cells = vec![
            Cell::from(row.ticker.clone()).style(theme::accent()),
            Cell::from(format::price(row.last)),
            Cell::from(format::change(row.change)).style(theme::pnl(row.change)),
            Cell::from(format::percent(row.change_percent))
                .style(theme::pnl(row.change_percent)),
            signal_cell(row.signal.label()),
        ];

        Row::new(cells).style(row_style).height(1)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, area);
}

/// Badge cell keyed by the signal label, total over arbitrary labels: the
/// glyph and color helpers both fall back to a gray "−" for anything outside
/// the buy/sell/hold enumeration.
fn signal_cell(label: &str) -> Cell<'_> {
    Cell::from(format!("{} {}", glyph_for_label(label), label))
        .style(theme::signal_for_label(label))
}
