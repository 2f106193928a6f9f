//! Panel 1 — Dashboard: index summary cards and intraday line charts.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use marketdeck_core::format;
use marketdeck_core::quote::Quote;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let quotes = &app.dashboard.quotes;

    if quotes.is_empty() {
        render_no_quotes(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(6),
        ])
        .split(area);

    render_header(f, chunks[0], app);
    render_cards(f, chunks[1], quotes);
    render_charts(f, chunks[2], quotes);
}

fn render_no_quotes(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No quotes loaded.", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let line = if app.dashboard.is_loading {
        Line::from(Span::styled("Refreshing...", theme::warning()))
    } else {
        Line::from(vec![
            Span::styled("[r]efresh", theme::accent()),
            Span::styled(
                format!(
                    "  auto-update every {:.0}s (simulated data)",
                    app.dashboard.tick_interval.as_secs_f64()
                ),
                theme::muted(),
            ),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_cards(f: &mut Frame, area: Rect, quotes: &[Quote]) {
    let columns = split_columns(area, quotes.len());
    for (quote, column) in quotes.iter().zip(columns.iter()) {
        render_card(f, *column, quote);
    }
}

fn render_card(f: &mut Frame, area: Rect, quote: &Quote) {
    let color = theme::symbol_color(&quote.symbol);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", quote.symbol))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            format::price(quote.price),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} ({})",
                format::change(quote.change),
                format::percent(quote.change_percent)
            ),
            theme::pnl(quote.change),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_charts(f: &mut Frame, area: Rect, quotes: &[Quote]) {
    let columns = split_columns(area, quotes.len());
    for (quote, column) in quotes.iter().zip(columns.iter()) {
        render_chart(f, *column, quote);
    }
}

fn render_chart(f: &mut Frame, area: Rect, quote: &Quote) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} intraday ", quote.symbol));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if quote.history.len() < 2 {
        // Degraded data renders a placeholder instead of panicking the frame.
        f.render_widget(
            Paragraph::new(Span::styled("not enough samples", theme::muted())),
            inner,
        );
        return;
    }

    let min_y = quote.history.iter().copied().fold(f64::INFINITY, f64::min);
    let max_y = quote
        .history
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let padding = (max_y - min_y).abs().max(1.0) * 0.05;
    let y_min = min_y - padding;
    let y_max = max_y + padding;
    let x_max = (quote.history.len() - 1) as f64;

    let data: Vec<(f64, f64)> = quote
        .history
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::symbol_color(&quote.symbol)))
        .graph_type(GraphType::Line)
        .data(&data);

    // Labels may be shorter than the history; clamp rather than index past
    // the end.
    let first_label = quote.labels.first().cloned().unwrap_or_default();
    let last_label = quote
        .labels
        .get(quote.history.len() - 1)
        .or(quote.labels.last())
        .cloned()
        .unwrap_or_default();

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled(first_label, theme::muted()),
                    Span::styled(last_label, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.0}"), theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, inner);
}

fn split_columns(area: Rect, count: usize) -> std::rc::Rc<[Rect]> {
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count.max(1) as u32))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
}
