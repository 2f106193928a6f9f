//! Color tokens and style helpers for the dashboard.
//!
//! Dark terminal palette: neon green for gains, red for losses, amber for
//! hold signals, steel blue for secondary text. Index symbols carry their own
//! fixed display colors.

use ratatui::style::{Color, Modifier, Style};

use marketdeck_core::ticker::Signal;

/// Electric cyan (focus, highlights).
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon green (gains, buy signals).
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Red (losses, sell signals).
pub const NEGATIVE: Color = Color::Rgb(255, 85, 85);
/// Amber (warnings, hold signals).
pub const WARNING: Color = Color::Rgb(255, 200, 60);
/// Steel blue (secondary text, hints).
pub const MUTED: Color = Color::Rgb(100, 149, 237);
/// Light gray (fallbacks, unclassified values).
pub const GRAY: Color = Color::Rgb(170, 170, 170);
/// Alternate table-row background for striping.
pub const STRIPE: Color = Color::Rgb(30, 30, 36);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Sign-convention color: non-negative values (including zero) render
/// positive, negatives render negative.
pub fn pnl(value: f64) -> Style {
    if value >= 0.0 {
        positive()
    } else {
        negative()
    }
}

/// Signal badge color: buy → green, sell → red, hold → amber.
pub fn signal(sig: Signal) -> Style {
    match sig {
        Signal::Buy => positive(),
        Signal::Sell => negative(),
        Signal::Hold => warning(),
    }
}

/// Badge color for a raw signal label, gray for anything outside the
/// enumeration.
pub fn signal_for_label(label: &str) -> Style {
    match label.parse::<Signal>() {
        Ok(sig) => signal(sig),
        Err(_) => Style::default().fg(GRAY),
    }
}

/// Fixed per-symbol display color, accent for unknown symbols.
pub fn symbol_color(symbol: &str) -> Color {
    match symbol {
        "DOW" => Color::Rgb(37, 99, 235),     // blue
        "NASDAQ" => Color::Rgb(220, 38, 38),  // red
        "S&P 500" => Color::Rgb(5, 150, 105), // green
        _ => ACCENT,
    }
}

/// Row background alternating by zero-based index parity.
pub fn stripe(index: usize) -> Style {
    if index % 2 == 0 {
        Style::default()
    } else {
        Style::default().bg(STRIPE)
    }
}
