//! Ticker rows and their trading-signal classification.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Three-valued trading recommendation attached to a ticker row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub fn label(self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Hold => "Hold",
        }
    }

    /// Directional glyph shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            Signal::Buy => "↗",
            Signal::Sell => "↘",
            Signal::Hold => "→",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown signal label '{0}'")]
pub struct ParseSignalError(pub String);

impl FromStr for Signal {
    type Err = ParseSignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" | "Buy" => Ok(Signal::Buy),
            "sell" | "Sell" => Ok(Signal::Sell),
            "hold" | "Hold" => Ok(Signal::Hold),
            other => Err(ParseSignalError(other.to_string())),
        }
    }
}

/// Glyph for a raw signal label, with a defined fallback for anything outside
/// the enumeration (mirrors the gray "−" default badge).
pub fn glyph_for_label(label: &str) -> &'static str {
    match label.parse::<Signal>() {
        Ok(signal) => signal.glyph(),
        Err(_) => "−",
    }
}

/// A single row of the ticker table. Seeded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerRow {
    pub ticker: String,
    pub last: f64,
    pub change: f64,
    pub change_percent: f64,
    pub signal: Signal,
}

impl TickerRow {
    fn new(ticker: &str, last: f64, change: f64, change_percent: f64, signal: Signal) -> Self {
        Self {
            ticker: ticker.to_string(),
            last,
            change,
            change_percent,
            signal,
        }
    }
}

/// The static ticker table contents.
pub fn seed_rows() -> Vec<TickerRow> {
    use Signal::*;
    vec![
        TickerRow::new("AAPL", 175.43, 2.15, 1.24, Buy),
        TickerRow::new("MSFT", 378.85, -1.23, -0.32, Hold),
        TickerRow::new("GOOGL", 142.56, 3.45, 2.48, Buy),
        TickerRow::new("AMZN", 155.32, -0.87, -0.56, Sell),
        TickerRow::new("TSLA", 248.50, 12.30, 5.21, Buy),
        TickerRow::new("META", 485.58, 8.92, 1.87, Buy),
        TickerRow::new("NVDA", 875.28, -15.45, -1.73, Hold),
        TickerRow::new("NFLX", 612.04, 4.67, 0.77, Hold),
        TickerRow::new("AMD", 156.78, 2.34, 1.52, Buy),
        TickerRow::new("INTC", 44.23, -0.56, -1.25, Sell),
    ]
}
