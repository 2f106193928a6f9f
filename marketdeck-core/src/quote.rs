//! Index quotes — the dashboard's mutable data set.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Fixed length of the intraday history carried by every quote.
pub const HISTORY_LEN: usize = 10;

/// A named index: latest price, short-term change metrics, and a fixed-length
/// intraday price history with a parallel sequence of time labels.
///
/// Invariant: `history.len() == labels.len() == HISTORY_LEN` for seeded quotes,
/// and every update pathway preserves the history length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub history: Vec<f64>,
    pub labels: Vec<String>,
}

impl Quote {
    pub fn new(
        symbol: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
        history: Vec<f64>,
    ) -> Self {
        let labels = session_labels(history.len());
        Self {
            symbol: symbol.into(),
            price,
            change,
            change_percent,
            history,
            labels,
        }
    }
}

/// Half-hourly session labels starting at the 9:30 open: "9:30", "10:00", ...
/// Rendered in 12-hour clock form without zero padding, so the eighth slot
/// reads "1:00" rather than "13:00".
pub fn session_labels(count: usize) -> Vec<String> {
    let open = NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default();
    (0..count)
        .map(|i| {
            let t = open + Duration::minutes(30 * i as i64);
            t.format("%-I:%M").to_string()
        })
        .collect()
}

/// The three index quotes the dashboard starts from.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "DOW",
            38543.07,
            123.45,
            0.32,
            vec![
                38420.0, 38450.0, 38480.0, 38500.0, 38520.0, 38540.0, 38560.0, 38580.0, 38600.0,
                38543.0,
            ],
        ),
        Quote::new(
            "NASDAQ",
            15605.48,
            -45.67,
            -0.29,
            vec![
                15650.0, 15640.0, 15630.0, 15620.0, 15610.0, 15600.0, 15590.0, 15580.0, 15570.0,
                15605.0,
            ],
        ),
        Quote::new(
            "S&P 500",
            4958.61,
            23.89,
            0.48,
            vec![
                4935.0, 4940.0, 4945.0, 4950.0, 4955.0, 4960.0, 4965.0, 4970.0, 4975.0, 4959.0,
            ],
        ),
    ]
}
