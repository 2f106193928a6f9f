//! The two quote-mutation pathways: periodic tick and manual refresh.
//!
//! Both are pure over `(quotes, rng)`; the timer and the simulated network
//! delay live in the shell. Jitter offsets are uniform in `[-span/2, span/2)`.

use rand::Rng;

use crate::quote::Quote;

/// Per-tick price offset span (offsets in ±5).
pub const TICK_PRICE_SPAN: f64 = 10.0;
/// Per-tick change offset span (offsets in ±1).
pub const TICK_CHANGE_SPAN: f64 = 2.0;
/// Manual-refresh price offset span (offsets in ±10).
pub const REFRESH_PRICE_SPAN: f64 = 20.0;
/// Manual-refresh change offset span (offsets in ±2.5).
pub const REFRESH_CHANGE_SPAN: f64 = 5.0;
/// Manual-refresh history sample span (offsets in ±25).
pub const REFRESH_HISTORY_SPAN: f64 = 50.0;

fn jitter<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * span
}

/// Periodic pathway: small independent offsets, history slides one slot.
///
/// `change_percent` takes its own fresh offset over the pre-update price
/// rather than reusing the pair written to `change`/`price`; this mismatch is
/// part of the simulated feed's observable behaviour and is kept as-is.
pub fn tick<R: Rng + ?Sized>(quotes: &mut [Quote], rng: &mut R) {
    for q in quotes.iter_mut() {
        let prev_price = q.price;
        let prev_change = q.change;

        q.price = prev_price + jitter(rng, TICK_PRICE_SPAN);
        q.change = prev_change + jitter(rng, TICK_CHANGE_SPAN);
        q.change_percent = (prev_change + jitter(rng, TICK_CHANGE_SPAN)) / prev_price * 100.0;

        // Slide the history window: drop the oldest sample, append a fresh
        // perturbation of the pre-update price. Length is preserved, and an
        // empty history stays empty.
        if !q.history.is_empty() {
            q.history.remove(0);
            q.history.push(prev_price + jitter(rng, TICK_PRICE_SPAN));
        }
    }
}

/// Manual pathway: larger offsets, and the entire history is regenerated from
/// independent draws (continuity with prior samples is intentionally lost).
pub fn refresh<R: Rng + ?Sized>(quotes: &mut [Quote], rng: &mut R) {
    for q in quotes.iter_mut() {
        let prev_price = q.price;
        let prev_change = q.change;

        q.price = prev_price + jitter(rng, REFRESH_PRICE_SPAN);
        q.change = prev_change + jitter(rng, REFRESH_CHANGE_SPAN);
        q.change_percent = (prev_change + jitter(rng, REFRESH_CHANGE_SPAN)) / prev_price * 100.0;

        let len = q.history.len();
        q.history = (0..len)
            .map(|_| prev_price + jitter(rng, REFRESH_HISTORY_SPAN))
            .collect();
    }
}
