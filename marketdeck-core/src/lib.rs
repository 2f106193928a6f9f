//! marketdeck-core — domain layer for the terminal market dashboard.
//!
//! Pure and deterministic: seed literals, the two quote-mutation pathways
//! (periodic tick, manual refresh), and display formatting. All randomness
//! comes in through a caller-supplied [`rand::Rng`] so tests can drive the
//! engine with seeded generators. No I/O and no terminal types live here.

pub mod format;
pub mod quote;
pub mod ticker;
pub mod update;

pub use quote::{Quote, HISTORY_LEN};
pub use ticker::{Signal, TickerRow};
