//! Background worker thread — simulated-latency refresh runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The worker
//! owns its own seeded RNG so a whole session replays from one `--seed`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use marketdeck_core::quote::Quote;
use marketdeck_core::update;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    /// Redraw the given quote snapshot after the simulated network delay.
    Refresh { quotes: Vec<Quote> },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    RefreshDone { quotes: Vec<Quote> },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    cancel: Arc<AtomicBool>,
    seed: u64,
    delay: Duration,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("marketdeck-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, cancel, seed, delay);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    cancel: Arc<AtomicBool>,
    seed: u64,
    delay: Duration,
) {
    let mut rng = StdRng::seed_from_u64(seed);

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Refresh { mut quotes }) => {
                // Simulated network latency. It cannot fail; the only way a
                // refresh is dropped is the cancel flag below.
                thread::sleep(delay);

                // Teardown guard: if the app is shutting down, the result
                // must not be delivered to a no-longer-displayed view.
                if cancel.load(Ordering::Relaxed) {
                    continue;
                }

                update::refresh(&mut quotes, &mut rng);
                let _ = tx.send(WorkerResponse::RefreshDone { quotes });
            }
        }
    }
}
