use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use crate::train::iteration_stats::IterationStats;

/// Training stops once the sampled training loss drops below this.
pub const CONVERGED_LOSS: f64 = 0.1;

/// Configuration for a `Network::train` run.
///
/// # Fields
/// - `max_iterations` — upper bound on learn/evaluate cycles
/// - `learn_rate`     — scale applied to every finite-difference estimate
/// - `progress_tx`    — optional channel sender; one `IterationStats` is sent
///                      per completed iteration. If the receiver is dropped
///                      the loop terminates early.
/// - `stop_flag`      — optional atomic flag; when set to `true` the loop
///                      terminates before the next iteration starts.
pub struct TrainConfig {
    pub max_iterations: usize,
    pub learn_rate: f64,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel and no stop flag.
    pub fn new(max_iterations: usize, learn_rate: f64) -> Self {
        TrainConfig {
            max_iterations,
            learn_rate,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<IterationStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }
}
