/// Statistics for one completed training iteration.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `IterationStats` at the end of every iteration. The console
/// uses this to print a progress line as training runs.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    pub max_iterations: usize,
    /// Sampled loss on the training set after this iteration's update.
    pub train_loss: f64,
    /// Accuracy on the test set as a fraction in [0, 1].
    pub test_accuracy: f64,
    /// Wall-clock duration of this iteration in milliseconds.
    pub elapsed_ms: u64,
}

/// Why a `train` run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Training loss fell below the convergence threshold.
    LossConverged,
    /// Every test instance was classified correctly.
    PerfectAccuracy,
    MaxIterations,
    /// The stop flag was raised or the progress receiver went away.
    Interrupted,
}

/// Outcome of a `train` run: one entry per completed iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub history: Vec<IterationStats>,
    pub stop_reason: StopReason,
}

impl TrainReport {
    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    pub fn last(&self) -> Option<&IterationStats> {
        self.history.last()
    }
}
