use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::data::instance::DataInstance;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::iteration_stats::{IterationStats, StopReason, TrainReport};
use crate::train::train_config::{TrainConfig, CONVERGED_LOSS};

impl Network {
    /// Repeats `learn` on `trainset` for up to `config.max_iterations`
    /// iterations, measuring sampled training loss and test accuracy after
    /// each one.
    ///
    /// # Early termination
    /// The loop stops after the first iteration whose training loss is below
    /// `CONVERGED_LOSS` or whose test accuracy is exactly `1.0`. It also
    /// stops before starting an iteration if `config.stop_flag` is set, and
    /// after an iteration if the `progress_tx` receiver has been dropped.
    ///
    /// # Errors
    /// Any core error (too few training instances for a loss sample, empty
    /// test set, input or label mismatch) aborts the run.
    pub fn train<R: Rng + Clone>(
        &mut self,
        trainset: &[DataInstance],
        testset: &[DataInstance],
        config: &TrainConfig,
        rng: &R,
    ) -> Result<TrainReport> {
        let mut history = Vec::with_capacity(config.max_iterations);
        let mut stop_reason = StopReason::MaxIterations;

        for iteration in 1..=config.max_iterations {
            if let Some(ref flag) = config.stop_flag {
                if flag.load(Ordering::Relaxed) {
                    warn!(iteration, "training interrupted by stop flag");
                    stop_reason = StopReason::Interrupted;
                    break;
                }
            }

            let t_start = Instant::now();

            self.learn(trainset, config.learn_rate, rng)?;
            let train_loss = self.sampled_loss(trainset, rng)?;
            let test_accuracy = self.test(testset)?;

            let stats = IterationStats {
                iteration,
                max_iterations: config.max_iterations,
                train_loss,
                test_accuracy,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            debug!(iteration, loss = train_loss, accuracy = test_accuracy, "training iteration");
            history.push(stats.clone());

            let converged = if train_loss < CONVERGED_LOSS {
                Some(StopReason::LossConverged)
            } else if test_accuracy == 1.0 {
                Some(StopReason::PerfectAccuracy)
            } else {
                None
            };

            if let Some(ref tx) = config.progress_tx {
                if tx.send(stats).is_err() && converged.is_none() {
                    warn!(iteration, "progress receiver dropped, stopping");
                    stop_reason = StopReason::Interrupted;
                    break;
                }
            }

            if let Some(reason) = converged {
                stop_reason = reason;
                break;
            }
        }

        info!(iterations = history.len(), reason = ?stop_reason, "training finished");
        Ok(TrainReport { history, stop_reason })
    }
}
