pub mod evaluate;
pub mod iteration_stats;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use iteration_stats::{IterationStats, StopReason, TrainReport};
pub use train_config::{TrainConfig, CONVERGED_LOSS};
pub use trainer::NUDGE;
