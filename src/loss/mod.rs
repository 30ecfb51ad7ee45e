pub mod sampled;
pub mod squared_error;

pub use sampled::{sample_size, SAMPLE_CAP, SAMPLE_FRACTION};
pub use squared_error::SquaredErrorLoss;
