pub mod csv;
pub mod instance;
pub mod split;

pub use self::csv::{load_dataset, read_dataset};
pub use instance::{class_counts, DataInstance};
pub use split::{resample, train_test_split};
