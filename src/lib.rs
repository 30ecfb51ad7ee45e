pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::activation::sigmoid;
pub use config::{AppConfig, Hyperparams};
pub use data::instance::DataInstance;
pub use error::{ConfigError, DatasetError, NetworkError};
pub use layers::{Layer, Node};
pub use network::{ModelMetadata, Network, NetworkSpec};
pub use optim::gradient::Gradient;
pub use train::{IterationStats, StopReason, TrainConfig, TrainReport};
