use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the numerical core (`Node`, `Layer`, `Network`).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetworkError {
    /// Layer-size list rejected before anything is allocated.
    #[error("invalid topology {sizes:?}: {reason}")]
    InvalidTopology { sizes: Vec<usize>, reason: String },

    #[error("input has {got} values but the layer expects {expected}")]
    InputSize { expected: usize, got: usize },

    #[error("label {label} is outside the {outputs} network outputs")]
    LabelOutOfRange { label: usize, outputs: usize },

    /// The reduced loss sample would contain no instances (dataset too small).
    #[error("dataset of {len} instances is too small to draw a loss sample")]
    EmptySample { len: usize },

    #[error("cannot measure accuracy on an empty test set")]
    EmptyTestSet,

    #[error("gradient shape does not match the network at {at}")]
    GradientShape { at: String },
}

/// Errors raised while reading a CSV dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("row {row}: '{value}' is not a valid number")]
    Parse { row: usize, value: String },

    #[error("row {row}: unknown class '{name}'")]
    UnknownClass { row: usize, name: String },

    #[error("row {row}: expected {expected} features, got {got}")]
    FeatureCount { row: usize, expected: usize, got: usize },

    #[error("dataset contains no rows")]
    Empty,
}

/// Errors raised while loading or validating an `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
