//! Application configuration, stored as JSON.
//!
//! Everything the console needs to start a session lives here: where the
//! dataset is, how to read it, the names of its features and classes, the
//! default topology, the seed and default training hyperparameters. None of
//! it describes trained parameters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::network::metadata::ModelMetadata;
use crate::network::spec::NetworkSpec;

/// Default values offered by the console's `train` prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparams {
    pub max_iterations: usize,
    pub learn_rate: f64,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Hyperparams { max_iterations: 100, learn_rate: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// CSV file holding the dataset.
    pub dataset: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    pub metadata: ModelMetadata,
    pub network: NetworkSpec,
    /// Seeds both the session random stream and the train/test split.
    pub seed: u64,
    /// Share of the dataset used for training; the rest is the test set.
    #[serde(default = "default_train_fraction")]
    pub train_fraction: f64,
    #[serde(default)]
    pub hyperparams: Hyperparams,
}

fn default_delimiter() -> char {
    ','
}

fn default_train_fraction() -> f64 {
    0.6
}

impl Default for AppConfig {
    fn default() -> Self {
        let metadata = ModelMetadata::default();
        let network = NetworkSpec {
            layer_sizes: vec![metadata.feature_count(), 5, metadata.class_count()],
        };
        AppConfig {
            dataset: PathBuf::from("datasets/iris.csv"),
            delimiter: default_delimiter(),
            metadata,
            network,
            seed: 87123401,
            train_fraction: default_train_fraction(),
            hyperparams: Hyperparams::default(),
        }
    }
}

impl AppConfig {
    /// Checks the topology against the feature and class lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.network.validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.network.input_size() != self.metadata.feature_count() {
            return Err(ConfigError::Invalid(format!(
                "input layer has {} nodes but there are {} features",
                self.network.input_size(), self.metadata.feature_count()
            )));
        }
        if self.network.output_size() != self.metadata.class_count() {
            return Err(ConfigError::Invalid(format!(
                "output layer has {} nodes but there are {} classes",
                self.network.output_size(), self.metadata.class_count()
            )));
        }
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "train_fraction {} must lie strictly between 0 and 1",
                self.train_fraction
            )));
        }
        if !self.delimiter.is_ascii() {
            return Err(ConfigError::Invalid(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config written by `save_json`.
    pub fn load_json(path: &Path) -> Result<AppConfig, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: AppConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_iris() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.network.layer_sizes, vec![4, 5, 3]);
        assert_eq!(config.seed, 87123401);
        assert_eq!(config.hyperparams.max_iterations, 100);
        assert_eq!(config.delimiter_byte(), b',');
    }

    #[test]
    fn topology_must_match_metadata() {
        let mut config = AppConfig::default();
        config.network.layer_sizes = vec![3, 5, 3];
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.network.layer_sizes = vec![4, 5, 2];
        assert!(config.validate().is_err());

        config.network.layer_sizes = vec![4];
        assert!(config.validate().is_err());
    }

    #[test]
    fn train_fraction_must_be_a_proper_share() {
        let mut config = AppConfig::default();
        config.train_fraction = 1.0;
        assert!(config.validate().is_err());
        config.train_fraction = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn optional_fields_take_defaults() {
        let json = r#"{
            "dataset": "data.csv",
            "metadata": { "feature_names": ["x", "y"], "class_names": ["a", "b"] },
            "network": { "layer_sizes": [2, 3, 2] },
            "seed": 1
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.train_fraction, 0.6);
        assert_eq!(config.hyperparams, Hyperparams::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("nudgenet-config-{}.json", std::process::id()));
        let config = AppConfig::default();
        config.save_json(&path).unwrap();
        let loaded = AppConfig::load_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
