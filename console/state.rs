use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use nudgenet::data::{load_dataset, train_test_split};
use nudgenet::{AppConfig, DataInstance, Network};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Everything the console commands operate on.
pub struct Session {
    pub config:    AppConfig,
    /// Full dataset as last imported (and possibly resampled).
    pub dataset:   Vec<DataInstance>,
    pub train_set: Vec<DataInstance>,
    pub test_set:  Vec<DataInstance>,
    pub network:   Network,
    /// Single random stream for initialization, loss sampling and resampling.
    pub rng:       ChaCha8Rng,
    /// Cleared by `exit` / `quit`.
    pub running:   bool,
}

impl Session {
    /// Loads the configured dataset, splits it, and builds the default network.
    pub fn new(config: AppConfig) -> Result<Session> {
        let dataset = load_dataset(&config.dataset, config.delimiter_byte(), &config.metadata)
            .with_context(|| format!("cannot import dataset {}", config.dataset.display()))?;
        Session::with_dataset(config, dataset)
    }

    /// Builds a session around an already loaded dataset.
    pub fn with_dataset(config: AppConfig, mut dataset: Vec<DataInstance>) -> Result<Session> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let (train_set, test_set) = train_test_split(&mut dataset, config.train_fraction, config.seed);
        let network = Network::new(&config.network.layer_sizes, &mut rng)?;

        info!(
            instances = dataset.len(),
            train = train_set.len(),
            test = test_set.len(),
            layers = ?network.layer_sizes(),
            "session ready"
        );

        Ok(Session {
            config,
            dataset,
            train_set,
            test_set,
            network,
            rng,
            running: true,
        })
    }

    pub fn split(&mut self) {
        let (train, test) = train_test_split(&mut self.dataset, self.config.train_fraction, self.config.seed);
        self.train_set = train;
        self.test_set = test;
    }

    pub fn reimport(&mut self) -> Result<()> {
        self.dataset = load_dataset(&self.config.dataset, self.config.delimiter_byte(), &self.config.metadata)
            .with_context(|| format!("cannot import dataset {}", self.config.dataset.display()))?;
        Ok(())
    }
}
