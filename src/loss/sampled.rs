use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::instance::DataInstance;
use crate::error::{NetworkError, Result};
use crate::loss::squared_error::SquaredErrorLoss;
use crate::math::vector::one_hot;
use crate::network::network::Network;

/// Share of a dataset drawn for one loss estimate.
pub const SAMPLE_FRACTION: f64 = 0.3;
/// Upper bound on the loss sample, whatever the dataset size.
pub const SAMPLE_CAP: usize = 20;

/// `min(floor(SAMPLE_FRACTION * len), SAMPLE_CAP)`.
pub fn sample_size(len: usize) -> usize {
    ((len as f64 * SAMPLE_FRACTION) as usize).min(SAMPLE_CAP)
}

impl Network {
    /// Squared error between the network output and the one-hot target
    /// for `instance.label`.
    pub fn instance_loss(&self, instance: &DataInstance) -> Result<f64> {
        let output = self.calculate(&instance.features)?;
        if instance.label >= output.len() {
            return Err(NetworkError::LabelOutOfRange { label: instance.label, outputs: output.len() });
        }
        let target = one_hot(instance.label, output.len());
        Ok(SquaredErrorLoss::loss(&output, &target))
    }

    /// Mean instance loss over a random subset of `dataset`.
    ///
    /// The order is shuffled with a copy of `rng`, so the caller's stream is
    /// not advanced and every call draws the same subset until the stream
    /// moves on elsewhere (e.g. `randomize`).
    pub fn sampled_loss<R: Rng + Clone>(&self, dataset: &[DataInstance], rng: &R) -> Result<f64> {
        let n = sample_size(dataset.len());
        if n == 0 {
            return Err(NetworkError::EmptySample { len: dataset.len() });
        }

        let mut order: Vec<&DataInstance> = dataset.iter().collect();
        order.shuffle(&mut rng.clone());

        let mut total = 0.0;
        for instance in &order[..n] {
            total += self.instance_loss(instance)?;
        }
        Ok(total / n as f64)
    }
}
