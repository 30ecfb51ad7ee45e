use rand::Rng;
use tracing::debug;

use crate::data::instance::DataInstance;
use crate::error::Result;
use crate::network::network::Network;
use crate::optim::gradient::Gradient;

/// Step added to a single parameter to estimate its partial derivative.
pub const NUDGE: f64 = 1e-4;

/// Location of one scalar parameter.
#[derive(Debug, Clone, Copy)]
enum Param {
    Weight { layer: usize, node: usize, weight: usize },
    Bias { layer: usize, node: usize },
}

impl Network {
    /// One finite-difference descent step on `dataset`.
    ///
    /// Every weight and bias, in layer/node order with a node's weights
    /// before its bias, is nudged by `NUDGE`, the sampled loss re-measured,
    /// and the parameter restored to its exact prior value. Each estimate
    /// `learn_rate * (perturbed - baseline) / NUDGE` is collected and the
    /// whole gradient applied at the end. Returns the applied gradient.
    ///
    /// Every loss is measured on the same sample, drawn from a copy of `rng`,
    /// so the estimates are true finite differences over that subset. The
    /// placeholder input layer takes part too; its biases never affect the
    /// output, so their estimates are always zero.
    pub fn learn<R: Rng + Clone>(
        &mut self,
        dataset: &[DataInstance],
        learn_rate: f64,
        rng: &R,
    ) -> Result<Gradient> {
        let baseline = self.sampled_loss(dataset, rng)?;
        let mut gradient = Gradient::zeros_like(self);

        for layer in 0..self.layers.len() {
            for node in 0..self.layers[layer].nodes.len() {
                for weight in 0..self.layers[layer].nodes[node].weights.len() {
                    let param = Param::Weight { layer, node, weight };
                    let slope = self.estimate_slope(param, baseline, dataset, rng)?;
                    gradient.weights[layer][node][weight] = learn_rate * slope;
                }
                let slope = self.estimate_slope(Param::Bias { layer, node }, baseline, dataset, rng)?;
                gradient.biases[layer][node] = learn_rate * slope;
            }
        }

        debug!(baseline, max_step = gradient.max_abs(), "applying finite-difference gradient");
        self.apply_gradient(&gradient)?;
        Ok(gradient)
    }

    /// `(loss(p + NUDGE) - baseline) / NUDGE`, leaving `p` untouched.
    fn estimate_slope<R: Rng + Clone>(
        &mut self,
        param: Param,
        baseline: f64,
        dataset: &[DataInstance],
        rng: &R,
    ) -> Result<f64> {
        let original = *self.param_mut(param);
        *self.param_mut(param) = original + NUDGE;
        let perturbed = self.sampled_loss(dataset, rng);
        *self.param_mut(param) = original;
        Ok((perturbed? - baseline) / NUDGE)
    }

    fn param_mut(&mut self, param: Param) -> &mut f64 {
        match param {
            Param::Weight { layer, node, weight } => &mut self.layers[layer].nodes[node].weights[weight],
            Param::Bias { layer, node } => &mut self.layers[layer].nodes[node].bias,
        }
    }
}
