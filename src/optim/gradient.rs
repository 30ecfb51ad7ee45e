use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Per-parameter update amounts shaped like a network:
/// `weights[layer][node][weight]` and `biases[layer][node]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub weights: Vec<Vec<Vec<f64>>>,
    pub biases: Vec<Vec<f64>>,
}

impl Gradient {
    /// All-zero gradient with the same shape as `network`.
    pub fn zeros_like(network: &Network) -> Gradient {
        let weights = network.layers.iter()
            .map(|layer| layer.nodes.iter().map(|n| vec![0.0; n.weights.len()]).collect())
            .collect();
        let biases = network.layers.iter()
            .map(|layer| vec![0.0; layer.nodes.len()])
            .collect();
        Gradient { weights, biases }
    }

    /// Verifies every dimension against `network`.
    pub fn check_shape(&self, network: &Network) -> Result<()> {
        let mismatch = |at: String| Err(NetworkError::GradientShape { at });

        if self.weights.len() != network.layers.len() || self.biases.len() != network.layers.len() {
            return mismatch("layer count".into());
        }
        for (l, layer) in network.layers.iter().enumerate() {
            if self.weights[l].len() != layer.nodes.len() || self.biases[l].len() != layer.nodes.len() {
                return mismatch(format!("layer {l}"));
            }
            for (n, node) in layer.nodes.iter().enumerate() {
                if self.weights[l][n].len() != node.weights.len() {
                    return mismatch(format!("layer {l} node {n}"));
                }
            }
        }
        Ok(())
    }

    /// Largest absolute component, used for step diagnostics.
    pub fn max_abs(&self) -> f64 {
        self.weights.iter().flatten().flatten()
            .chain(self.biases.iter().flatten())
            .fold(0.0_f64, |acc, g| acc.max(g.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zeros_like_mirrors_network_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let net = Network::new(&[3, 4, 2], &mut rng).unwrap();
        let grad = Gradient::zeros_like(&net);

        assert_eq!(grad.weights.len(), 3);
        assert_eq!(grad.weights[0], vec![Vec::<f64>::new(); 3]);
        assert_eq!(grad.weights[1].len(), 4);
        assert!(grad.weights[1].iter().all(|w| w.len() == 3));
        assert_eq!(grad.biases[2], vec![0.0, 0.0]);
        assert!(grad.check_shape(&net).is_ok());
        assert_eq!(grad.max_abs(), 0.0);
    }

    #[test]
    fn check_shape_reports_location() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let net = Network::new(&[2, 2], &mut rng).unwrap();
        let mut grad = Gradient::zeros_like(&net);
        grad.weights[1][1].push(0.0);
        assert_eq!(
            grad.check_shape(&net),
            Err(NetworkError::GradientShape { at: "layer 1 node 1".into() })
        );
    }
}
