use std::fmt;

use rand::Rng;

/// Initial weights are drawn uniformly from `[-WEIGHT_BOUND, WEIGHT_BOUND]`.
pub const WEIGHT_BOUND: f64 = 2.0;

/// A single unit: one weight per input plus a bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Node {
    /// Allocates `num_inputs` weights and randomizes them from `rng`.
    pub fn new<R: Rng + ?Sized>(num_inputs: usize, rng: &mut R) -> Node {
        let mut node = Node { weights: vec![0.0; num_inputs], bias: 0.0 };
        node.randomize(rng);
        node
    }

    /// Builds a node from explicit parameters.
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Node {
        Node { weights, bias }
    }

    /// Redraws every weight in order and resets the bias to zero.
    /// Consumes exactly `weights.len()` draws from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for weight in &mut self.weights {
            *weight = rng.gen_range(-WEIGHT_BOUND..=WEIGHT_BOUND);
        }
        self.bias = 0.0;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Node {{")?;
        writeln!(f, "   weights:")?;
        for weight in &self.weights {
            writeln!(f, "    {weight:.6}")?;
        }
        writeln!(f, "   bias: {:.6}", self.bias)?;
        writeln!(f, "  }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn randomize_stays_in_bounds_and_zeroes_bias() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut node = Node::from_parts(vec![0.0; 64], 3.5);
        node.randomize(&mut rng);
        assert_eq!(node.bias, 0.0);
        assert!(node.weights.iter().all(|w| (-WEIGHT_BOUND..=WEIGHT_BOUND).contains(w)));
    }

    #[test]
    fn randomize_consumes_one_draw_per_weight() {
        let mut a = ChaCha8Rng::seed_from_u64(11);
        let mut b = ChaCha8Rng::seed_from_u64(11);

        let _ = Node::new(3, &mut a);
        for _ in 0..3 {
            let _: f64 = b.gen_range(-WEIGHT_BOUND..=WEIGHT_BOUND);
        }
        let next_a: f64 = a.gen_range(-WEIGHT_BOUND..=WEIGHT_BOUND);
        let next_b: f64 = b.gen_range(-WEIGHT_BOUND..=WEIGHT_BOUND);
        assert_eq!(next_a, next_b);
    }

    #[test]
    fn zero_input_node_draws_nothing() {
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let node = Node::new(0, &mut a);
        assert!(node.weights.is_empty());
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
