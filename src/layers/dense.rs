use std::fmt;

use rand::Rng;

use crate::activation::activation::sigmoid;
use crate::error::{NetworkError, Result};
use crate::layers::node::Node;
use crate::math::vector::dot;

/// An ordered group of nodes that all read the same `num_inputs` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    num_inputs: usize,
    pub nodes: Vec<Node>,
}

impl Layer {
    /// Builds `size` randomized nodes, each with `num_inputs` weights.
    pub fn new<R: Rng + ?Sized>(size: usize, num_inputs: usize, rng: &mut R) -> Layer {
        let nodes = (0..size).map(|_| Node::new(num_inputs, rng)).collect();
        Layer { num_inputs, nodes }
    }

    /// Builds a layer from explicit nodes. Every node must carry
    /// `num_inputs` weights.
    pub fn from_nodes(num_inputs: usize, nodes: Vec<Node>) -> Result<Layer> {
        if let Some(node) = nodes.iter().find(|n| n.weights.len() != num_inputs) {
            return Err(NetworkError::InputSize { expected: num_inputs, got: node.weights.len() });
        }
        Ok(Layer { num_inputs, nodes })
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// `sigmoid(bias + w·x)` for every node, in node order.
    pub fn calculate(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.num_inputs {
            return Err(NetworkError::InputSize { expected: self.num_inputs, got: input.len() });
        }
        Ok(self.nodes.iter()
            .map(|node| sigmoid(node.bias + dot(&node.weights, input)))
            .collect())
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for node in &mut self.nodes {
            node.randomize(rng);
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Layer {{")?;
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        writeln!(f, " }}")
    }
}
