use std::fmt;

use rand::Rng;

use crate::error::{NetworkError, Result};
use crate::layers::dense::Layer;
use crate::math::vector::argmax;
use crate::network::spec::validate_sizes;
use crate::optim::gradient::Gradient;

/// A stack of fully connected sigmoid layers.
///
/// `layers[0]` is the input layer: one placeholder node per feature, with no
/// weights, never evaluated. Every later layer reads the previous layer's
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a randomized network from a layer-size list (input first).
    /// The list is validated before anything is allocated.
    pub fn new<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Network> {
        validate_sizes(layer_sizes)?;

        let mut layers = Vec::with_capacity(layer_sizes.len());
        layers.push(Layer::new(layer_sizes[0], 0, rng));
        for pair in layer_sizes.windows(2) {
            layers.push(Layer::new(pair[1], pair[0], rng));
        }
        Ok(Network { layers })
    }

    /// Assembles a network from hand-built layers, checking that each
    /// layer's input count matches the previous layer's width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        let sizes: Vec<usize> = layers.iter().map(Layer::size).collect();
        validate_sizes(&sizes)?;

        if layers[0].num_inputs() != 0 {
            return Err(NetworkError::InvalidTopology {
                sizes,
                reason: "input layer must not take inputs".into(),
            });
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[1].num_inputs() != pair[0].size() {
                return Err(NetworkError::InvalidTopology {
                    sizes,
                    reason: format!(
                        "layer {} expects {} inputs but layer {} has {} nodes",
                        i + 1, pair[1].num_inputs(), i, pair[0].size()
                    ),
                });
            }
        }
        Ok(Network { layers })
    }

    /// Forward pass. The raw input feeds layer 1 directly.
    pub fn calculate(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(NetworkError::InputSize { expected: self.input_size(), got: input.len() });
        }
        let mut current = input.to_vec();
        for layer in &self.layers[1..] {
            current = layer.calculate(&current)?;
        }
        Ok(current)
    }

    /// Index of the strongest output (first one on ties).
    pub fn predict(&self, input: &[f64]) -> Result<usize> {
        Ok(argmax(&self.calculate(input)?))
    }

    /// Redraws every parameter, layer by layer.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for layer in &mut self.layers {
            layer.randomize(rng);
        }
    }

    /// Subtracts `gradient` from every weight and bias in place.
    /// The gradient is expected to be scaled by the learning rate already.
    pub fn apply_gradient(&mut self, gradient: &Gradient) -> Result<()> {
        gradient.check_shape(self)?;
        for (layer, (layer_w, layer_b)) in self.layers.iter_mut()
            .zip(gradient.weights.iter().zip(gradient.biases.iter()))
        {
            for (node, (node_w, node_b)) in layer.nodes.iter_mut()
                .zip(layer_w.iter().zip(layer_b.iter()))
            {
                for (weight, g) in node.weights.iter_mut().zip(node_w.iter()) {
                    *weight -= g;
                }
                node.bias -= node_b;
            }
        }
        Ok(())
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::size).collect()
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].size()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    /// Number of scalar parameters, placeholder biases included.
    pub fn parameter_count(&self) -> usize {
        self.layers.iter()
            .flat_map(|l| l.nodes.iter())
            .map(|n| n.weights.len() + 1)
            .sum()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NeuralNetwork {{")?;
        for layer in &self.layers {
            write!(f, "{layer}")?;
        }
        writeln!(f, "}}")
    }
}
