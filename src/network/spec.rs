use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Layer-size list describing a network's topology, input layer first.
///
/// The first entry is the feature count, the last the class count, and every
/// entry in between is a hidden-layer width. A spec can be stored in the JSON
/// configuration independently of any trained parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layer_sizes: Vec<usize>,
}

impl NetworkSpec {
    /// Validates `layer_sizes` and wraps it.
    pub fn new(layer_sizes: Vec<usize>) -> Result<NetworkSpec> {
        validate_sizes(&layer_sizes)?;
        Ok(NetworkSpec { layer_sizes })
    }

    /// Parses a whitespace-separated list such as `"4 5 3"`.
    pub fn parse(text: &str) -> Result<NetworkSpec> {
        let sizes = text.split_whitespace()
            .map(|token| token.parse::<usize>().map_err(|_| NetworkError::InvalidTopology {
                sizes: Vec::new(),
                reason: format!("'{token}' is not a non-negative integer"),
            }))
            .collect::<Result<Vec<usize>>>()?;
        NetworkSpec::new(sizes)
    }

    pub fn validate(&self) -> Result<()> {
        validate_sizes(&self.layer_sizes)
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes.first().copied().unwrap_or(0)
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or(0)
    }
}

/// At least two layers, none of them empty.
pub fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(NetworkError::InvalidTopology {
            sizes: sizes.to_vec(),
            reason: "need at least an input and an output layer".into(),
        });
    }
    if let Some(pos) = sizes.iter().position(|&s| s == 0) {
        return Err(NetworkError::InvalidTopology {
            sizes: sizes.to_vec(),
            reason: format!("layer {pos} has no nodes"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_space_separated_sizes() {
        let spec = NetworkSpec::parse("4 5  3").unwrap();
        assert_eq!(spec.layer_sizes, vec![4, 5, 3]);
        assert_eq!(spec.input_size(), 4);
        assert_eq!(spec.output_size(), 3);
    }

    #[test]
    fn parse_rejects_garbage_and_short_lists() {
        assert!(NetworkSpec::parse("4 x 3").is_err());
        assert!(NetworkSpec::parse("4 -1 3").is_err());
        assert!(NetworkSpec::parse("4").is_err());
        assert!(NetworkSpec::parse("").is_err());
    }

    #[test]
    fn zero_width_layer_is_rejected() {
        let err = NetworkSpec::new(vec![2, 0, 1]).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidTopology { .. }));
    }

    #[test]
    fn spec_round_trips_through_json() {
        let spec = NetworkSpec::new(vec![2, 3, 2]).unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        let back: NetworkSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
