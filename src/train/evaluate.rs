use crate::data::instance::DataInstance;
use crate::error::{NetworkError, Result};
use crate::network::network::Network;

impl Network {
    /// Fraction of `testset` whose predicted class (first maximum output)
    /// equals the label.
    pub fn test(&self, testset: &[DataInstance]) -> Result<f64> {
        if testset.is_empty() {
            return Err(NetworkError::EmptyTestSet);
        }
        let mut correct = 0usize;
        for instance in testset {
            if self.predict(&instance.features)? == instance.label {
                correct += 1;
            }
        }
        Ok(correct as f64 / testset.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{Layer, Node};

    /// 1 → 2 network: output 0 fires for negative input, output 1 for positive.
    fn sign_network() -> Network {
        Network::from_layers(vec![
            Layer::from_nodes(0, vec![Node::from_parts(vec![], 0.0)]).unwrap(),
            Layer::from_nodes(1, vec![
                Node::from_parts(vec![-5.0], 0.0),
                Node::from_parts(vec![5.0], 0.0),
            ]).unwrap(),
        ]).unwrap()
    }

    #[test]
    fn accuracy_counts_argmax_matches() {
        let net = sign_network();
        let testset = vec![
            DataInstance::new(vec![-1.0], 0),
            DataInstance::new(vec![2.0], 1),
            DataInstance::new(vec![3.0], 0),
            DataInstance::new(vec![-0.5], 1),
        ];
        let acc = net.test(&testset).unwrap();
        assert_eq!(acc, 0.5);
        assert_eq!((acc * testset.len() as f64).round() as usize, 2);
    }

    #[test]
    fn ties_go_to_the_first_class() {
        let net = sign_network();
        assert_eq!(net.test(&[DataInstance::new(vec![0.0], 0)]).unwrap(), 1.0);
        assert_eq!(net.test(&[DataInstance::new(vec![0.0], 1)]).unwrap(), 0.0);
    }

    #[test]
    fn empty_testset_is_an_error() {
        assert_eq!(sign_network().test(&[]), Err(NetworkError::EmptyTestSet));
    }
}
