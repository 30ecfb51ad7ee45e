pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// Summed squared error: sum((predicted - expected)²).
    /// Not averaged over outputs, so the range is `[0, len]` for values in [0, 1].
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_match_is_zero() {
        assert_eq!(SquaredErrorLoss::loss(&[0.0, 1.0, 0.0], &[0.0, 1.0, 0.0]), 0.0);
    }

    #[test]
    fn sums_rather_than_averages() {
        let l = SquaredErrorLoss::loss(&[0.5, 0.5], &[1.0, 0.0]);
        assert!((l - 0.5).abs() < 1e-12);
    }
}
