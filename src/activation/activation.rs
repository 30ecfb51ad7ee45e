use std::f64::consts::E;

/// Logistic function `1 / (1 + e^-x)`, squashing any real into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_at_zero_is_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_symmetric_and_bounded() {
        for x in [-6.0, -1.5, -0.1, 0.3, 2.0, 9.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
            assert!((y + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }
}
