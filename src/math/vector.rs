/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Index of the maximum element in a slice; the first one wins on ties.
/// Returns 0 for an empty slice.
pub fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, x) in v.iter().enumerate().skip(1) {
        if *x > v[best] {
            best = i;
        }
    }
    best
}

/// Vector of length `len` with `1.0` at `index` and `0.0` elsewhere.
pub fn one_hot(index: usize, len: usize) -> Vec<f64> {
    let mut v = vec![0.0; len];
    if index < len {
        v[index] = 1.0;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_known_vectors() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 0.5]), 4.0 - 10.0 + 1.5);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn argmax_prefers_first_maximum() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), 1);
        assert_eq!(argmax(&[0.5, 0.5, 0.5]), 0);
        assert_eq!(argmax(&[0.2, 0.7, 0.7]), 1);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn one_hot_marks_label() {
        assert_eq!(one_hot(2, 3), vec![0.0, 0.0, 1.0]);
        assert_eq!(one_hot(0, 1), vec![1.0]);
    }
}
