use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::data::instance::{class_counts, DataInstance};

/// Shuffles `dataset` in place with a stream seeded from `seed`, then
/// splits it at `floor(train_fraction * len)` into (train, test).
///
/// The permutation depends only on `seed` and the current order, so the
/// split does not disturb the session's main random stream.
pub fn train_test_split(
    dataset: &mut [DataInstance],
    train_fraction: f64,
    seed: u64,
) -> (Vec<DataInstance>, Vec<DataInstance>) {
    dataset.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

    let split = ((train_fraction * dataset.len() as f64) as usize).min(dataset.len());
    let (train, test) = dataset.split_at(split);
    debug!(train = train.len(), test = test.len(), "dataset split");
    (train.to_vec(), test.to_vec())
}

/// Balances class counts towards `floor(len * ratio / class_count)` each.
///
/// Minority classes are topped up by appending random duplicates of their
/// own instances; majority classes lose their earliest instances. A class
/// with no instances stays empty.
pub fn resample<R: Rng + ?Sized>(
    dataset: &mut Vec<DataInstance>,
    ratio: f64,
    class_count: usize,
    rng: &mut R,
) {
    if class_count == 0 {
        return;
    }
    let target = (dataset.len() as f64 * ratio / class_count as f64) as usize;
    let counts = class_counts(dataset, class_count);

    for (label, &count) in counts.iter().enumerate() {
        if count < target {
            let pool: Vec<DataInstance> = dataset.iter()
                .filter(|d| d.label == label)
                .cloned()
                .collect();
            if pool.is_empty() {
                continue;
            }
            for _ in count..target {
                dataset.push(pool[rng.gen_range(0..pool.len())].clone());
            }
        } else if count > target {
            let mut excess = count - target;
            dataset.retain(|d| {
                if excess > 0 && d.label == label {
                    excess -= 1;
                    false
                } else {
                    true
                }
            });
        }
    }
    debug!(per_class = target, counts = ?class_counts(dataset, class_count), "dataset resampled");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(labels: &[usize]) -> Vec<DataInstance> {
        labels.iter().enumerate()
            .map(|(i, &l)| DataInstance::new(vec![i as f64], l))
            .collect()
    }

    #[test]
    fn split_sizes_follow_fraction() {
        let mut data = labelled(&[0; 10]);
        let (train, test) = train_test_split(&mut data, 0.6, 87123401);
        assert_eq!(train.len(), 6);
        assert_eq!(test.len(), 4);
    }

    #[test]
    fn split_is_a_partition() {
        let mut data = labelled(&[0, 1, 0, 1, 0, 1, 0]);
        let (train, test) = train_test_split(&mut data, 0.5, 3);
        let mut ids: Vec<f64> = train.iter().chain(test.iter()).map(|d| d.features[0]).collect();
        ids.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(ids, (0..7).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn split_depends_only_on_seed_and_order() {
        let mut a = labelled(&[0, 1, 2, 0, 1, 2, 0, 1]);
        let mut b = a.clone();
        assert_eq!(train_test_split(&mut a, 0.6, 42), train_test_split(&mut b, 0.6, 42));
    }

    #[test]
    fn resample_balances_classes() {
        let mut data = labelled(&[0, 0, 0, 0, 0, 0, 1, 1]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        resample(&mut data, 1.0, 2, &mut rng);
        assert_eq!(class_counts(&data, 2), vec![4, 4]);
        assert!(data.iter().filter(|d| d.label == 1).all(|d| d.features[0] >= 6.0));
    }

    #[test]
    fn undersampling_drops_earliest() {
        let mut data = labelled(&[0, 0, 0, 1]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        resample(&mut data, 0.5, 2, &mut rng);
        assert_eq!(class_counts(&data, 2), vec![1, 1]);
        assert_eq!(data[0].features[0], 2.0);
    }

    #[test]
    fn empty_class_stays_empty() {
        let mut data = labelled(&[0, 0, 0, 0]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        resample(&mut data, 1.0, 2, &mut rng);
        assert_eq!(class_counts(&data, 2), vec![2, 0]);
    }
}
