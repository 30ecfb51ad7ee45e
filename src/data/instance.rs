/// One labeled example: a feature vector and a class index.
#[derive(Debug, Clone, PartialEq)]
pub struct DataInstance {
    pub features: Vec<f64>,
    pub label: usize,
}

impl DataInstance {
    pub fn new(features: Vec<f64>, label: usize) -> Self {
        DataInstance { features, label }
    }
}

/// Number of instances per class label, for labels `0..class_count`.
/// Labels at or beyond `class_count` are not counted.
pub fn class_counts(dataset: &[DataInstance], class_count: usize) -> Vec<usize> {
    let mut counts = vec![0; class_count];
    for instance in dataset {
        if let Some(c) = counts.get_mut(instance.label) {
            *c += 1;
        }
    }
    counts
}
