use serde::{Deserialize, Serialize};

/// Names attached to a network's inputs and outputs.
///
/// `feature_names` fixes the input dimension and `class_names` fixes the
/// output dimension; a label is an index into `class_names`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    #[serde(default)]
    pub description: Option<String>,
    pub feature_names: Vec<String>,
    pub class_names: Vec<String>,
}

impl ModelMetadata {
    pub fn new(feature_names: Vec<String>, class_names: Vec<String>) -> Self {
        ModelMetadata { description: None, feature_names, class_names }
    }

    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }

    pub fn class_count(&self) -> usize {
        self.class_names.len()
    }

    /// Label for a class name, exact match.
    pub fn class_index(&self, name: &str) -> Option<usize> {
        self.class_names.iter().position(|c| c == name)
    }

    pub fn class_name(&self, label: usize) -> Option<&str> {
        self.class_names.get(label).map(String::as_str)
    }
}

impl Default for ModelMetadata {
    /// The Iris flower dataset.
    fn default() -> Self {
        ModelMetadata {
            description: Some("Iris flower classification".into()),
            feature_names: ["Sepal-length", "Sepal-width", "Petal-length", "Petal-width"]
                .iter().map(|s| s.to_string()).collect(),
            class_names: ["Iris-setosa", "Iris-versicolor", "Iris-virginica"]
                .iter().map(|s| s.to_string()).collect(),
        }
    }
}
