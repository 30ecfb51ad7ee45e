//! CSV ingestion for labeled tabular data.
//!
//! Rows carry no header: every column but the last is a numeric feature and
//! the last column is a class name from `ModelMetadata::class_names`.
//! Whitespace anywhere inside a field is ignored. A single bad row fails the
//! whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::data::instance::DataInstance;
use crate::error::DatasetError;
use crate::network::metadata::ModelMetadata;

/// Reads the dataset at `path`.
pub fn load_dataset(
    path: &Path,
    delimiter: u8,
    metadata: &ModelMetadata,
) -> Result<Vec<DataInstance>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_dataset(file, delimiter, metadata)?;
    debug!(path = %path.display(), rows = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Reads a dataset from any reader.
pub fn read_dataset<R: Read>(
    reader: R,
    delimiter: u8,
    metadata: &ModelMetadata,
) -> Result<Vec<DataInstance>, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let expected = metadata.feature_count();
    let mut dataset = Vec::new();

    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let row = idx + 1;

        let cells: Vec<String> = record.iter().map(remove_whitespace).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }

        let (name, feature_cells) = match cells.split_last() {
            Some(split) => split,
            None => continue,
        };
        if feature_cells.len() != expected {
            return Err(DatasetError::FeatureCount { row, expected, got: feature_cells.len() });
        }

        let features = feature_cells.iter()
            .map(|c| c.parse::<f64>().map_err(|_| DatasetError::Parse { row, value: c.clone() }))
            .collect::<Result<Vec<f64>, DatasetError>>()?;
        let label = metadata.class_index(name)
            .ok_or_else(|| DatasetError::UnknownClass { row, name: name.clone() })?;

        dataset.push(DataInstance::new(features, label));
    }

    if dataset.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(dataset)
}

fn remove_whitespace(field: &str) -> String {
    field.chars().filter(|c| !c.is_whitespace()).collect()
}
