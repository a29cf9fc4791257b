//! The JSON array file exchanged between the generator and the loader.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use catalog_shared::Product;

/// Default dataset file name.
pub const DEFAULT_DATASET_FILE: &str = "sample_data.json";

/// Errors reading or writing a dataset file.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid dataset {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl DatasetError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write products as a pretty-printed JSON array.
pub fn write_dataset(path: &Path, products: &[Product]) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, products).map_err(|e| DatasetError::json(path, e))?;
    writer.flush().map_err(|e| DatasetError::io(path, e))
}

/// Read a JSON array of products.
pub fn read_dataset(path: &Path) -> Result<Vec<Product>, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| DatasetError::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::CatalogGenerator;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("catalog-seed-{}-{}.json", std::process::id(), name))
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("roundtrip");
        let products = CatalogGenerator::new(3, Some(11)).generate(5);

        write_dataset(&path, &products).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded = read_dataset(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(contents.starts_with("[\n  {"));
        assert_eq!(loaded, products);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_dataset(&temp_path("does-not-exist"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_read_invalid_json() {
        let path = temp_path("invalid");
        std::fs::write(&path, r#"{"sku": "not an array"}"#).unwrap();

        let result = read_dataset(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(DatasetError::Json { .. })));
    }
}
