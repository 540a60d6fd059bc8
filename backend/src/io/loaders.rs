use std::path::{Path, PathBuf};

use log::info;

use crate::error::{DataLoadError, LoadResult};
use crate::models::LaunchDataset;
use crate::parsing::checksum::calculate_checksum;
use crate::parsing::csv_parser;

/// Result of loading the launch records table
#[derive(Debug, Clone)]
pub struct DatasetLoadResult {
    pub dataset: LaunchDataset,
    /// SHA-256 of the raw source bytes
    pub checksum: String,
    pub source: Option<PathBuf>,
    pub num_records: usize,
}

impl DatasetLoadResult {
    pub fn new(dataset: LaunchDataset, checksum: String, source: Option<PathBuf>) -> Self {
        let num_records = dataset.len();
        Self {
            dataset,
            checksum,
            source,
            num_records,
        }
    }
}

/// Unified interface for loading the launch records table
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load the dataset from a file, dispatching on its extension.
    pub fn load_from_file(path: &Path) -> LoadResult<DatasetLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                DataLoadError::UnsupportedFormat(format!(
                    "{} has no file extension",
                    path.display()
                ))
            })?;

        match extension.to_lowercase().as_str() {
            "csv" => Self::load_from_csv(path),
            other => Err(DataLoadError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Load the dataset from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> LoadResult<DatasetLoadResult> {
        let bytes = csv_parser::read_csv_source(csv_path)?;
        let checksum = calculate_checksum(&bytes);
        let df = csv_parser::parse_launch_csv_bytes(bytes)?;
        let dataset = csv_parser::dataframe_to_dataset(&df)?;

        info!(
            "Loaded {} launch records from {} (sha256={})",
            dataset.len(),
            csv_path.display(),
            checksum
        );

        Ok(DatasetLoadResult::new(
            dataset,
            checksum,
            Some(csv_path.to_path_buf()),
        ))
    }

    /// Load the dataset from CSV text held in memory
    pub fn load_from_csv_str(csv_text: &str) -> LoadResult<DatasetLoadResult> {
        let checksum = calculate_checksum(csv_text.as_bytes());
        let dataset = csv_parser::parse_launch_csv_str(csv_text)?;
        Ok(DatasetLoadResult::new(dataset, checksum, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const CSV: &str = "Launch Site,Payload Mass (kg),class\nSiteA,500,1\nSiteB,2500,1\n";

    fn temp_file_with_suffix(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_from_file_csv() {
        let file = temp_file_with_suffix(".csv", CSV);
        let result = DatasetLoader::load_from_file(file.path()).unwrap();

        assert_eq!(result.num_records, 2);
        assert_eq!(result.source.as_deref(), Some(file.path()));
        assert_eq!(result.checksum, calculate_checksum(CSV.as_bytes()));
    }

    #[test]
    fn test_load_from_file_uppercase_extension() {
        let file = temp_file_with_suffix(".CSV", CSV);
        assert!(DatasetLoader::load_from_file(file.path()).is_ok());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file_with_suffix(".json", "{}");
        let result = DatasetLoader::load_from_file(file.path());
        assert!(matches!(result, Err(DataLoadError::UnsupportedFormat(ext)) if ext == "json"));
    }

    #[test]
    fn test_no_extension() {
        let result = DatasetLoader::load_from_file(Path::new("/tmp/launches"));
        assert!(matches!(result, Err(DataLoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DatasetLoader::load_from_file(Path::new("/nonexistent/launches.csv"));
        assert!(matches!(result, Err(DataLoadError::NotFound { .. })));
    }

    #[test]
    fn test_load_from_str_matches_file_checksum() {
        let file = temp_file_with_suffix(".csv", CSV);
        let from_file = DatasetLoader::load_from_csv(file.path()).unwrap();
        let from_str = DatasetLoader::load_from_csv_str(CSV).unwrap();

        assert_eq!(from_file.checksum, from_str.checksum);
        assert_eq!(from_file.dataset, from_str.dataset);
        assert!(from_str.source.is_none());
    }
}
