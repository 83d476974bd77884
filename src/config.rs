//! Loading display formats from JSON configuration files

use std::fs;
use std::path::Path;

use log::debug;

use crate::formatting::PositionFormat;
use crate::{io_err, Result};

/// Reads a [`PositionFormat`] from a JSON file
///
/// The file may name any subset of the format fields; the rest keep their
/// default values.
pub fn load_format<P: AsRef<Path>>(path: P) -> Result<PositionFormat> {
    let path = path.as_ref();
    debug!("Loading position format from {}", path.display());

    let json = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let format = PositionFormat::from_json(&json)?;

    debug!("Loaded position format: {:?}", format);
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PositionError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_partial_format() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dm_separator": "", "min_precision": 1 }}"#).unwrap();

        let format = load_format(file.path()).unwrap();
        assert_eq!(format.dm_separator, "");
        assert_eq!(format.min_precision, 1);
        assert_eq!(format.sec_precision, 2);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        match load_format(&path) {
            Err(PositionError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "deg_symbol = \"°\"").unwrap();

        assert!(matches!(
            load_format(file.path()),
            Err(PositionError::Config(_))
        ));
    }
}
