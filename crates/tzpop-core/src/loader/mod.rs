// crates/tzpop-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the Physical Layer (files, decompression, HTTP) and hands a plain
//! list of identifiers to [`Catalog::from_ids`].

use crate::catalog::Catalog;
use crate::error::{Result, TzError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

#[cfg(feature = "http")]
pub mod remote;

impl Catalog {
    /// **Offline Loader:** reads a JSON array of identifiers from disk.
    ///
    /// Files ending in `.gz` are decompressed when the `compact` feature is
    /// enabled. The file has the same shape as the World Time API's
    /// `/timezone` listing, so a saved response can be used as-is.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let ids = parse_timezone_list(reader)?;
        let catalog = Catalog::from_ids(ids);
        info!(
            path = %path.display(),
            timezones = catalog.len(),
            "timezone catalog loaded from file"
        );
        Ok(catalog)
    }
}

/// Decode a JSON array of strings.
pub fn parse_timezone_list<R: Read>(reader: R) -> Result<Vec<String>> {
    serde_json::from_reader(reader).map_err(|e| {
        TzError::CatalogUnavailable(format!("timezone list is not a JSON array of strings: {e}"))
    })
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TzError::CatalogUnavailable(format!("catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(TzError::CatalogUnavailable(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_plain_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timezones.json");
        fs::write(&path, r#"["Europe/London", "Europe/Paris", "UTC"]"#).unwrap();

        let catalog = Catalog::load_from_path(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("Europe/Paris"));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn loads_gzipped_json_file() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timezones.json.gz");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(br#"["Asia/Tokyo","Asia/Seoul"]"#).unwrap();
        fs::write(&path, enc.finish().unwrap()).unwrap();

        let catalog = Catalog::load_from_path(&path).unwrap();
        assert_eq!(catalog.regions(), ["Asia"]);
    }

    #[test]
    fn missing_file_is_catalog_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load_from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TzError::CatalogUnavailable(_)));
    }

    #[test]
    fn wrong_shape_is_catalog_unavailable() {
        for body in [r#"{"Europe/London": 1}"#, r#"["UTC", 7]"#, "not json"] {
            assert!(matches!(
                parse_timezone_list(body.as_bytes()),
                Err(TzError::CatalogUnavailable(_))
            ));
        }
    }
}
