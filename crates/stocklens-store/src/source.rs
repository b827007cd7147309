//! # Dataset Source
//!
//! The external source the store is populated from: a JSON file containing
//! an array of `{id, name, category, stock, price}` objects.
//!
//! Reading and parsing are separated from [`crate::store::InventoryStore::load`]
//! so the store itself stays free of I/O; the store only ever sees a parsed
//! `Vec<Product>` or nothing at all.

use std::path::Path;

use tracing::debug;

use stocklens_core::Product;

use crate::error::LoadError;

/// Reads and parses a JSON dataset file.
///
/// An unreachable file maps to [`LoadError::Io`], an unparseable body to
/// [`LoadError::Malformed`]. An empty-but-valid array is *not* rejected
/// here; that rule belongs to the store, which also owns the consequences
/// (ending up in the failed state).
pub async fn load_json_file(path: impl AsRef<Path>) -> Result<Vec<Product>, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading inventory dataset");

    let raw = tokio::fs::read_to_string(path).await?;
    let records: Vec<Product> = serde_json::from_str(&raw)?;

    debug!(records = records.len(), "dataset parsed");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_valid_dataset() {
        let path = temp_file(
            "stocklens_source_valid.json",
            r#"[
                {"id": 1, "name": "Widget", "category": "Tools", "stock": 3, "price": 9.99},
                {"id": 2, "name": "Gadget", "category": "Tools", "stock": 10, "price": 19.99}
            ]"#,
        );

        let records = load_json_file(&path).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Widget");
        assert_eq!(records[1].stock, 10);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = load_json_file("/no/such/file.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_malformed_error() {
        let path = temp_file("stocklens_source_malformed.json", "{ not json ]");
        let err = load_json_file(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
        std::fs::remove_file(path).ok();
    }
}
