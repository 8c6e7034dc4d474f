use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::loader::{self, LoadError};
use super::model::CatalogTable;

// ---------------------------------------------------------------------------
// CatalogStore – process-wide home of the normalized table
// ---------------------------------------------------------------------------

/// Owns the normalized table for the lifetime of the process. The table is
/// loaded once and shared read-only behind an `Arc`; filter passes clone the
/// `Arc`, never the data.
///
/// Invalidation rule: the cached table is replaced only when the source path
/// changes (a new [`CatalogStore::open`]) or the file content changes
/// ([`CatalogStore::refresh`] compares a content fingerprint before
/// reparsing).
pub struct CatalogStore {
    path: PathBuf,
    fingerprint: u64,
    table: Arc<CatalogTable>,
}

impl CatalogStore {
    /// Read, fingerprint, and parse the catalog at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let bytes = fs::read(&path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;
        let table = loader::parse_catalog(&bytes, &path)?;
        Ok(CatalogStore {
            fingerprint: fingerprint(&bytes),
            table: Arc::new(table),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &Arc<CatalogTable> {
        &self.table
    }

    /// Re-read the source file and reload only if its content changed.
    /// Returns whether the table was replaced. On a parse failure the
    /// previous table stays in place.
    pub fn refresh(&mut self) -> Result<bool, LoadError> {
        let bytes = fs::read(&self.path).map_err(|source| LoadError::Read {
            path: self.path.clone(),
            source,
        })?;
        let fingerprint = fingerprint(&bytes);
        if fingerprint == self.fingerprint {
            return Ok(false);
        }
        self.table = Arc::new(loader::parse_catalog(&bytes, &self.path)?);
        self.fingerprint = fingerprint;
        Ok(true)
    }
}

fn fingerprint(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str = "title,type,country,rating,listed_in,director,date_added,duration";
    const ROW_A: &str = r#"Dust,Movie,United States,PG-13,Dramas,,"September 25, 2021",90 min"#;
    const ROW_B: &str = r#"Orbit,TV Show,Japan,TV-14,TV Dramas,,"January 3, 2019",2 Seasons"#;

    fn write_catalog(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "{HEADER}").expect("write header");
        for row in rows {
            writeln!(file, "{row}").expect("write row");
        }
        file.flush().expect("flush");
        file
    }

    #[test]
    fn refresh_is_a_noop_on_unchanged_content() {
        let file = write_catalog(&[ROW_A]);
        let mut store = CatalogStore::open(file.path()).expect("open");
        assert_eq!(store.table().len(), 1);
        assert!(!store.refresh().expect("refresh"));
        assert_eq!(store.table().len(), 1);
    }

    #[test]
    fn refresh_reloads_when_content_changes() {
        let file = write_catalog(&[ROW_A]);
        let mut store = CatalogStore::open(file.path()).expect("open");
        assert_eq!(store.table().len(), 1);

        fs::write(file.path(), format!("{HEADER}\n{ROW_A}\n{ROW_B}\n")).expect("rewrite");
        assert!(store.refresh().expect("refresh"));
        assert_eq!(store.table().len(), 2);
    }

    #[test]
    fn open_propagates_loader_errors() {
        assert!(matches!(
            CatalogStore::open("no_such_catalog.csv"),
            Err(LoadError::Read { .. })
        ));
        let file = write_catalog(&[]);
        assert!(matches!(
            CatalogStore::open(file.path()),
            Err(LoadError::Empty(_))
        ));
    }
}
