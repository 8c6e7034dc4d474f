use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::model::{CatalogRecord, CatalogTable, MONTH_NAMES};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Load failures are fatal: the dashboard cannot render without a non-empty
/// normalized table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog file: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog file {0:?} has no rows with a usable date_added")]
    Empty(PathBuf),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalize a catalog CSV.
///
/// Expected layout: header row with at least `type`, `country`, `rating`,
/// `listed_in`, `director`, `date_added`, `duration` columns (a `title`
/// column is carried through for display when present). Rows whose
/// `date_added` is missing or unparseable are dropped, never repaired.
pub fn load_catalog(path: &Path) -> Result<CatalogTable, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&bytes, path)
}

/// Parse already-read catalog bytes. Split out so [`super::store`] can
/// fingerprint the same bytes it parses.
pub(crate) fn parse_catalog(bytes: &[u8], path: &Path) -> Result<CatalogTable, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize() {
        let raw: RawRecord = row?;
        let Some(date_added) = raw.date_added.as_deref().and_then(parse_date_added) else {
            dropped += 1;
            continue;
        };
        records.push(normalize(raw, date_added));
    }

    if records.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    if dropped > 0 {
        log::warn!("dropped {dropped} rows without a parseable date_added");
    }

    Ok(CatalogTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

/// One raw CSV row. Optional columns deserialize empty fields to `None`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    title: String,
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    listed_in: String,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    date_added: Option<String>,
    #[serde(default)]
    duration: Option<String>,
}

fn normalize(raw: RawRecord, date_added: NaiveDate) -> CatalogRecord {
    let duration_value = raw.duration.as_deref().and_then(first_digit_run);
    let duration_unit = raw.duration.as_deref().and_then(first_alpha_run);

    CatalogRecord {
        year_added: date_added.year(),
        month_added: MONTH_NAMES[date_added.month0() as usize].to_string(),
        duration_value,
        duration_unit,
        date_added,
        title: raw.title,
        content_type: raw.content_type,
        country: raw.country,
        rating: raw.rating,
        listed_in: raw.listed_in,
        director: raw.director,
        duration: raw.duration,
    }
}

// ---------------------------------------------------------------------------
// Field coercion helpers
// ---------------------------------------------------------------------------

/// Formats accepted for `date_added`, tried in order. The common catalog
/// export writes "September 25, 2021", occasionally with stray whitespace.
const DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("invalid regex"));
static ALPHA_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("invalid regex"));

/// First contiguous digit run anywhere in `s`; absent when there is none or
/// the run overflows `u32`.
fn first_digit_run(s: &str) -> Option<u32> {
    DIGIT_RUN.find(s).and_then(|m| m.as_str().parse().ok())
}

/// First contiguous alphabetic run anywhere in `s`.
fn first_alpha_run(s: &str) -> Option<String> {
    ALPHA_RUN.find(s).map(|m| m.as_str().to_string())
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
    fn derives_date_and_duration_fields() {
        let file = write_catalog(&[
            r#"Dust,Movie,United States,PG-13,Dramas,Ann Lee,"September 25, 2021",90 min"#,
            r#"Orbit,TV Show,Japan,TV-14,TV Dramas,,"January 3, 2019",2 Seasons"#,
        ]);
        let table = load_catalog(file.path()).expect("load");
        assert_eq!(table.len(), 2);

        let first = &table.records[0];
        assert_eq!(first.title, "Dust");
        assert_eq!(first.year_added, 2021);
        assert_eq!(first.month_added, "September");
        assert_eq!(first.duration_value, Some(90));
        assert_eq!(first.duration_unit.as_deref(), Some("min"));

        let second = &table.records[1];
        assert_eq!(second.year_added, 2019);
        assert_eq!(second.month_added, "January");
        assert_eq!(second.duration_value, Some(2));
        assert_eq!(second.duration_unit.as_deref(), Some("Seasons"));
        assert!(second.director.is_none());
    }

    #[test]
    fn drops_rows_without_a_parseable_date() {
        let file = write_catalog(&[
            r#"Kept,Movie,India,TV-PG,Comedies,,"March 1, 2018",101 min"#,
            r#"No Date,Movie,India,TV-PG,Comedies,,,95 min"#,
            r#"Bad Date,Movie,India,TV-PG,Comedies,,Coming Soon,95 min"#,
        ]);
        let table = load_catalog(file.path()).expect("load");
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].title, "Kept");
    }

    #[test]
    fn header_only_file_is_a_load_error() {
        let file = write_catalog(&[]);
        let err = load_catalog(file.path()).expect_err("no usable rows");
        assert!(matches!(err, LoadError::Empty(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_catalog(Path::new("no_such_catalog.csv")).expect_err("missing file");
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn date_parsing_is_tolerant_of_format_and_whitespace() {
        let expected = NaiveDate::from_ymd_opt(2021, 9, 25).expect("valid date");
        assert_eq!(parse_date_added("September 25, 2021"), Some(expected));
        assert_eq!(parse_date_added(" September 25, 2021 "), Some(expected));
        assert_eq!(parse_date_added("Sep 25, 2021"), Some(expected));
        assert_eq!(parse_date_added("2021-09-25"), Some(expected));
        assert_eq!(parse_date_added("09/25/2021"), Some(expected));
        assert_eq!(parse_date_added(""), None);
        assert_eq!(parse_date_added("sometime in 2021?"), None);
    }

    #[test]
    fn duration_runs_are_extracted_independently() {
        assert_eq!(first_digit_run("90 min"), Some(90));
        assert_eq!(first_alpha_run("90 min").as_deref(), Some("min"));

        // Digit and alpha runs are found anywhere, not only at the start.
        assert_eq!(first_digit_run("Season 2"), Some(2));
        assert_eq!(first_alpha_run("Season 2").as_deref(), Some("Season"));

        assert_eq!(first_digit_run("min"), None);
        assert_eq!(first_alpha_run("min").as_deref(), Some("min"));
        assert_eq!(first_digit_run("123"), Some(123));
        assert_eq!(first_alpha_run("123"), None);
        assert_eq!(first_digit_run("99999999999999999999"), None);
    }
}
