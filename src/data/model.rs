use std::collections::BTreeSet;

use chrono::NaiveDate;

pub const TYPE_MOVIE: &str = "Movie";
pub const TYPE_TV_SHOW: &str = "TV Show";

/// Calendar month names in January→December order. Used both when deriving
/// `month_added` and when reindexing the monthly aggregate, so the two can
/// never disagree on spelling.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ---------------------------------------------------------------------------
// CatalogRecord – one row of the normalized table
// ---------------------------------------------------------------------------

/// A single catalog title after normalization. Every record holds a valid
/// `date_added`; rows whose date could not be parsed never make it here.
#[derive(Debug, Clone)]
pub struct CatalogRecord {
    pub title: String,
    /// The `type` column, e.g. "Movie" or "TV Show".
    pub content_type: String,
    /// Opaque country string; multi-country values are not split.
    pub country: Option<String>,
    pub rating: Option<String>,
    /// Comma-delimited genre tags, counted as one opaque tag.
    pub listed_in: String,
    pub director: Option<String>,
    pub date_added: NaiveDate,
    pub duration: Option<String>,

    // Derived at load time, immutable thereafter.
    pub year_added: i32,
    /// Full month name of `date_added`, from [`MONTH_NAMES`].
    pub month_added: String,
    /// First contiguous digit run in `duration`, if any.
    pub duration_value: Option<u32>,
    /// First contiguous alphabetic run in `duration`, if any.
    pub duration_unit: Option<String>,
}

// ---------------------------------------------------------------------------
// CatalogTable – the complete normalized table
// ---------------------------------------------------------------------------

/// The normalized table with pre-computed unique-value indexes for the
/// filter widgets.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    pub records: Vec<CatalogRecord>,
    /// Sorted unique content types.
    pub types: Vec<String>,
    /// Sorted unique countries; records without a country contribute nothing.
    pub countries: Vec<String>,
    /// Inclusive bounds of `year_added` over all records (0 when empty).
    pub year_min: i32,
    pub year_max: i32,
}

impl CatalogTable {
    /// Build the unique-value indexes and year bounds from normalized rows.
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let types: BTreeSet<&str> = records.iter().map(|r| r.content_type.as_str()).collect();
        let countries: BTreeSet<&str> = records
            .iter()
            .filter_map(|r| r.country.as_deref())
            .collect();
        let year_min = records.iter().map(|r| r.year_added).min().unwrap_or(0);
        let year_max = records.iter().map(|r| r.year_added).max().unwrap_or(0);

        CatalogTable {
            types: types.into_iter().map(str::to_string).collect(),
            countries: countries.into_iter().map(str::to_string).collect(),
            year_min,
            year_max,
            records,
        }
    }

    /// Number of titles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn sample_record(
    content_type: &str,
    country: Option<&str>,
    year: i32,
    month: u32,
) -> CatalogRecord {
    let date_added = NaiveDate::from_ymd_opt(year, month, 15).expect("valid test date");
    CatalogRecord {
        title: format!("{content_type} {year}-{month}"),
        content_type: content_type.to_string(),
        country: country.map(str::to_string),
        rating: Some("TV-14".to_string()),
        listed_in: "Dramas".to_string(),
        director: None,
        date_added,
        duration: Some("90 min".to_string()),
        year_added: year,
        month_added: MONTH_NAMES[(month - 1) as usize].to_string(),
        duration_value: Some(90),
        duration_unit: Some("min".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_records_indexes_unique_values_and_year_bounds() {
        let table = CatalogTable::from_records(vec![
            sample_record(TYPE_MOVIE, Some("India"), 2016, 3),
            sample_record(TYPE_TV_SHOW, Some("United States"), 2019, 7),
            sample_record(TYPE_MOVIE, None, 2014, 1),
        ]);

        assert_eq!(table.types, vec!["Movie", "TV Show"]);
        assert_eq!(table.countries, vec!["India", "United States"]);
        assert_eq!((table.year_min, table.year_max), (2014, 2019));
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }
}
