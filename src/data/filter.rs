use std::collections::BTreeSet;

use super::model::{CatalogRecord, CatalogTable};

// ---------------------------------------------------------------------------
// Filter selection: the three user-controlled predicates
// ---------------------------------------------------------------------------

/// The current filter selection from the side panel. A record is kept only
/// when it passes all three predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub selected_types: BTreeSet<String>,
    /// Inclusive `(min, max)` range over `year_added`.
    pub year_range: (i32, i32),
    pub selected_countries: BTreeSet<String>,
}

impl FilterSelection {
    /// Selection that keeps every record: all types, all countries, the full
    /// year span of the table.
    pub fn select_all(table: &CatalogTable) -> Self {
        FilterSelection {
            selected_types: table.types.iter().cloned().collect(),
            year_range: (table.year_min, table.year_max),
            selected_countries: table.countries.iter().cloned().collect(),
        }
    }

    /// Conjunction of type membership, inclusive year range, and country
    /// membership. A record without a country never matches the country
    /// predicate.
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        if !self.selected_types.contains(&record.content_type) {
            return false;
        }
        let (min_year, max_year) = self.year_range;
        if record.year_added < min_year || record.year_added > max_year {
            return false;
        }
        match &record.country {
            Some(country) => self.selected_countries.contains(country),
            None => false,
        }
    }
}

/// Return indices of records that pass the current selection. Each call is a
/// pure function of the table and selection; upstream data is never mutated.
pub fn filter_indices(table: &CatalogTable, selection: &FilterSelection) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.matches(record))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::data::model::{sample_record, CatalogTable, TYPE_MOVIE, TYPE_TV_SHOW};

    use super::*;

    fn table() -> CatalogTable {
        CatalogTable::from_records(vec![
            sample_record(TYPE_MOVIE, Some("United States"), 2015, 2),
            sample_record(TYPE_MOVIE, Some("United States"), 2016, 6),
            sample_record(TYPE_MOVIE, Some("India"), 2016, 6),
            sample_record(TYPE_TV_SHOW, Some("United States"), 2017, 9),
            sample_record(TYPE_MOVIE, None, 2016, 6),
        ])
    }

    #[test]
    fn predicates_are_a_conjunction() {
        let table = table();
        let selection = FilterSelection {
            selected_types: [TYPE_MOVIE.to_string()].into(),
            year_range: (2015, 2016),
            selected_countries: ["United States".to_string()].into(),
        };
        assert_eq!(filter_indices(&table, &selection), vec![0, 1]);
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let table = table();
        let selection = FilterSelection {
            year_range: (2015, 2017),
            ..FilterSelection::select_all(&table)
        };
        // Records from both boundary years survive.
        assert_eq!(filter_indices(&table, &selection).len(), 4);
    }

    #[test]
    fn null_country_never_matches() {
        let table = table();
        let selection = FilterSelection::select_all(&table);
        let indices = filter_indices(&table, &selection);
        assert!(!indices.contains(&4));
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = table();
        let selection = FilterSelection {
            selected_types: [TYPE_MOVIE.to_string()].into(),
            year_range: (2016, 2016),
            selected_countries: ["India".to_string()].into(),
        };
        assert_eq!(
            filter_indices(&table, &selection),
            filter_indices(&table, &selection)
        );
    }

    #[test]
    fn narrower_selections_yield_subsets() {
        let table = table();
        let broad = FilterSelection::select_all(&table);
        let narrow = FilterSelection {
            selected_types: [TYPE_MOVIE.to_string()].into(),
            year_range: (2016, 2016),
            selected_countries: ["United States".to_string(), "India".to_string()].into(),
        };

        let broad_indices = filter_indices(&table, &broad);
        let narrow_indices = filter_indices(&table, &narrow);
        assert!(narrow_indices.iter().all(|i| broad_indices.contains(i)));
        assert!(broad_indices.len() <= table.len());
    }
}
