/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   catalog.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse csv, coerce date_added, derive fields
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CatalogTable │  normalized records, unique-value indexes
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌───────────┐
///   │  filter   │ ──▶ │ aggregate │  named counts for the charts
///   └──────────┘     └───────────┘
/// ```
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod store;

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::aggregate::Aggregates;
    use super::filter::{filter_indices, FilterSelection};
    use super::model::{TYPE_MOVIE, TYPE_TV_SHOW};
    use super::store::CatalogStore;

    fn write_catalog() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        let rows = [
            "title,type,country,rating,listed_in,director,date_added,duration",
            r#"Dust,Movie,United States,PG-13,Dramas,Ann Lee,"March 2, 2015",90 min"#,
            r#"Glass Harbor,Movie,United States,R,Thrillers,Ann Lee,"July 14, 2016",104 min"#,
            r#"Monsoon,Movie,India,TV-14,Dramas,,"May 5, 2016",121 min"#,
            r#"Orbit,TV Show,United States,TV-MA,TV Dramas,,"January 3, 2017",2 Seasons"#,
            r#"Driftwood,Movie,,PG,Comedies,,"June 9, 2015",88 min"#,
            r#"Unparseable,Movie,United States,PG,Comedies,,Coming Soon,88 min"#,
        ];
        for row in rows {
            writeln!(file, "{row}").expect("write row");
        }
        file.flush().expect("flush");
        file
    }

    #[test]
    fn load_filter_aggregate_end_to_end() {
        let file = write_catalog();
        let store = CatalogStore::open(file.path()).expect("open");
        let table = store.table();

        // The unparseable-date row was dropped at load.
        assert_eq!(table.len(), 5);

        // Only Movies exist in 2015–2016, so with both types selected and
        // country pinned to the United States the TV Show KPI must be zero
        // and the total must count the matching Movies only.
        let selection = FilterSelection {
            selected_types: [TYPE_MOVIE.to_string(), TYPE_TV_SHOW.to_string()].into(),
            year_range: (2015, 2016),
            selected_countries: ["United States".to_string()].into(),
        };
        let indices = filter_indices(table, &selection);
        let aggregates = Aggregates::compute(table, &indices);

        assert_eq!(aggregates.total, 2);
        assert_eq!(aggregates.movies, 2);
        assert_eq!(aggregates.tv_shows, 0);
        assert_eq!(aggregates.yearly, vec![(2015, 1), (2016, 1)]);
        assert_eq!(aggregates.monthly.iter().map(|(_, n)| n).sum::<usize>(), 2);

        // Widening the selection can only grow the subset.
        let broad = FilterSelection::select_all(table);
        let broad_indices = filter_indices(table, &broad);
        assert!(indices.iter().all(|i| broad_indices.contains(i)));
        // The null-country row is excluded even by the widest selection.
        assert_eq!(broad_indices.len(), 4);
    }
}
