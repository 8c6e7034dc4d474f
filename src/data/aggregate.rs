use std::collections::BTreeMap;

use chrono::Datelike;

use super::model::{CatalogRecord, CatalogTable, MONTH_NAMES, TYPE_MOVIE, TYPE_TV_SHOW};

/// Caps on the "Top N" chart aggregates.
const TOP_RATINGS: usize = 8;
const TOP_DIRECTORS: usize = 10;
const TOP_GENRES: usize = 10;

// ---------------------------------------------------------------------------
// Aggregates – the named counts behind the charts
// ---------------------------------------------------------------------------

/// Every named aggregate the presentation layer renders, recomputed fresh
/// from the filtered subset on each selection change. An empty subset yields
/// zero counts and empty groupings, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates {
    pub total: usize,
    pub movies: usize,
    pub tv_shows: usize,
    /// Counts grouped by content type, descending by count.
    pub by_type: Vec<(String, usize)>,
    /// Counts grouped by rating (nulls skipped), top 8 by count.
    pub top_ratings: Vec<(String, usize)>,
    /// Counts per calendar month, always exactly 12 entries in
    /// January→December order, zero-filled.
    pub monthly: Vec<(String, usize)>,
    /// Counts per `year_added`, ascending by year.
    pub yearly: Vec<(i32, usize)>,
    /// Counts grouped by director (nulls excluded), top 10 by count.
    pub top_directors: Vec<(String, usize)>,
    /// Counts grouped by the opaque `listed_in` tag, top 10 by count.
    pub top_genres: Vec<(String, usize)>,
}

impl Aggregates {
    /// Compute all aggregates from the records selected by `indices`.
    pub fn compute(table: &CatalogTable, indices: &[usize]) -> Self {
        let rows: Vec<&CatalogRecord> = indices.iter().map(|&i| &table.records[i]).collect();

        let movies = rows
            .iter()
            .filter(|r| r.content_type == TYPE_MOVIE)
            .count();
        let tv_shows = rows
            .iter()
            .filter(|r| r.content_type == TYPE_TV_SHOW)
            .count();

        let by_type = value_counts(rows.iter().map(|r| r.content_type.as_str()));

        let mut top_ratings = value_counts(rows.iter().filter_map(|r| r.rating.as_deref()));
        top_ratings.truncate(TOP_RATINGS);

        let mut per_month = [0usize; 12];
        for record in &rows {
            per_month[record.date_added.month0() as usize] += 1;
        }
        let monthly = MONTH_NAMES
            .iter()
            .zip(per_month)
            .map(|(name, count)| (name.to_string(), count))
            .collect();

        let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
        for record in &rows {
            *per_year.entry(record.year_added).or_default() += 1;
        }
        let yearly = per_year.into_iter().collect();

        let mut top_directors = value_counts(rows.iter().filter_map(|r| r.director.as_deref()));
        top_directors.truncate(TOP_DIRECTORS);

        let mut top_genres = value_counts(rows.iter().map(|r| r.listed_in.as_str()));
        top_genres.truncate(TOP_GENRES);

        Aggregates {
            total: rows.len(),
            movies,
            tv_shows,
            by_type,
            top_ratings,
            monthly,
            yearly,
            top_directors,
            top_genres,
        }
    }
}

/// Frequency table in descending count order. The sort is stable, so ties
/// keep first-encountered order.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(key, _)| key.as_str() == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
