//! Recommendation engine: classifies a free-text query and dispatches to an
//! exact-match filter or the fuzzy-suggestion fallback.
//!
//! Every outcome is an ordinary list of display strings; no-match cases are
//! reported with sentinel entries rather than errors.

pub mod fuzzy;

use std::collections::HashSet;

use crate::data::model::{Catalog, Song};

/// Longest result list returned for any filter mode.
const MAX_RESULTS: usize = 10;
/// Suggestion count and similarity floor for the fuzzy fallback.
const MAX_SUGGESTIONS: usize = 5;
const SUGGESTION_CUTOFF: f64 = 0.5;

pub const NO_MATCHES: &str = "No matches found.";
pub const NO_CLOSE_MATCHES: &str = "No close matches found.";

// ---------------------------------------------------------------------------
// Recommender
// ---------------------------------------------------------------------------

/// Pure query engine over an immutable [`Catalog`]. Holds no other state, so
/// concurrent calls from multiple request handlers are safe.
pub struct Recommender {
    catalog: Catalog,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Recommender { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Answer a user query with up to 10 display strings.
    ///
    /// Classification runs in a fixed order, first hit wins:
    /// exact title → exact genre → exact musician → all-digit rating
    /// threshold → fuzzy title suggestions.
    pub fn recommend(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        let songs = &self.catalog.songs;

        if let Some(reference) = songs.iter().find(|s| s.title_lower == query) {
            return self.recommend_by_title(reference, &query);
        }
        if songs.iter().any(|s| s.genre_lower == query) {
            return self.filter_by_genre(&query);
        }
        if songs.iter().any(|s| s.musician_lower == query) {
            return self.filter_by_musician(&query);
        }
        if !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()) {
            // A digit run too long for u64 is a threshold above any real
            // rating, so it matches nothing rather than falling to fuzzy.
            let threshold = query.parse::<u64>().map_or(f64::INFINITY, |n| n as f64);
            return self.filter_by_rating(threshold);
        }
        self.suggest_close_matches(&query)
    }

    /// Title-similarity mode: `reference` is the first record matching the
    /// queried title; select songs sharing its genre or musician or rated at
    /// least as high. Every record with the queried title is excluded,
    /// duplicates included.
    fn recommend_by_title(&self, reference: &Song, title: &str) -> Vec<String> {
        let selected = self.catalog.songs.iter().filter(|s| {
            (s.genre_lower == reference.genre_lower
                || s.musician_lower == reference.musician_lower
                || s.rating.0 >= reference.rating.0)
                && s.title_lower != title
        });
        format_results(selected)
    }

    fn filter_by_genre(&self, genre: &str) -> Vec<String> {
        format_results(self.catalog.songs.iter().filter(|s| s.genre_lower == genre))
    }

    fn filter_by_musician(&self, musician: &str) -> Vec<String> {
        format_results(
            self.catalog
                .songs
                .iter()
                .filter(|s| s.musician_lower == musician),
        )
    }

    fn filter_by_rating(&self, threshold: f64) -> Vec<String> {
        format_results(
            self.catalog
                .songs
                .iter()
                .filter(|s| s.rating.0 >= threshold),
        )
    }

    fn suggest_close_matches(&self, query: &str) -> Vec<String> {
        let matches = fuzzy::close_matches(
            query,
            &self.catalog.distinct_titles,
            MAX_SUGGESTIONS,
            SUGGESTION_CUTOFF,
        );
        if matches.is_empty() {
            return vec![NO_CLOSE_MATCHES.to_string()];
        }
        matches
            .into_iter()
            .map(|title| format!("Did you mean: {title}?"))
            .collect()
    }
}

/// Deduplicate on the full (title, musician, genre, rating) tuple keeping
/// catalog order, cap at 10, and render the display strings. An empty
/// selection becomes the no-match sentinel.
fn format_results<'a>(selected: impl Iterator<Item = &'a Song>) -> Vec<String> {
    let mut seen = HashSet::new();
    let results: Vec<String> = selected
        .filter(|s| seen.insert(s.dedup_key()))
        .take(MAX_RESULTS)
        .map(|s| s.to_string())
        .collect();

    if results.is_empty() {
        vec![NO_MATCHES.to_string()]
    } else {
        results
    }
}
