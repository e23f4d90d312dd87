use strsim::normalized_levenshtein;

// ---------------------------------------------------------------------------
// Fuzzy title suggestions
// ---------------------------------------------------------------------------

/// Find up to `n` candidates whose similarity to `query` is at least
/// `cutoff`, ordered by descending similarity. Scoring is case-insensitive;
/// ties keep candidate order (the sort is stable). Returned strings are the
/// original display-form candidates.
pub fn close_matches(query: &str, candidates: &[String], n: usize, cutoff: f64) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .filter_map(|candidate| {
            let score = normalized_levenshtein(query, &candidate.to_lowercase());
            (score >= cutoff).then_some((score, candidate))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(n);

    scored.into_iter().map(|(_, title)| title.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn near_misses_are_found_case_insensitively() {
        let pool = titles(&["Song A", "Song B", "Completely Different"]);
        let matches = close_matches("song c", &pool, 5, 0.5);
        assert_eq!(matches, vec!["Song A", "Song B"]);
    }

    #[test]
    fn best_match_comes_first() {
        let pool = titles(&["Bohemian Rhapsody", "Bohemian Like You"]);
        let matches = close_matches("bohemian rhapsody", &pool, 5, 0.5);
        assert_eq!(matches[0], "Bohemian Rhapsody");
    }

    #[test]
    fn cutoff_excludes_distant_strings() {
        let pool = titles(&["Song A"]);
        assert!(close_matches("zzz", &pool, 5, 0.5).is_empty());
    }

    #[test]
    fn results_are_capped_at_n() {
        let pool = titles(&["aaa1", "aaa2", "aaa3", "aaa4", "aaa5", "aaa6"]);
        assert_eq!(close_matches("aaa0", &pool, 5, 0.5).len(), 5);
    }
}
