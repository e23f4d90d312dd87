use std::fmt;

// ---------------------------------------------------------------------------
// Rating – the numeric rating of a song
// ---------------------------------------------------------------------------

/// A song rating. The catalog may carry integers or floats in the same
/// column, so everything is stored as `f64`; integral values display without
/// a decimal point (`8`, not `8.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(pub f64);

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Rating {
    /// Bit pattern used when deduplicating records on their full field tuple.
    pub fn key(&self) -> u64 {
        self.0.to_bits()
    }
}

// ---------------------------------------------------------------------------
// Song – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry. Display forms are preserved as loaded; the
/// `*_lower` mirrors are precomputed once so matching is case-insensitive
/// without repeated conversion.
#[derive(Debug, Clone)]
pub struct Song {
    pub title: String,
    pub musician: String,
    pub genre: String,
    pub rating: Rating,

    pub title_lower: String,
    pub musician_lower: String,
    pub genre_lower: String,
}

impl Song {
    pub fn new(title: String, musician: String, genre: String, rating: f64) -> Self {
        let title_lower = title.to_lowercase();
        let musician_lower = musician.to_lowercase();
        let genre_lower = genre.to_lowercase();
        Song {
            title,
            musician,
            genre,
            rating: Rating(rating),
            title_lower,
            musician_lower,
            genre_lower,
        }
    }

    /// The dedup key: every display field plus the rating bit pattern.
    pub fn dedup_key(&self) -> (&str, &str, &str, u64) {
        (
            self.title.as_str(),
            self.musician.as_str(),
            self.genre.as_str(),
            self.rating.key(),
        )
    }
}

impl fmt::Display for Song {
    /// The display string shown to the user for every non-fuzzy result.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}, Rating: {})",
            self.title, self.musician, self.genre, self.rating
        )
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded catalog
// ---------------------------------------------------------------------------

/// The full in-memory catalog, immutable after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All songs, in source order.
    pub songs: Vec<Song>,
    /// Distinct display titles in first-occurrence order, used as the
    /// candidate pool for fuzzy suggestions.
    pub distinct_titles: Vec<String>,
}

impl Catalog {
    /// Build the catalog and its distinct-title index from loaded songs.
    pub fn from_songs(songs: Vec<Song>) -> Self {
        let mut distinct_titles: Vec<String> = Vec::new();
        for song in &songs {
            if !distinct_titles.iter().any(|t| t == &song.title) {
                distinct_titles.push(song.title.clone());
            }
        }
        Catalog {
            songs,
            distinct_titles,
        }
    }

    /// Number of songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_displays_integers_without_decimal() {
        assert_eq!(Rating(8.0).to_string(), "8");
        assert_eq!(Rating(8.5).to_string(), "8.5");
        assert_eq!(Rating(0.0).to_string(), "0");
    }

    #[test]
    fn song_precomputes_lowercase_mirrors() {
        let song = Song::new("Song A".into(), "M1".into(), "Rock".into(), 8.0);
        assert_eq!(song.title_lower, "song a");
        assert_eq!(song.musician_lower, "m1");
        assert_eq!(song.genre_lower, "rock");
        // display form is untouched
        assert_eq!(song.title, "Song A");
    }

    #[test]
    fn song_display_format() {
        let song = Song::new("Song A".into(), "M1".into(), "Rock".into(), 8.0);
        assert_eq!(song.to_string(), "Song A by M1 (Rock, Rating: 8)");
    }

    #[test]
    fn distinct_titles_keep_first_occurrence_order() {
        let catalog = Catalog::from_songs(vec![
            Song::new("B".into(), "x".into(), "g".into(), 1.0),
            Song::new("A".into(), "y".into(), "g".into(), 2.0),
            Song::new("B".into(), "z".into(), "h".into(), 3.0),
        ]);
        assert_eq!(catalog.distinct_titles, vec!["B", "A"]);
        assert_eq!(catalog.len(), 3);
    }
}
