use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Catalog, Song};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the song catalog from a CSV file.
///
/// Expected layout: header row with at least the columns `SongTitle`,
/// `Musician`, `Genre` and `Rating` (any order, extra columns ignored).
/// Any malformed row is a hard error — the catalog either loads completely
/// or startup fails.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening catalog file {}", path.display()))?;
    read_catalog(file)
}

/// Parse a catalog from any CSV reader (file in production, bytes in tests).
pub fn read_catalog<R: Read>(input: R) -> Result<Catalog> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let title_idx = column_index(&headers, "SongTitle")?;
    let musician_idx = column_index(&headers, "Musician")?;
    let genre_idx = column_index(&headers, "Genre")?;
    let rating_idx = column_index(&headers, "Rating")?;

    let mut songs = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

        let rating_text = record.get(rating_idx).unwrap_or("");
        let rating: f64 = rating_text
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: Rating '{rating_text}' is not a number"))?;

        songs.push(Song::new(
            field(title_idx),
            field(musician_idx),
            field(genre_idx),
            rating,
        ));
    }

    Ok(Catalog::from_songs(songs))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
SongTitle,Musician,Genre,Rating
Song A,M1,Rock,8
Song B,M1,Pop,5
Song C,M2,Rock,9.5
";

    #[test]
    fn loads_all_rows_with_types() {
        let catalog = read_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.songs[0].title, "Song A");
        assert_eq!(catalog.songs[2].rating.0, 9.5);
        assert_eq!(catalog.songs[1].genre_lower, "pop");
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "Rating,Genre,SongTitle,Musician,Extra\n7,Jazz,Blue,Miles,x\n";
        let catalog = read_catalog(csv.as_bytes()).unwrap();
        assert_eq!(catalog.songs[0].title, "Blue");
        assert_eq!(catalog.songs[0].rating.0, 7.0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "SongTitle,Musician,Rating\nA,B,5\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Genre"));
    }

    #[test]
    fn bad_rating_is_an_error() {
        let csv = "SongTitle,Musician,Genre,Rating\nA,B,Rock,high\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Rating"));
    }
}
