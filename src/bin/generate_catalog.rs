//! Writes a demo `music_data.csv` so the server can be tried without a real
//! catalog. Usage: `cargo run --bin generate_catalog [path]`

use anyhow::{Context, Result};

const SONGS: &[(&str, &str, &str, f64)] = &[
    ("Bohemian Rhapsody", "Queen", "Rock", 10.0),
    ("Don't Stop Me Now", "Queen", "Rock", 9.0),
    ("Billie Jean", "Michael Jackson", "Pop", 9.0),
    ("Beat It", "Michael Jackson", "Pop", 8.0),
    ("Smells Like Teen Spirit", "Nirvana", "Grunge", 9.0),
    ("Come as You Are", "Nirvana", "Grunge", 8.0),
    ("So What", "Miles Davis", "Jazz", 9.5),
    ("Blue in Green", "Miles Davis", "Jazz", 8.5),
    ("Take Five", "Dave Brubeck", "Jazz", 9.0),
    ("Hotel California", "Eagles", "Rock", 9.0),
    ("Rolling in the Deep", "Adele", "Pop", 8.0),
    ("Someone Like You", "Adele", "Pop", 7.5),
    ("Lose Yourself", "Eminem", "Hip-Hop", 9.0),
    ("Stan", "Eminem", "Hip-Hop", 8.0),
    ("One More Time", "Daft Punk", "Electronic", 8.5),
    ("Around the World", "Daft Punk", "Electronic", 7.0),
    ("Hallelujah", "Leonard Cohen", "Folk", 9.0),
    ("Hurt", "Johnny Cash", "Country", 9.5),
    ("Ring of Fire", "Johnny Cash", "Country", 8.0),
    ("Clocks", "Coldplay", "Rock", 7.5),
];

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "music_data.csv".to_string());

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating catalog file {path}"))?;

    writer.write_record(["SongTitle", "Musician", "Genre", "Rating"])?;
    for (title, musician, genre, rating) in SONGS {
        let rating = rating.to_string();
        writer.write_record([*title, *musician, *genre, rating.as_str()])?;
    }
    writer.flush()?;

    println!("wrote {} songs to {path}", SONGS.len());
    Ok(())
}
