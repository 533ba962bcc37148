//! # Songbook
//!
//! Song records as the web application stores them: one JSON object per
//! line (`cantoral.jsonl`).
//!
//! ```text
//! {"id":"41","code":"E12","title":"Pescador de hombres","author":"","category":"E","slug":"pescador-de-hombres","hasAudio":true,"lyrics":"RE  SIm\n..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CancioneroError;
use crate::sheet::{SheetMetadata, SongSheet};
use crate::transpose::transpose_full_lyrics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    /// Category letter followed by the number, e.g. `E12`.
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub category: String,
    pub slug: String,
    #[serde(default)]
    pub has_audio: bool,
    #[serde(default)]
    pub lyrics: String,
    /// Length of the recording in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Song {
    /// Copy of the song with its lyrics transposed.
    pub fn transposed(&self, semitones: i32) -> Song {
        Song {
            lyrics: transpose_full_lyrics(&self.lyrics, semitones),
            ..self.clone()
        }
    }

    pub fn to_sheet(&self) -> SongSheet {
        let author = (!self.author.is_empty()).then(|| self.author.clone());
        SongSheet {
            metadata: Some(SheetMetadata {
                title: Some(self.title.clone()),
                author,
                code: Some(self.code.clone()),
                category: Some(self.category.clone()),
                ..SheetMetadata::default()
            }),
            lyrics: self.lyrics.clone(),
        }
    }

    /// The section named by the song's category letter, if it is a known one.
    pub fn category(&self) -> Option<&'static Category> {
        category_by_letter(&self.category)
    }
}

/// Liturgical section a song belongs to. `Song::category` stores the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub letter: &'static str,
    pub description: &'static str,
    pub slug: &'static str,
}

impl Category {
    const fn new(letter: &'static str, description: &'static str, slug: &'static str) -> Self {
        Category {
            letter,
            description,
            slug,
        }
    }
}

/// Sections in the order of the Mass.
pub static CATEGORIES: [Category; 10] = [
    Category::new("E", "Entrada", "entrada"),
    Category::new("K", "Kyrie", "kyrie"),
    Category::new("G", "Gloria", "gloria"),
    Category::new("S", "Salmo", "salmo"),
    Category::new("A", "Aleluya", "aleluya"),
    Category::new("O", "Ofertorio", "ofertorio"),
    Category::new("N", "Santo", "santo"),
    Category::new("P", "Padre Nuestro", "padre-nuestro"),
    Category::new("C", "Comunión", "comunion"),
    Category::new("F", "Final", "final"),
];

/// Find a category by its letter, ignoring ASCII case.
///
/// ```
/// use cancionero::category_by_letter;
///
/// assert_eq!(category_by_letter("c").map(|c| c.description), Some("Comunión"));
/// assert_eq!(category_by_letter("X"), None);
/// ```
pub fn category_by_letter(letter: &str) -> Option<&'static Category> {
    let letter = letter.trim();
    CATEGORIES
        .iter()
        .find(|category| category.letter.eq_ignore_ascii_case(letter))
}

pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Songbook {
    songs: Vec<Song>,
}

impl Songbook {
    pub fn new(songs: Vec<Song>) -> Self {
        Songbook { songs }
    }

    /// Load a JSON Lines songbook. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns [`CancioneroError::SongbookError`] with the 1-based line of the
    /// first record that fails to decode.
    pub fn from_jsonl(source: &str) -> Result<Self, CancioneroError> {
        let mut songs = Vec::new();
        for (i, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let song: Song =
                serde_json::from_str(line).map_err(|e| CancioneroError::SongbookError {
                    line: i + 1,
                    message: e.to_string(),
                })?;
            songs.push(song);
        }

        tracing::debug!(songs = songs.len(), "loaded songbook");
        Ok(Songbook { songs })
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Look a song up by id, then by code (case-insensitive), then by slug.
    pub fn find(&self, key: &str) -> Option<&Song> {
        let key = key.trim();
        self.songs
            .iter()
            .find(|song| song.id == key)
            .or_else(|| self.songs.iter().find(|song| song.code.eq_ignore_ascii_case(key)))
            .or_else(|| self.songs.iter().find(|song| song.slug == key))
    }

    /// Songs whose category letter matches `letter`, ignoring ASCII case, in
    /// songbook order.
    pub fn by_category<'a>(&'a self, letter: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        let letter = letter.trim();
        self.songs
            .iter()
            .filter(move |song| song.category.eq_ignore_ascii_case(letter))
    }
}
