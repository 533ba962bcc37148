//! # Cancionero
//!
//! Chord transposition for song sheets written in Spanish solfège (DO, RE,
//! MI, FA, SOL, LA, SI). Chord rows are moved by any number of semitones;
//! lyric rows are left as they are, even where their words spell notes.
//!
//! ## Modules
//! - `transpose` - The transposition engine (line classification, chord
//!   tokenizer, chord transposer, lyric word filter)
//! - `sheet` - Lyrics text with optional YAML frontmatter
//! - `songbook` - Song records and JSON Lines songbook loading
//! - `stepper` - Bounded semitone stepper used by the UI
//! - `error` - Error types
//!
//! ## Example
//! ```rust
//! use cancionero::transpose_full_lyrics;
//!
//! let lyrics = "LAm        MI7\nla luz de tu mirada\n";
//! assert_eq!(transpose_full_lyrics(lyrics, 3), "DOm        SOL7\nla luz de tu mirada\n");
//! ```

pub mod error;
pub mod sheet;
pub mod songbook;
pub mod stepper;
pub mod transpose;

pub use error::*;
pub use sheet::{SheetMetadata, SongSheet};
pub use songbook::{category_by_letter, category_by_slug, Category, Song, Songbook, CATEGORIES};
pub use stepper::{format_offset, TransposeRange};
pub use transpose::{classify_line, transpose_chord, transpose_full_lyrics, LineKind, Note};
