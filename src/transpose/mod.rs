//! # Transpose Module
//!
//! Shift every chord in a song sheet written in Spanish solfège by a number of
//! semitones, without touching lyric words that happen to spell note names.
//!
//! ## Pipeline
//! For each `\n`-separated line of the input:
//! 1. [`classify_line`] decides whether the line holds chords or lyrics
//! 2. Chord lines are segmented by the tokenizer and every chord token goes
//!    through [`transpose_chord`]
//! 3. Lyric lines go through the word filter, which only transposes a line
//!    that is a single (optionally bracketed) chord
//!
//! Lines are rejoined with `\n`, so the output has as many lines as the input.
//!
//! ## Sub-modules
//! - `notes` - The twelve pitch classes and the flat alias table
//! - `chord` - Chord token parsing and single-chord transposition
//! - `classify` - Chord line vs lyric line heuristics
//! - `tokenizer` - Chord line segmentation
//! - `lyric_filter` - Lyric line handling
//!
//! ## Spelling
//! Roots are always written back canonically: uppercase, sharps only
//! (`SIb` becomes `LA#` or whatever it was moved to). Suffixes such as `m7`,
//! `sus4` or `/SOL` are kept byte for byte; a bass note after a slash on a
//! chord line is a chord token of its own and moves with the root.
//!
//! ## Example
//! ```rust
//! use cancionero::transpose_full_lyrics;
//!
//! let sheet = "DO        SOL\nMi alma canta\n";
//! assert_eq!(transpose_full_lyrics(sheet, 2), "RE        LA\nMi alma canta\n");
//! ```

mod chord;
mod classify;
mod lyric_filter;
mod notes;
mod tokenizer;


pub use chord::{looks_like_chord, transpose_chord, Accidental, ChordToken};
pub use classify::{classify_line, LineKind};
pub use lyric_filter::transpose_lyric_line;
pub use notes::{Note, FLAT_ALIASES};
pub use tokenizer::transpose_chord_line;

/// Transpose a whole lyrics text by `semitones`.
///
/// A zero offset returns the input untouched without parsing it, so flat
/// spellings are only normalised when something actually moves.
pub fn transpose_full_lyrics(lyrics: &str, semitones: i32) -> String {
    if semitones == 0 {
        return lyrics.to_string();
    }

    let mut chord_lines = 0usize;
    let lines: Vec<String> = lyrics
        .split('\n')
        .map(|line| match classify_line(line) {
            LineKind::Chord => {
                chord_lines += 1;
                transpose_chord_line(line, semitones)
            }
            LineKind::Lyric => transpose_lyric_line(line, semitones),
        })
        .collect();

    tracing::debug!(semitones, lines = lines.len(), chord_lines, "transposed lyrics");
    lines.join("\n")
}
