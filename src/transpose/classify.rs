//! Line classification: chord rows vs sung text.
//!
//! Spanish lyrics are full of words that are also note names ("mi", "la",
//! "si", "sol"), so single tokens cannot be judged on their own. A line is a
//! chord line when enough of its tokens have chord shape.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::chord::looks_like_chord;

/// Alignment gap between chords on a chord row.
static WIDE_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("gap pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Chord,
    Lyric,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Chord => "chord",
            LineKind::Lyric => "lyric",
        }
    }
}

/// Decide whether a line holds chords or lyrics.
///
/// 1. Blank lines are lyrics.
/// 2. Split on runs of 2+ whitespace: with at least two parts, half of them
///    chord-shaped makes a chord line.
/// 3. Otherwise split on any whitespace: 60% chord-shaped tokens makes a
///    chord line. This also covers one- and two-token lines made only of
///    chords ("FA", "DO7 SOL").
///
/// ```
/// use cancionero::{classify_line, LineKind};
///
/// assert_eq!(classify_line("DO        SOL       LAm"), LineKind::Chord);
/// assert_eq!(classify_line("y la fe que tengo"), LineKind::Lyric);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Lyric;
    }

    let parts: Vec<&str> = WIDE_GAP.split(trimmed).collect();
    if parts.len() >= 2 {
        let chords = parts.iter().filter(|part| looks_like_chord(part)).count();
        if chords * 2 >= parts.len() {
            return LineKind::Chord;
        }
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let chords = tokens.iter().filter(|token| looks_like_chord(token)).count();
    if chords * 5 >= tokens.len() * 3 {
        return LineKind::Chord;
    }

    LineKind::Lyric
}
