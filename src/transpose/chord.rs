//! Single chord tokens: parsing and root transposition.

use once_cell::sync::Lazy;
use regex::Regex;

use super::notes::Note;

/// Root, optional accidental, then anything. Case folding is ASCII-only.
static CHORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i-u:(DO|RE|MI|FA|SOL|LA|SI)([#b]?))(.*)$").expect("chord pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "#" => Accidental::Sharp,
            "b" | "B" => Accidental::Flat,
            _ => Accidental::Natural,
        }
    }

    /// Spelling inside an uppercase lookup key (`"#"`, `"B"` or nothing).
    pub fn key_symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "B",
        }
    }
}

/// A chord split into root, accidental and quality suffix, borrowing from
/// the token it was parsed from.
///
/// ```
/// use cancionero::transpose::{Accidental, ChordToken};
///
/// let chord = ChordToken::parse("Solb7/SI").unwrap();
/// assert_eq!(chord.root, "Sol");
/// assert_eq!(chord.accidental, Accidental::Flat);
/// assert_eq!(chord.suffix, "7/SI");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordToken<'a> {
    /// Root syllable in its original casing.
    pub root: &'a str,
    pub accidental: Accidental,
    /// Everything after root and accidental, untouched.
    pub suffix: &'a str,
}

impl<'a> ChordToken<'a> {
    pub fn parse(token: &'a str) -> Option<Self> {
        let caps = CHORD_PATTERN.captures(token)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Some(ChordToken {
            root: group(1),
            accidental: Accidental::from_symbol(group(2)),
            suffix: group(3),
        })
    }

    /// Uppercase root plus accidental, e.g. `"SOLB"`.
    pub fn spelling(&self) -> String {
        format!("{}{}", self.root.to_ascii_uppercase(), self.accidental.key_symbol())
    }

    pub fn note(&self) -> Option<Note> {
        Note::from_spelling(&self.spelling())
    }

    /// A lowercase syllable with nothing attached, which in running text is
    /// far more likely a word ("mi", "la", "si") than a chord.
    fn is_bare_word(&self) -> bool {
        self.accidental == Accidental::Natural
            && self.suffix.is_empty()
            && self.root.bytes().all(|b| b.is_ascii_lowercase())
    }
}

/// Whether a (trimmed) token has the shape of a chord.
pub fn looks_like_chord(token: &str) -> bool {
    let trimmed = token.trim();
    !trimmed.is_empty() && CHORD_PATTERN.is_match(trimmed)
}

/// Transpose one chord token by `semitones`.
///
/// Only the root changes; it is respelled canonically (uppercase, sharps)
/// and the suffix is kept byte for byte. Tokens that are not chords, roots
/// that cannot be resolved (`DOb`, `FAb`) and, outside chord lines, bare
/// lowercase syllables come back unchanged. There is no shortcut for a zero
/// offset, so flats are still respelled.
///
/// ```
/// use cancionero::transpose_chord;
///
/// assert_eq!(transpose_chord("LAm7", 2, true), "SIm7");
/// assert_eq!(transpose_chord("Mib/SOL", -1, true), "RE/SOL");
/// assert_eq!(transpose_chord("SIb", 0, true), "LA#");
/// assert_eq!(transpose_chord("la", 3, false), "la");
/// ```
pub fn transpose_chord(token: &str, semitones: i32, is_chord_line: bool) -> String {
    let Some(chord) = ChordToken::parse(token) else {
        return token.to_string();
    };

    if !is_chord_line && chord.is_bare_word() {
        return token.to_string();
    }

    let spelling = chord.spelling();
    let Some(note) = Note::from_spelling(&spelling) else {
        tracing::trace!(token, "unresolved chord root left unchanged");
        return token.to_string();
    };

    let transposed = note.transpose(semitones);
    if transposed.name() == spelling && semitones.rem_euclid(12) != 0 {
        return token.to_string();
    }

    format!("{}{}", transposed.name(), chord.suffix)
}
