//! Pitch classes in Spanish solfège, spelled with sharps.

use std::fmt;

/// One of the twelve pitch classes, in ascending order from DO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    Do,
    DoSharp,
    Re,
    ReSharp,
    Mi,
    Fa,
    FaSharp,
    Sol,
    SolSharp,
    La,
    LaSharp,
    Si,
}

/// Flat spellings that resolve to a canonical sharp.
/// DOB and FAB are deliberately absent and stay unresolved.
pub const FLAT_ALIASES: [(&str, Note); 5] = [
    ("REB", Note::DoSharp),
    ("MIB", Note::ReSharp),
    ("SOLB", Note::FaSharp),
    ("LAB", Note::SolSharp),
    ("SIB", Note::LaSharp),
];

impl Note {
    /// All pitch classes, indexed by semitones above DO.
    pub const ALL: [Note; 12] = [
        Note::Do,
        Note::DoSharp,
        Note::Re,
        Note::ReSharp,
        Note::Mi,
        Note::Fa,
        Note::FaSharp,
        Note::Sol,
        Note::SolSharp,
        Note::La,
        Note::LaSharp,
        Note::Si,
    ];

    /// Canonical spelling, e.g. `"FA#"`.
    pub fn name(self) -> &'static str {
        match self {
            Note::Do => "DO",
            Note::DoSharp => "DO#",
            Note::Re => "RE",
            Note::ReSharp => "RE#",
            Note::Mi => "MI",
            Note::Fa => "FA",
            Note::FaSharp => "FA#",
            Note::Sol => "SOL",
            Note::SolSharp => "SOL#",
            Note::La => "LA",
            Note::LaSharp => "LA#",
            Note::Si => "SI",
        }
    }

    /// Semitones above DO (0..12).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Note {
        Self::ALL[index % 12]
    }

    /// Resolve an uppercase root+accidental spelling such as `"SOL#"` or
    /// `"MIB"`. Returns `None` for anything outside the twelve canonical
    /// names and the flat alias table.
    pub fn from_spelling(spelling: &str) -> Option<Note> {
        if let Some((_, note)) = FLAT_ALIASES.iter().find(|(flat, _)| *flat == spelling) {
            return Some(*note);
        }
        Self::ALL.iter().copied().find(|note| note.name() == spelling)
    }

    /// Move by any number of semitones, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> Note {
        let shift = semitones.rem_euclid(12) as usize;
        Self::from_index(self.index() + shift)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
