//! Chord-line segmentation.
//!
//! A chord row is walked left to right. Wherever a root starts, the chord
//! token runs until the next root, a slash, whitespace or an opening bracket;
//! it is transposed on its own. Every other character is copied as is, so
//! alignment spaces, bars and brackets survive untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use super::chord::transpose_chord;

/// Root plus optional accidental at the start of the text.
static CHORD_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i-u:(?:DO|RE|MI|FA|SOL|LA|SI)[#b]?)").expect("chord head pattern compiles")
});

/// Root at the start of the text.
static ROOT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i-u:DO|RE|MI|FA|SOL|LA|SI)").expect("root pattern compiles"));

/// Transpose every chord token on a line already classified as chords.
pub fn transpose_chord_line(line: &str, semitones: i32) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut rest = line;

    loop {
        if let Some(len) = chord_token_len(rest) {
            out.push_str(&transpose_chord(&rest[..len], semitones, true));
            rest = &rest[len..];
            continue;
        }

        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => {
                out.push(c);
                rest = chars.as_str();
            }
            None => break,
        }
    }

    out
}

/// Byte length of the chord token at the start of `text`, if one starts there.
fn chord_token_len(text: &str) -> Option<usize> {
    let head = CHORD_HEAD.find(text)?.end();
    let end = text[head..]
        .char_indices()
        .find(|&(i, c)| ends_chord(c) || ROOT_START.is_match(&text[head + i..]))
        .map_or(text.len(), |(i, _)| head + i);
    Some(end)
}

fn ends_chord(c: char) -> bool {
    c == '/' || c == '[' || c == '(' || c.is_whitespace()
}
