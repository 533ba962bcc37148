//! Lyric lines are left alone unless the whole line is a single chord,
//! optionally wrapped in `[...]` or `(...)`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::chord::transpose_chord;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Transpose a line classified as lyrics.
///
/// Whitespace is reproduced exactly. A word is only a candidate when it is
/// the entire trimmed line, so "la" in "y la fe que tengo" never moves while
/// a line holding just `[RE]` does. Candidates go through the word guard of
/// [`transpose_chord`](super::transpose_chord): a bare lowercase "la" stays.
pub fn transpose_lyric_line(line: &str, semitones: i32) -> String {
    let trimmed = line.trim();
    let mut out = String::with_capacity(line.len());
    let mut word_start = 0;

    for gap in WHITESPACE_RUN.find_iter(line) {
        out.push_str(&transpose_word(&line[word_start..gap.start()], trimmed, semitones));
        out.push_str(gap.as_str());
        word_start = gap.end();
    }
    out.push_str(&transpose_word(&line[word_start..], trimmed, semitones));

    out
}

fn transpose_word<'a>(word: &'a str, trimmed_line: &str, semitones: i32) -> Cow<'a, str> {
    if word.is_empty() || word != trimmed_line {
        return Cow::Borrowed(word);
    }

    let (open, core, close) = split_delimiters(word);
    let transposed = transpose_chord(core, semitones, false);
    if transposed == core {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("{open}{transposed}{close}"))
    }
}

/// Peel one layer of `[...]` or `(...)` off a word longer than two characters.
fn split_delimiters(word: &str) -> (&str, &str, &str) {
    let wrapped = (word.starts_with('[') && word.ends_with(']'))
        || (word.starts_with('(') && word.ends_with(')'));
    if wrapped && word.len() > 2 {
        let last = word.len() - 1;
        (&word[..1], &word[1..last], &word[last..])
    } else {
        ("", word, "")
    }
}
