use serde::Serialize;
use wasm_bindgen::prelude::*;

use cancionero::{CancioneroError, Song, SongSheet, Songbook, TransposeRange};

#[derive(Serialize)]
struct TransposeError {
    message: String,
    line: Option<usize>,
}

fn to_transpose_error(e: CancioneroError) -> TransposeError {
    match e {
        CancioneroError::SongbookError { line, message } => TransposeError {
            message,
            line: Some(line),
        },
        other => TransposeError {
            message: other.to_string(),
            line: None,
        },
    }
}

fn error_json(e: CancioneroError) -> String {
    serde_json::to_string(&to_transpose_error(e))
        .unwrap_or_else(|_| r#"{"message":"unknown error"}"#.to_string())
}

/// Transpose a whole lyrics text
#[wasm_bindgen]
pub fn transpose_full_lyrics(lyrics: &str, semitones: i32) -> String {
    cancionero::transpose_full_lyrics(lyrics, semitones)
}

/// Transpose a single chord, e.g. for a "new key" preview
#[wasm_bindgen]
pub fn transpose_chord(chord: &str, semitones: i32, is_chord_line: bool) -> String {
    cancionero::transpose_chord(chord, semitones, is_chord_line)
}

/// "chord" or "lyric"
#[wasm_bindgen]
pub fn classify_line(line: &str) -> String {
    cancionero::classify_line(line).as_str().to_string()
}

/// Transpose a sheet with YAML frontmatter; errors are JSON `{ message, line }`
#[wasm_bindgen]
pub fn transpose_sheet(source: &str, semitones: i32) -> Result<String, JsValue> {
    sheet_to_transposed(source, semitones).map_err(|e| JsValue::from_str(&error_json(e)))
}

fn sheet_to_transposed(source: &str, semitones: i32) -> Result<String, CancioneroError> {
    SongSheet::parse(source)?.transposed(semitones).render()
}

/// Transpose every record of a JSON Lines songbook, returning JSON Lines
#[wasm_bindgen]
pub fn transpose_songbook(jsonl: &str, semitones: i32) -> Result<String, JsValue> {
    songbook_to_transposed(jsonl, semitones).map_err(|e| JsValue::from_str(&error_json(e)))
}

fn songbook_to_transposed(jsonl: &str, semitones: i32) -> Result<String, CancioneroError> {
    let songbook = Songbook::from_jsonl(jsonl)?;
    let lines = songbook
        .songs()
        .iter()
        .map(|song| song_to_json(&song.transposed(semitones)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

fn song_to_json(song: &Song) -> Result<String, CancioneroError> {
    serde_json::to_string(song).map_err(|e| CancioneroError::SerializeError(e.to_string()))
}

/// One press of the stepper buttons, kept within `min..=max`
#[wasm_bindgen]
pub fn step_transpose(value: i32, delta: i32, min: i32, max: i32) -> i32 {
    TransposeRange::new(min, max).step(value, delta)
}

#[wasm_bindgen]
pub fn format_offset(semitones: i32) -> String {
    cancionero::format_offset(semitones)
}
