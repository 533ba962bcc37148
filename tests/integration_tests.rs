//! Integration tests for the cancionero library
//!
//! Exercises the public API end to end: full-text transposition, sheets with
//! frontmatter and songbook records.

use cancionero::{
    category_by_letter, classify_line, format_offset, transpose_chord, transpose_full_lyrics,
    LineKind, SongSheet, Songbook, TransposeRange,
};

const PESCADOR: &str = "\
RE                    SIm
Tú has venido a la orilla,
MIm                   LA7
no has buscado ni a sabios ni a ricos,
RE                    SIm
tan sólo quieres que yo te siga.

    SOL       RE/FA#      MIm    LA7     RE
Señor, me has mirado a los ojos,
";

#[test]
fn test_transpose_song_down_a_tone() {
    let out = transpose_full_lyrics(PESCADOR, -2);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "DO                    LAm");
    assert_eq!(lines[1], "Tú has venido a la orilla,");
    assert_eq!(lines[2], "REm                   SOL7");
    assert_eq!(lines[3], "no has buscado ni a sabios ni a ricos,");
    assert_eq!(lines[7], "    FA       DO/MI      REm    SOL7     DO");
    assert_eq!(out.split('\n').count(), PESCADOR.split('\n').count());
}

#[test]
fn test_transpose_zero_is_identity() {
    assert_eq!(transpose_full_lyrics(PESCADOR, 0), PESCADOR);
}

#[test]
fn test_up_then_down_restores_sharps() {
    for n in -11..=11 {
        let back = transpose_full_lyrics(&transpose_full_lyrics(PESCADOR, n), -n);
        assert_eq!(back, PESCADOR, "offset {}", n);
    }
}

#[test]
fn test_lyric_lines_are_never_touched() {
    let out = transpose_full_lyrics(PESCADOR, 5);
    for (before, after) in PESCADOR.lines().zip(out.lines()) {
        if classify_line(before) == LineKind::Lyric {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_single_chord_entry_point() {
    assert_eq!(transpose_chord("FA#m7", 1, true), "SOLm7");
    assert_eq!(transpose_chord("SIb", 0, true), "LA#");
    assert_eq!(transpose_chord("sol", 2, false), "sol");
    assert_eq!(transpose_chord("sol", 2, true), "LA");
}

#[test]
fn test_sheet_pipeline() {
    let source = format!("---\ntitle: Pescador de hombres\ncode: E12\nkey: RE\n---\n{}", PESCADOR);
    let sheet = SongSheet::parse(&source).unwrap();
    let rendered = sheet.transposed(3).render().unwrap();
    assert!(rendered.contains("key: FA\n"));
    assert!(rendered.contains("title: Pescador de hombres\n"));
    assert!(rendered.ends_with(&transpose_full_lyrics(PESCADOR, 3)));
}

#[test]
fn test_songbook_pipeline() {
    let record = serde_json::json!({
        "id": "41",
        "code": "E12",
        "title": "Pescador de hombres",
        "author": "Cesáreo Gabaráin",
        "category": "E",
        "slug": "pescador-de-hombres-cesareo-gabarain",
        "hasAudio": true,
        "lyrics": PESCADOR,
    });
    let book = Songbook::from_jsonl(&format!("{}\n", record)).unwrap();
    let song = book.find("e12").unwrap();
    assert_eq!(book.by_category("e").count(), 1);
    assert_eq!(song.category(), category_by_letter("E"));
    assert_eq!(song.transposed(7).lyrics, transpose_full_lyrics(PESCADOR, 7));

    let rendered = song.to_sheet().transposed(7).render().unwrap();
    let reparsed = SongSheet::parse(&rendered).unwrap();
    assert_eq!(reparsed.metadata.unwrap().author.as_deref(), Some("Cesáreo Gabaráin"));
    assert_eq!(reparsed.lyrics, transpose_full_lyrics(PESCADOR, 7));
}

#[test]
fn test_stepper_drives_transposition() {
    let range = TransposeRange::default();
    let mut offset = 0;
    for _ in 0..10 {
        offset = range.step(offset, 1);
    }
    assert_eq!(offset, 6);
    assert_eq!(format_offset(offset), "+6");
    assert!(transpose_full_lyrics(PESCADOR, offset).starts_with("SOL#                    FAm\n"));
}
