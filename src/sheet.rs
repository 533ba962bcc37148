//! # Song Sheets
//!
//! A song sheet is a lyrics text with an optional YAML frontmatter block on
//! top, delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Pescador de hombres
//! code: E12
//! key: RE
//! ---
//! RE            SIm
//! Tú has venido a la orilla
//! ```
//!
//! Everything after the closing marker is the lyrics body, kept byte for
//! byte. Transposing a sheet moves the body and the `key` field together.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CancioneroError;
use crate::transpose::{transpose_chord, transpose_full_lyrics};

const MARKER: &str = "---";

/// Frontmatter fields. Keys not listed here are kept in `extra` so that a
/// rendered sheet does not lose them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SheetMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Key of the song as a chord spelling, e.g. `RE` or `LAm`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SongSheet {
    pub metadata: Option<SheetMetadata>,
    pub lyrics: String,
}

impl SongSheet {
    /// Split a sheet into frontmatter and lyrics.
    ///
    /// # Errors
    /// Returns [`CancioneroError::MetadataError`] when the frontmatter is not
    /// valid YAML for [`SheetMetadata`].
    ///
    /// # Example
    /// ```rust
    /// use cancionero::SongSheet;
    ///
    /// let sheet = SongSheet::parse("---\ntitle: Alabaré\nkey: DO\n---\nDO   FA\n")?;
    /// let metadata = sheet.metadata.unwrap();
    /// assert_eq!(metadata.title.as_deref(), Some("Alabaré"));
    /// assert_eq!(sheet.lyrics, "DO   FA\n");
    /// # Ok::<(), cancionero::CancioneroError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self, CancioneroError> {
        let Some((frontmatter, lyrics)) = split_frontmatter(source) else {
            return Ok(SongSheet {
                metadata: None,
                lyrics: source.to_string(),
            });
        };

        let metadata = if frontmatter.trim().is_empty() {
            SheetMetadata::default()
        } else {
            serde_yaml::from_str(frontmatter)
                .map_err(|e| CancioneroError::MetadataError(e.to_string()))?
        };

        Ok(SongSheet {
            metadata: Some(metadata),
            lyrics: lyrics.to_string(),
        })
    }

    /// Transpose the lyrics and the `key` field.
    pub fn transposed(&self, semitones: i32) -> SongSheet {
        if semitones == 0 {
            return self.clone();
        }

        let metadata = self.metadata.as_ref().map(|metadata| SheetMetadata {
            key: metadata.key.as_deref().map(|key| transpose_chord(key.trim(), semitones, true)),
            ..metadata.clone()
        });

        SongSheet {
            metadata,
            lyrics: transpose_full_lyrics(&self.lyrics, semitones),
        }
    }

    /// Write the sheet back out, frontmatter first.
    pub fn render(&self) -> Result<String, CancioneroError> {
        let Some(metadata) = &self.metadata else {
            return Ok(self.lyrics.clone());
        };

        let yaml = serde_yaml::to_string(metadata)
            .map_err(|e| CancioneroError::MetadataError(e.to_string()))?;
        Ok(format!("{MARKER}\n{yaml}{MARKER}\n{}", self.lyrics))
    }
}

/// Frontmatter must open on the very first line. Returns the YAML between
/// the markers and the body after the closing one.
fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let (first, rest) = source.split_once('\n')?;
    if first.trim() != MARKER {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim() == MARKER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_without_frontmatter() {
        let sheet = SongSheet::parse("DO  SOL\nletra\n").unwrap();
        assert_eq!(sheet.metadata, None);
        assert_eq!(sheet.lyrics, "DO  SOL\nletra\n");
        assert_eq!(sheet.render().unwrap(), "DO  SOL\nletra\n");
    }

    #[test]
    fn test_with_frontmatter() {
        let source = r#"---
title: Pescador de hombres
author: Cesáreo Gabaráin
code: E12
category: E
key: RE
---
RE            SIm
Tú has venido a la orilla"#;
        let sheet = SongSheet::parse(source).unwrap();
        let metadata = sheet.metadata.unwrap();
        assert_eq!(metadata.title, Some("Pescador de hombres".to_string()));
        assert_eq!(metadata.author, Some("Cesáreo Gabaráin".to_string()));
        assert_eq!(metadata.code, Some("E12".to_string()));
        assert_eq!(metadata.category, Some("E".to_string()));
        assert_eq!(metadata.key, Some("RE".to_string()));
        assert_eq!(sheet.lyrics, "RE            SIm\nTú has venido a la orilla");
    }

    #[test]
    fn test_unclosed_frontmatter_is_lyrics() {
        let source = "---\ntitle: Sin cierre\nDO  FA\n";
        let sheet = SongSheet::parse(source).unwrap();
        assert_eq!(sheet.metadata, None);
        assert_eq!(sheet.lyrics, source);
    }

    #[test]
    fn test_marker_later_in_text_is_lyrics() {
        let source = "DO  FA\n---\nestribillo\n---\n";
        let sheet = SongSheet::parse(source).unwrap();
        assert_eq!(sheet.metadata, None);
        assert_eq!(sheet.lyrics, source);
    }

    #[test]
    fn test_empty_frontmatter() {
        let sheet = SongSheet::parse("---\n---\nDO\n").unwrap();
        assert_eq!(sheet.metadata, Some(SheetMetadata::default()));
        assert_eq!(sheet.lyrics, "DO\n");
    }

    #[test]
    fn test_crlf_markers() {
        let sheet = SongSheet::parse("---\r\ntitle: Gloria\r\n---\r\nDO\r\n").unwrap();
        assert_eq!(sheet.metadata.unwrap().title, Some("Gloria".to_string()));
        assert_eq!(sheet.lyrics, "DO\r\n");
    }

    #[test]
    fn test_invalid_yaml() {
        let result = SongSheet::parse("---\ntitle: [sin cerrar\n---\nDO\n");
        assert!(matches!(result, Err(CancioneroError::MetadataError(_))));
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let sheet = SongSheet::parse("---\ntitle: Santo\ncapo: 2\n---\nDO\n").unwrap();
        let metadata = sheet.metadata.as_ref().unwrap();
        assert_eq!(metadata.extra.get("capo").and_then(|v| v.as_u64()), Some(2));
        let rendered = sheet.render().unwrap();
        assert!(rendered.contains("capo: 2\n"));
        assert!(rendered.ends_with("---\nDO\n"));
    }

    #[test]
    fn test_transposed_moves_key_and_lyrics() {
        let source = "---\ntitle: Aleluya\nkey: SIb\n---\nSIb     FA\nAleluya\n";
        let sheet = SongSheet::parse(source).unwrap();
        let up = sheet.transposed(2);
        assert_eq!(up.metadata.as_ref().unwrap().key, Some("DO".to_string()));
        assert_eq!(up.metadata.as_ref().unwrap().title, Some("Aleluya".to_string()));
        assert_eq!(up.lyrics, "DO     SOL\nAleluya\n");
    }

    #[test]
    fn test_transposed_by_zero_is_unchanged() {
        let sheet = SongSheet::parse("---\nkey: SIb\n---\nSIb\n").unwrap();
        assert_eq!(sheet.transposed(0), sheet);
    }

    #[test]
    fn test_render_round_trip() {
        let sheet = SongSheet::parse("---\ntitle: Kyrie\nkey: LAm\n---\nLAm  MI\n").unwrap();
        let rendered = sheet.transposed(-2).render().unwrap();
        assert!(rendered.starts_with("---\n"));
        assert!(rendered.contains("title: Kyrie\n"));
        assert!(rendered.contains("key: SOLm\n"));
        assert!(rendered.ends_with("---\nSOLm  RE\n"));
        assert_eq!(SongSheet::parse(&rendered).unwrap(), sheet.transposed(-2));
    }
}
