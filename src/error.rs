//! # Error Types
//!
//! Transposition itself never fails: unknown tokens are passed through. The
//! errors here come from the layers around it, reading sheet frontmatter and
//! loading songbooks.
//!
//! ## Usage
//! ```rust
//! use cancionero::{CancioneroError, SongSheet};
//!
//! match SongSheet::parse("---\ntitle: [unclosed\n---\nDO\n") {
//!     Ok(sheet) => println!("{}", sheet.lyrics),
//!     Err(CancioneroError::MetadataError(message)) => eprintln!("Bad frontmatter: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CancioneroError {
    /// Invalid YAML frontmatter in a song sheet.
    ///
    /// # Example
    /// ```
    /// # use cancionero::CancioneroError;
    /// let err = CancioneroError::MetadataError("key must be a string".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: key must be a string");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// A songbook record that could not be decoded.
    ///
    /// `line` is 1-based and counts blank lines too, so it matches what an
    /// editor shows.
    ///
    /// # Example
    /// ```
    /// # use cancionero::CancioneroError;
    /// let err = CancioneroError::SongbookError {
    ///     line: 12,
    ///     message: "missing field `title`".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Songbook error at line 12: missing field `title`");
    /// ```
    #[error("Songbook error at line {line}: {message}")]
    SongbookError { line: usize, message: String },

    /// A song that could not be written back out as a JSON record. There is
    /// no source line to point at.
    ///
    /// # Example
    /// ```
    /// # use cancionero::CancioneroError;
    /// let err = CancioneroError::SerializeError("number out of range".to_string());
    /// assert_eq!(err.to_string(), "Could not serialize song: number out of range");
    /// ```
    #[error("Could not serialize song: {0}")]
    SerializeError(String),

    /// No song matched the requested id, code or slug.
    #[error("Song not found: {0}")]
    SongNotFound(String),
}
