//! Image Loader.
//!
//! This module reads instruction and data images from disk into word
//! vectors for the simulator. It performs:
//! 1. **Hex text loading:** One 32-bit hexadecimal word per line, with `#`
//!    comments and blank lines ignored (`.hex`/`.txt` extensions).
//! 2. **Raw binary loading:** Little-endian 32-bit words (any other
//!    extension).

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::common::word::Word;

/// Errors raised while reading or parsing an image file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("could not read image '{path}': {source}")]
    Io {
        /// Path of the offending file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of a hex image did not parse as a 32-bit word.
    #[error("{path}:{line}: invalid word '{text}'")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// 1-based line number of the offending line.
        line: usize,
        /// The text that failed to parse.
        text: String,
    },

    /// A raw image's length is not a whole number of words.
    #[error("raw image '{path}' length {len} is not a multiple of 4")]
    RaggedImage {
        /// Path of the offending file.
        path: String,
        /// Byte length of the file.
        len: usize,
    },

    /// An image holds more words than the configured memory.
    #[error("image has {words} words but memory holds only {capacity}")]
    ImageTooLarge {
        /// Words in the image.
        words: usize,
        /// Configured memory capacity in words.
        capacity: usize,
    },
}

/// Loads an image file into a word vector.
///
/// Files ending in `.hex` or `.txt` are parsed as hexadecimal text, one
/// word per line; anything else is read as raw little-endian words.
///
/// # Errors
///
/// Returns a [`LoaderError`] describing the I/O or parse failure.
pub fn load_image(path: &Path) -> Result<Vec<Word>, LoaderError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let words = if matches!(ext, "hex" | "txt") {
        parse_hex_image(path)?
    } else {
        parse_raw_image(path)?
    };
    debug!(path = %path.display(), words = words.len(), "loaded image");
    Ok(words)
}

/// Parses a hexadecimal text image.
///
/// Each line carries one word, with or without a `0x` prefix. Everything
/// after a `#` is a comment; blank lines are skipped.
fn parse_hex_image(path: &Path) -> Result<Vec<Word>, LoaderError> {
    let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut words = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let digits = line.strip_prefix("0x").unwrap_or(line);
        let word = Word::from_str_radix(digits, 16).map_err(|_| LoaderError::Parse {
            path: path.display().to_string(),
            line: idx + 1,
            text: line.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads a raw little-endian word image.
fn parse_raw_image(path: &Path) -> Result<Vec<Word>, LoaderError> {
    let bytes = fs::read(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if bytes.len() % 4 != 0 {
        return Err(LoaderError::RaggedImage {
            path: path.display().to_string(),
            len: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| Word::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
