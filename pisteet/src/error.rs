//! Error types for outline extraction.

use core::fmt;
use std::path::PathBuf;

use skrifa::{outline::DrawError, raw::ReadError, GlyphId};

/// Errors that may occur when opening a font or extracting an outline.
///
/// A character that is missing from the font is not an error; see
/// [`GlyphFont::extract`](crate::GlyphFont::extract).
#[derive(Debug)]
pub enum Error {
    /// The font file could not be opened or mapped.
    Io(PathBuf, std::io::Error),
    /// The font data is malformed.
    Read(ReadError),
    /// The glyph outline could not be loaded.
    Draw(DrawError),
    /// The glyph has no entry in the horizontal metrics.
    MissingAdvance(GlyphId),
}

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl From<DrawError> for Error {
    fn from(e: DrawError) -> Self {
        Self::Draw(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "failed to open {}: {e}", path.display()),
            Self::Read(e) => write!(f, "{e}"),
            Self::Draw(e) => write!(f, "{e}"),
            Self::MissingAdvance(gid) => {
                write!(f, "Glyph {gid} has no advance width in the given font")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Read(e) => Some(e),
            Self::Draw(e) => Some(e),
            Self::MissingAdvance(_) => None,
        }
    }
}
