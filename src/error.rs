//! Failure taxonomy for the conversion.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ============================================================================
// LineArtError
// ============================================================================

/// Errors surfaced by loading, encoding or persisting images.
///
/// None of these are recovered from; the run stops at the first one.
#[derive(Debug, Error)]
pub enum LineArtError {
    #[error("source image `{0}` does not exist")]
    NotFound(PathBuf),

    #[error("cannot open source image `{0}`")]
    Open(PathBuf, #[source] io::Error),

    #[error("cannot decode `{0}` as an image")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("cannot create output file `{0}`")]
    Create(PathBuf, #[source] io::Error),

    #[error("cannot encode PNG into `{0}`")]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("cannot flush output file `{0}`")]
    Flush(PathBuf, #[source] io::Error),
}

impl LineArtError {
    /// The source image was missing or unreadable.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Open(..) | Self::Decode(..))
    }

    /// An output artifact could not be written.
    pub fn is_output(&self) -> bool {
        !self.is_input()
    }

    /// Path the failing operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path)
            | Self::Open(path, _)
            | Self::Decode(path, _)
            | Self::Create(path, _)
            | Self::Encode(path, _)
            | Self::Flush(path, _) => path,
        }
    }
}
