//! Fixed parameters of the line-art conversion.
//!
//! Every value here is a literal: nothing is read from disk, the environment
//! or the command line. Tests build their own [`Settings`] to redirect paths.

use std::path::PathBuf;

use image::Rgba;

/// Luminance cut-off on a 0-255 scale. Pixels strictly darker are kept.
pub const DEFAULT_THRESHOLD: f32 = 140.0;

/// Backdrop used for the proof composite.
pub const PROOF_YELLOW: Rgba<u8> = Rgba([255, 230, 0, 255]);

pub const SOURCE_FILE: &str = "celebrate.png";
pub const CUTOUT_FILE: &str = "celebrate_final_clean.png";
pub const PROOF_FILE: &str = "celebrate_proof_preview.png";

/// Parameters for a single conversion run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Image to convert.
    pub source: PathBuf,
    /// Transparent black line-art output (PNG).
    pub cutout: PathBuf,
    /// Cutout composited over `background` (PNG).
    pub proof: PathBuf,
    /// Luminance threshold, compared with strict `<`.
    pub threshold: f32,
    /// Opaque fill of the proof canvas.
    pub background: Rgba<u8>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_FILE),
            cutout: PathBuf::from(CUTOUT_FILE),
            proof: PathBuf::from(PROOF_FILE),
            threshold: DEFAULT_THRESHOLD,
            background: PROOF_YELLOW,
        }
    }
}

impl Settings {
    /// Same parameters with all three paths placed under `dir`.
    pub fn rooted_at(dir: &std::path::Path) -> Self {
        let defaults = Self::default();
        Self {
            source: dir.join(&defaults.source),
            cutout: dir.join(&defaults.cutout),
            proof: dir.join(&defaults.proof),
            ..defaults
        }
    }
}
