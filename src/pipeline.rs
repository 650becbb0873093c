//! One full conversion: source image to cutout and proof artifacts.
//!
//! The steps run strictly in order. A failure stops the run, so a failed
//! cutout write never produces a proof, while a failed proof write leaves the
//! already written cutout in place.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::LineArtError;
use crate::image::cutout::extract_cutout;
use crate::image::io::{load_image, save_png};
use crate::image::proof::render_proof;

/// Paths of the two files written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub cutout: PathBuf,
    pub proof: PathBuf,
}

/// Convert `settings.source` and write both artifacts.
///
/// Both files are flushed and closed when this returns `Ok`.
pub fn run(settings: &Settings) -> Result<Artifacts, LineArtError> {
    let source = load_image(&settings.source)?;
    crate::debug!(
        "load";
        "{} ({}x{}, {:?})",
        settings.source.display(),
        source.width(),
        source.height(),
        source.color()
    );

    let cutout = extract_cutout(source, settings.threshold);
    save_png(&cutout, &settings.cutout)?;

    let proof = render_proof(&cutout, settings.background);
    save_png(&proof, &settings.proof)?;

    Ok(Artifacts {
        cutout: settings.cutout.clone(),
        proof: settings.proof.clone(),
    })
}
