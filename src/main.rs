//! lineart - turn a sketch into transparent black line art and a proof image.

mod config;
mod error;
mod image;
mod logger;
mod pipeline;

use std::process::ExitCode;

use anyhow::Result;
use config::Settings;

fn main() -> ExitCode {
    logger::set_verbose(cfg!(debug_assertions));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Convert the fixed source and report both artifacts once they are on disk.
fn run() -> Result<()> {
    let settings = Settings::default();
    let artifacts = pipeline::run(&settings).map_err(|e| {
        let stage = if e.is_output() { "write" } else { "read" };
        let path = e.path().display().to_string();
        anyhow::Error::new(e).context(format!("failed to {stage} `{path}`"))
    })?;

    logger::saved("Clean PNG", &artifacts.cutout);
    logger::saved("Proof image", &artifacts.proof);
    Ok(())
}
