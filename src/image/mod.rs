//! Image processing utilities.
//!
//! # Modules
//!
//! - [`io`]: decoding sources and persisting PNG artifacts
//! - [`cutout`]: luminance-threshold line extraction
//! - [`proof`]: compositing a cutout over a solid backdrop

pub mod cutout;
pub mod io;
pub mod proof;
