//! Extract black line art from an image.
//!
//! Pixels darker than a luminance threshold become opaque black; everything
//! else becomes transparent black. The mask only looks at color channels, so
//! existing transparency in the source is ignored.

mod luminance;
mod mask;
mod process;

pub use process::extract_cutout;
