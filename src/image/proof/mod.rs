//! Proof rendering: show a cutout over a contrasting solid color.
//!
//! Transparent regions reveal the backdrop, so leftover background in a
//! cutout is easy to spot.

mod composite;

use image::{Rgba, RgbaImage};

pub use composite::composite_over;

/// Opaque canvas of the given size filled with `color`.
pub fn background_canvas(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// Composite `cutout` over a canvas of `background` with the same dimensions.
pub fn render_proof(cutout: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let (width, height) = cutout.dimensions();
    let mut canvas = background_canvas(width, height, background);
    composite_over(&mut canvas, cutout);
    crate::debug!("proof"; "{}x{} over {:?}", width, height, background.0);
    canvas
}
