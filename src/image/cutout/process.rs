use image::{DynamicImage, RgbaImage};

use crate::image::cutout::luminance::luminance_map;
use crate::image::cutout::mask::{AlphaMask, threshold_mask};

/// Turn an image into binary-alpha black line art.
///
/// The image is normalized to RGBA first (sources without alpha become fully
/// opaque). Every pixel ends up `(0, 0, 0, 255)` if its luminance is below
/// `threshold`, otherwise `(0, 0, 0, 0)`. Dimensions are unchanged.
pub fn extract_cutout(img: DynamicImage, threshold: f32) -> RgbaImage {
    let mut output = img.into_rgba8();
    let (width, height) = output.dimensions();

    let mask = threshold_mask(&luminance_map(&output), threshold);
    crate::debug!(
        "cutout";
        "{}x{}: kept {} of {} pixels",
        width,
        height,
        mask.kept(),
        mask.values.len()
    );
    apply_mask(&mut output, &mask);

    output
}

/// Paint every pixel black and install `mask` as the alpha channel.
///
/// RGB is cleared on dropped pixels too, so transparent output is canonical.
fn apply_mask(output: &mut RgbaImage, mask: &AlphaMask) {
    debug_assert_eq!(output.width(), mask.width);
    debug_assert_eq!(output.height(), mask.height);

    for (pixel, &alpha) in output.chunks_exact_mut(4).zip(mask.values.iter()) {
        pixel[0] = 0;
        pixel[1] = 0;
        pixel[2] = 0;
        pixel[3] = alpha;
    }
}
