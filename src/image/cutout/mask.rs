use crate::image::cutout::luminance::LuminanceMap;

pub(super) const MASK_KEEP: u8 = 255;
pub(super) const MASK_DROP: u8 = 0;

/// Binary alpha mask: every value is either [`MASK_KEEP`] or [`MASK_DROP`].
pub(super) struct AlphaMask {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) values: Vec<u8>,
}

impl AlphaMask {
    /// Number of kept (opaque) pixels.
    pub(super) fn kept(&self) -> usize {
        self.values.iter().filter(|&&v| v == MASK_KEEP).count()
    }
}

/// Keep pixels whose luminance is strictly below `threshold`.
///
/// A luminance equal to the threshold is background.
pub(super) fn threshold_mask(luminance: &LuminanceMap, threshold: f32) -> AlphaMask {
    let values = luminance
        .values
        .iter()
        .map(|&lum| if lum < threshold { MASK_KEEP } else { MASK_DROP })
        .collect();

    AlphaMask {
        width: luminance.width,
        height: luminance.height,
        values,
    }
}
