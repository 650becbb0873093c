use image::RgbaImage;

/// Per-pixel brightness, row-major, one value per pixel.
pub(super) struct LuminanceMap {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) values: Vec<f32>,
}

/// Unweighted mean of the R, G and B samples. Alpha is ignored.
#[inline]
pub(super) fn mean_rgb(pixel: &[u8]) -> f32 {
    (f32::from(pixel[0]) + f32::from(pixel[1]) + f32::from(pixel[2])) / 3.0
}

/// Compute the luminance of every pixel.
pub(super) fn luminance_map(img: &RgbaImage) -> LuminanceMap {
    let (width, height) = img.dimensions();
    let values = img.as_raw().chunks_exact(4).map(mean_rgb).collect();

    LuminanceMap {
        width,
        height,
        values,
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn test_mean_ignores_alpha() {
        assert_eq!(mean_rgb(&[30, 60, 90, 0]), 60.0);
        assert_eq!(mean_rgb(&[30, 60, 90, 255]), 60.0);
    }

    #[test]
    fn test_mean_keeps_fraction() {
        let lum = mean_rgb(&[139, 140, 140, 255]);
        assert!(lum > 139.6 && lum < 139.7);
    }

    #[test]
    fn test_map_is_row_major() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 0, Rgba([3, 3, 3, 255]));
        img.put_pixel(0, 1, Rgba([6, 6, 6, 255]));

        let map = luminance_map(&img);
        assert_eq!((map.width, map.height), (2, 2));
        assert_eq!(map.values, vec![0.0, 3.0, 6.0, 0.0]);
    }
}
