use image::RgbaImage;

const MAX: f32 = 255.0;

/// Porter-Duff "over": place `layer` on top of `canvas`, in place.
///
/// Both images use straight (non-premultiplied) alpha. Over an opaque canvas
/// this reduces to `c = fg * a + bg * (1 - a)` with an opaque result.
///
/// # Panics
///
/// Panics if the two images differ in size.
pub fn composite_over(canvas: &mut RgbaImage, layer: &RgbaImage) {
    assert_eq!(
        canvas.dimensions(),
        layer.dimensions(),
        "composite size mismatch"
    );

    for (dst, src) in canvas.chunks_exact_mut(4).zip(layer.as_raw().chunks_exact(4)) {
        blend_pixel(dst, src);
    }
}

#[inline]
fn blend_pixel(dst: &mut [u8], src: &[u8]) {
    // Exact fast paths for the binary-alpha case
    match src[3] {
        0 => return,
        255 => {
            dst.copy_from_slice(src);
            return;
        }
        _ => {}
    }

    let fa = f32::from(src[3]) / MAX;
    let ba = f32::from(dst[3]) / MAX;
    let under = ba * (1.0 - fa);
    let out_a = fa + under;
    if out_a <= 0.0 {
        dst.fill(0);
        return;
    }

    for c in 0..3 {
        let value = (f32::from(src[c]) * fa + f32::from(dst[c]) * under) / out_a;
        dst[c] = value.round().clamp(0.0, MAX) as u8;
    }
    dst[3] = (out_a * MAX).round().clamp(0.0, MAX) as u8;
}
