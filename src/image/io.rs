//! Image file I/O.
//!
//! Loading reports a missing source separately from an undecodable one.
//! Saving always writes PNG and returns only after the file is flushed,
//! synced and closed.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use crate::error::LineArtError;

/// Decode an image file, guessing its format from the content.
pub fn load_image(path: &Path) -> Result<DynamicImage, LineArtError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LineArtError::NotFound(path.to_path_buf()),
        _ => LineArtError::Open(path.to_path_buf(), e),
    })?;

    ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| LineArtError::Open(path.to_path_buf(), e))?
        .decode()
        .map_err(|e| LineArtError::Decode(path.to_path_buf(), e))
}

/// Encode `img` as PNG at `path`.
///
/// Parent directories are not created: a missing directory is a write failure.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), LineArtError> {
    let file = File::create(path).map_err(|e| LineArtError::Create(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    img.write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| LineArtError::Encode(path.to_path_buf(), e))?;

    let file = writer
        .into_inner()
        .map_err(|e| LineArtError::Flush(path.to_path_buf(), e.into_error()))?;
    file.sync_all()
        .map_err(|e| LineArtError::Flush(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, LineArtError::NotFound(_)));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, LineArtError::Decode(..)));
        assert!(err.is_input());
    }

    #[test]
    fn test_png_preserves_binary_alpha() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alpha.png");

        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        save_png(&img, &path).unwrap();

        let back = load_image(&path).unwrap().to_rgba8();
        assert_eq!(back, img);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let err = save_png(&RgbaImage::new(1, 1), &path).unwrap_err();
        assert!(matches!(err, LineArtError::Create(..)));
        assert!(!path.exists());
    }

    #[test]
    fn test_format_is_guessed_from_content() {
        let dir = TempDir::new().unwrap();
        // PNG bytes behind a misleading extension
        let path = dir.path().join("source.jpg");
        save_png(&RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255])), &path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
    }
}
