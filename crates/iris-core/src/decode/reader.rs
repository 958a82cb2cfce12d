//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, ExifOrientation};

/// Decode an uploaded image, applying EXIF orientation correction.
///
/// The format is guessed from the content (JPEG and PNG are enabled). The
/// orientation is applied so crop coordinates address the image the way it
/// is displayed.
///
/// # Errors
///
/// - `DecodeError::EmptyInput` if `bytes` is empty
/// - `DecodeError::InvalidFormat` if the format is not recognized
/// - `DecodeError::CorruptedFile` if the data cannot be decoded
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if orientation.swaps_dimensions() {
        tracing::debug!(?orientation, "swapping image dimensions for EXIF orientation");
    }

    let rgb_img = apply_orientation(img, orientation).into_rgb8();
    Ok(DecodedImage::from_rgb_image(rgb_img))
}

/// Extract the EXIF orientation from image bytes.
///
/// Returns `ExifOrientation::Normal` if no EXIF data is found or the
/// orientation cannot be determined.
pub fn read_orientation(bytes: &[u8]) -> ExifOrientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(ExifOrientation::from)
            .unwrap_or_default(),
        Err(_) => ExifOrientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: ExifOrientation) -> DynamicImage {
    match orientation {
        ExifOrientation::Normal => img,
        ExifOrientation::FlipHorizontal => img.fliph(),
        ExifOrientation::Rotate180 => img.rotate180(),
        ExifOrientation::FlipVertical => img.flipv(),
        ExifOrientation::Transpose => img.rotate90().fliph(),
        ExifOrientation::Rotate90CW => img.rotate90(),
        ExifOrientation::Transverse => img.rotate270().fliph(),
        ExifOrientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_png() {
        let decoded = decode_image(&png_bytes(40, 30)).unwrap();
        assert_eq!(decoded.width, 40);
        assert_eq!(decoded.height, 30);
        // Pixel (3, 2) keeps its channels
        let idx = (2 * 40 + 3) * 3;
        assert_eq!(&decoded.pixels[idx..idx + 3], &[3, 2, 7]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode_image(&[]), Err(DecodeError::EmptyInput)));
    }

    #[test]
    fn test_decode_unknown_format() {
        let result = decode_image(b"definitely not an image");
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(40, 30);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_no_exif_is_normal() {
        assert_eq!(read_orientation(&png_bytes(4, 4)), ExifOrientation::Normal);
        assert_eq!(read_orientation(b"garbage"), ExifOrientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotation_swaps_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(20, 10));
        let rotated = apply_orientation(img, ExifOrientation::Rotate90CW);
        assert_eq!(rotated.width(), 10);
        assert_eq!(rotated.height(), 20);
    }

    #[test]
    fn test_apply_orientation_flip_keeps_dimensions() {
        let img = RgbImage::from_fn(2, 1, |x, _| Rgb([x as u8 * 100, 0, 0]));
        let flipped = apply_orientation(DynamicImage::ImageRgb8(img), ExifOrientation::FlipHorizontal)
            .into_rgb8();
        assert_eq!(flipped.dimensions(), (2, 1));
        assert_eq!(flipped.get_pixel(0, 0), &Rgb([100, 0, 0]));
    }
}
