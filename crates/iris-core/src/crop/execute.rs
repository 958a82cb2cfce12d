//! Placing a resolved crop inside an image and copying the pixels out.
//!
//! # Coordinate System
//!
//! - (0, 0) is the top-left pixel
//! - A crop of width `w` starting at `x1` ends at the inclusive column `x1 + w - 1`
//! - The same holds vertically

use serde::{Deserialize, Serialize};

use super::error::CropError;
use super::resolve::CroppingConfiguration;
use crate::decode::DecodedImage;
use crate::geometry::CropRectangle;

/// How the far edge of a [`CropRectangle`] is treated when copying pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Copy every pixel in the rectangle, both edges included.
    /// Output is exactly the resolved width x height.
    #[default]
    Inclusive,
    /// Use `x2`/`y2` as exclusive ends, dropping the last column and row.
    /// Matches output produced by earlier versions of the service.
    Legacy,
}

/// Compute the inclusive pixel rectangle for a crop and check it fits.
///
/// # Errors
///
/// - [`CropError::OriginOutOfBounds`] if the top-left pixel is outside the image
/// - [`CropError::CropExceedsBounds`] if the bottom-right pixel is outside the image
///
/// An image with a zero dimension rejects every origin.
pub fn crop_rectangle(
    image_width: u32,
    image_height: u32,
    config: &CroppingConfiguration,
) -> Result<CropRectangle, CropError> {
    let (x, y) = config.origin();
    let x1 = u64::from(x);
    let y1 = u64::from(y);
    let x2 = x1 + u64::from(config.width()) - 1;
    let y2 = y1 + u64::from(config.height()) - 1;

    // Compare against the exclusive size instead of `size - 1` so empty images
    // don't underflow.
    let max_x = u64::from(image_width);
    let max_y = u64::from(image_height);

    if x1 >= max_x || y1 >= max_y {
        return Err(CropError::OriginOutOfBounds {
            x: x1,
            y: y1,
            image_width,
            image_height,
        });
    }

    if x2 >= max_x || y2 >= max_y {
        return Err(CropError::CropExceedsBounds {
            x: x2,
            y: y2,
            image_width,
            image_height,
        });
    }

    // Both corners are below u32-sized image dimensions here.
    Ok(CropRectangle {
        x1: x,
        y1: y,
        x2: x2 as u32,
        y2: y2 as u32,
    })
}

/// Copy the pixels covered by `rect` out of `image`.
///
/// `rect` must lie inside the image, which [`crop_rectangle`] guarantees.
pub fn extract_region(image: &DecodedImage, rect: &CropRectangle, edge: EdgeMode) -> DecodedImage {
    let (out_width, out_height) = match edge {
        EdgeMode::Inclusive => (rect.width(), rect.height()),
        EdgeMode::Legacy => (rect.x2 - rect.x1, rect.y2 - rect.y1),
    };

    let row_bytes = out_width as usize * 3;
    let src_stride = image.width as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy whole row slices; the source rows are contiguous in RGB order.
    for y in 0..out_height {
        let src_y = (rect.y1 + y) as usize;
        let start = src_y * src_stride + rect.x1 as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Place `config` inside `image` and extract the region.
pub fn apply_crop(
    image: &DecodedImage,
    config: &CroppingConfiguration,
    edge: EdgeMode,
) -> Result<DecodedImage, CropError> {
    let rect = crop_rectangle(image.width, image.height, config)?;
    Ok(extract_region(image, &rect, edge))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
