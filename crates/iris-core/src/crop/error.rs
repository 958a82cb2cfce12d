//! Rejection reasons for crop resolution and execution.

use thiserror::Error;

use super::aspect::{AspectRatio, Orientation};
use super::MIN_CROP_SIZE;

/// Why a crop request was rejected.
///
/// Every variant is final for the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    /// Origin has a negative coordinate.
    #[error("Crop origin ({x},{y}) must not be negative")]
    InvalidOrigin { x: i32, y: i32 },

    /// Free cropping needs both width and height.
    #[error("Free cropping requires both width and height")]
    MissingDimension,

    /// A fixed aspect ratio was sent together with an explicit height.
    #[error("Height ({height}) must not be supplied with aspect ratio '{aspect_ratio}'; it is derived from width")]
    UnexpectedHeight {
        aspect_ratio: AspectRatio,
        height: i32,
    },

    /// Width or height is below the minimum crop size.
    #[error("Crop dimensions {width} x {height} are too small: use a crop size of {min} pixels or larger", min = MIN_CROP_SIZE)]
    DimensionTooSmall { width: i64, height: i64 },

    /// Square cropping was sent with an orientation.
    #[error("Aspect ratio 'square' does not take an orientation (got '{0}')")]
    UnexpectedOrientation(Orientation),

    /// A non-square fixed ratio was sent without an orientation.
    #[error("Aspect ratio '{0}' requires an orientation")]
    MissingOrientation(AspectRatio),

    /// No catalogue entry for this ratio and orientation.
    #[error("Unsupported aspect ratio and orientation: '{aspect_ratio}' / '{orientation}'")]
    UnsupportedCombination {
        aspect_ratio: AspectRatio,
        orientation: Orientation,
    },

    /// The top-left pixel lies outside the image.
    #[error("Crop origin ({x},{y}) is outside the image dimensions ({image_width}x{image_height})")]
    OriginOutOfBounds {
        x: u64,
        y: u64,
        image_width: u32,
        image_height: u32,
    },

    /// The bottom-right pixel lies outside the image.
    #[error("Crop end ({x},{y}) is outside the image dimensions ({image_width}x{image_height})")]
    CropExceedsBounds {
        x: u64,
        y: u64,
        image_width: u32,
        image_height: u32,
    },
}

impl CropError {
    /// Stable snake_case identifier for the rejection reason.
    pub fn kind(&self) -> &'static str {
        match self {
            CropError::InvalidOrigin { .. } => "invalid_origin",
            CropError::MissingDimension => "missing_dimension",
            CropError::UnexpectedHeight { .. } => "unexpected_height",
            CropError::DimensionTooSmall { .. } => "dimension_too_small",
            CropError::UnexpectedOrientation(_) => "unexpected_orientation",
            CropError::MissingOrientation(_) => "missing_orientation",
            CropError::UnsupportedCombination { .. } => "unsupported_combination",
            CropError::OriginOutOfBounds { .. } => "origin_out_of_bounds",
            CropError::CropExceedsBounds { .. } => "crop_exceeds_bounds",
        }
    }
}
