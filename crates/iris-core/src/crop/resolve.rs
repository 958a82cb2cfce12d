//! Turning a crop request into a fully resolved configuration.
//!
//! A [`CropRequest`] is what the caller sent: height may be absent and nothing
//! has been checked. [`resolve`] validates it and produces a
//! [`CroppingConfiguration`] in which both dimensions are concrete pixel
//! counts. Fixed aspect ratios and free cropping are mutually exclusive ways
//! of supplying the height: a fixed ratio always derives it from width, free
//! cropping always takes it from the caller.

use serde::{Deserialize, Serialize};

use super::aspect::{multiplier, AspectRatio, Orientation};
use super::error::CropError;
use super::MIN_CROP_SIZE;
use crate::geometry::{CropSize, Dimension, Point};

/// Unvalidated crop parameters as received from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRequest {
    pub origin: Point,
    pub dimensions: Dimension,
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

impl CropRequest {
    pub fn new(
        origin: Point,
        dimensions: Dimension,
        aspect_ratio: AspectRatio,
        orientation: Option<Orientation>,
    ) -> Self {
        Self {
            origin,
            dimensions,
            aspect_ratio,
            orientation,
        }
    }

    /// Validate and resolve this request. See [`resolve`].
    pub fn resolve(&self) -> Result<CroppingConfiguration, CropError> {
        resolve(self)
    }
}

/// A validated crop with both dimensions known.
///
/// Only [`resolve`] builds these, so every instance satisfies: origin is
/// non-negative, both sides are at least [`MIN_CROP_SIZE`], and for fixed
/// ratios the height was derived from the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CroppingConfiguration {
    x: u32,
    y: u32,
    size: CropSize,
    aspect_ratio: AspectRatio,
    orientation: Option<Orientation>,
}

impl CroppingConfiguration {
    /// Top-left pixel of the crop.
    pub fn origin(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> CropSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }
}

/// Validate a crop request and derive its height.
///
/// # Rules
///
/// Checked in this order, the first failure wins:
///
/// 1. Negative origin coordinates are rejected.
/// 2. `free`: height must be present and both sides at least 16 pixels.
///    Orientation is carried along but never changes the result.
/// 3. Fixed ratios: height must be absent and width at least 16 pixels.
///    `square` takes no orientation and copies width into height; the other
///    ratios need an orientation and use the aspect catalogue, flooring the
///    result. The derived height must also be at least 16 pixels.
pub fn resolve(request: &CropRequest) -> Result<CroppingConfiguration, CropError> {
    let Point { x, y } = request.origin;
    if x < 0 || y < 0 {
        return Err(CropError::InvalidOrigin { x, y });
    }

    let size = if request.aspect_ratio.is_fixed() {
        resolve_fixed(request)?
    } else {
        resolve_free(&request.dimensions)?
    };

    tracing::debug!(
        aspect_ratio = %request.aspect_ratio,
        width = size.width,
        height = size.height,
        "resolved crop configuration"
    );

    Ok(CroppingConfiguration {
        x: x.unsigned_abs(),
        y: y.unsigned_abs(),
        size,
        aspect_ratio: request.aspect_ratio,
        orientation: request.orientation,
    })
}

fn resolve_free(dimensions: &Dimension) -> Result<CropSize, CropError> {
    let height = dimensions.height.ok_or(CropError::MissingDimension)?;
    let width = dimensions.width;

    if width < MIN_CROP_SIZE as i32 || height < MIN_CROP_SIZE as i32 {
        return Err(CropError::DimensionTooSmall {
            width: width.into(),
            height: height.into(),
        });
    }

    Ok(CropSize {
        width: width.unsigned_abs(),
        height: height.unsigned_abs(),
    })
}

fn resolve_fixed(request: &CropRequest) -> Result<CropSize, CropError> {
    let aspect_ratio = request.aspect_ratio;
    let Dimension { width, height } = request.dimensions;

    if let Some(height) = height {
        return Err(CropError::UnexpectedHeight {
            aspect_ratio,
            height,
        });
    }

    if width < MIN_CROP_SIZE as i32 {
        return Err(CropError::DimensionTooSmall {
            width: width.into(),
            height: 0,
        });
    }
    let width = width.unsigned_abs();

    let height = match (aspect_ratio, request.orientation) {
        (AspectRatio::Square, Some(orientation)) => {
            return Err(CropError::UnexpectedOrientation(orientation));
        }
        (AspectRatio::Square, None) => u64::from(width),
        (_, None) => return Err(CropError::MissingOrientation(aspect_ratio)),
        (_, Some(orientation)) => multiplier(aspect_ratio, orientation)
            .ok_or(CropError::UnsupportedCombination {
                aspect_ratio,
                orientation,
            })?
            .apply(width),
    };

    if height < u64::from(MIN_CROP_SIZE) {
        return Err(CropError::DimensionTooSmall {
            width: width.into(),
            height: height as i64,
        });
    }

    // Width is at most i32::MAX and the largest multiplier is 16/9, so the
    // derived height always fits.
    let height = u32::try_from(height).unwrap_or(u32::MAX);

    Ok(CropSize { width, height })
}
