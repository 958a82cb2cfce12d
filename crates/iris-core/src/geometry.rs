//! Plain geometry values shared by the crop pipeline.
//!
//! These carry no behavior beyond construction. Validation of signs and
//! minimum sizes happens in [`crate::crop::resolve`].

use serde::{Deserialize, Serialize};

/// A pixel coordinate as supplied by the caller.
///
/// Coordinates may be negative here; the resolver rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Requested crop dimensions.
///
/// `height` is `None` when the caller did not send it at all, which is not
/// the same thing as sending zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: i32,
    #[serde(default)]
    pub height: Option<i32>,
}

impl Dimension {
    /// Width only; height is left for the aspect ratio to derive.
    pub fn width_only(width: i32) -> Self {
        Self {
            width,
            height: None,
        }
    }

    /// Width and an explicit height.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height: Some(height),
        }
    }
}

/// Fully resolved crop size in pixels. Both sides are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSize {
    pub width: u32,
    pub height: u32,
}

/// Inclusive pixel bounds of a crop inside an image.
///
/// `(x1, y1)` is the top-left pixel and `(x2, y2)` the bottom-right pixel,
/// both part of the crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRectangle {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRectangle {
    /// Number of columns covered, counting both edges.
    pub fn width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    /// Number of rows covered, counting both edges.
    pub fn height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }
}
