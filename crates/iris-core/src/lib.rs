//! Iris Core - Crop engine
//!
//! This crate resolves declarative crop requests (origin, width, aspect ratio,
//! orientation) into validated pixel rectangles and extracts them from
//! uploaded images.
//!
//! # Module Structure
//!
//! - `geometry` - Point, Dimension and rectangle values
//! - `crop` - Aspect catalogue, resolver and executor
//! - `request` - Raw form field parsing
//! - `decode` / `encode` - Image codec adapters
//! - `options` - Pipeline settings
//! - `pipeline` - End-to-end crop and the boundary error type

pub mod crop;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod options;
pub mod pipeline;
pub mod request;

pub use crop::{
    apply_crop, crop_rectangle, resolve, AspectRatio, CropError, CropRequest,
    CroppingConfiguration, EdgeMode, Orientation, MIN_CROP_SIZE,
};
pub use geometry::{CropRectangle, CropSize, Dimension, Point};
pub use options::CropOptions;
pub use pipeline::{crop_form, crop_image, CroppedImage, EffectError};
pub use request::{parse_fields, RequestError};
