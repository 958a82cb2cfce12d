//! Crop resolution and execution.
//!
//! A crop goes through two pure stages:
//!
//! 1. [`resolve`] validates a [`CropRequest`] and derives the missing height
//!    from the aspect ratio, producing a [`CroppingConfiguration`].
//! 2. [`crop_rectangle`] places that configuration inside an image of known
//!    size, and [`extract_region`] copies the covered pixels out.
//!
//! Validation is all-or-nothing: nothing touches pixel data until both stages
//! have accepted the request.
//!
//! # Aspect Ratios
//!
//! - `free`: caller supplies width and height
//! - `square`: height = width, no orientation
//! - everything else: height = floor(width x multiplier), orientation required
//!
//! See [`CATALOGUE`] for the multipliers.

mod aspect;
mod error;
mod execute;
mod resolve;

pub use aspect::{multiplier, AspectRatio, Orientation, Ratio, UnknownVariant, CATALOGUE};
pub use error::CropError;
pub use execute::{apply_crop, crop_rectangle, extract_region, EdgeMode};
pub use resolve::{resolve, CropRequest, CroppingConfiguration};

/// Smallest allowed crop width or height, in pixels.
pub const MIN_CROP_SIZE: u32 = 16;
