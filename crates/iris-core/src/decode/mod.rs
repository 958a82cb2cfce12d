//! Image decoding for the crop pipeline.
//!
//! This module turns uploaded bytes into an RGB pixel buffer:
//! - Format detection (JPEG, PNG)
//! - EXIF orientation correction
//! - Conversion to 8-bit RGB
//!
//! # Examples
//!
//! ```ignore
//! use iris_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, read_orientation};
pub use types::{DecodeError, DecodedImage, ExifOrientation};
