//! End-to-end crop: request in, JPEG bytes out.
//!
//! # Stage Order
//!
//! 1. Resolve the request (no pixel work yet)
//! 2. Decode the uploaded image
//! 3. Check the crop against the image bounds
//! 4. Extract the region
//! 5. Encode as JPEG
//!
//! Any failure stops the pipeline and is returned as an [`EffectError`],
//! which the host maps to a response with [`EffectError::status_code`].

use thiserror::Error;

use crate::crop::{crop_rectangle, extract_region, CropError, CropRequest};
use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_image, EncodeError};
use crate::options::CropOptions;
use crate::request::{parse_fields, RequestError};

/// Content type of every successful crop.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Any failure surfaced by the crop pipeline.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Crop(#[from] CropError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl EffectError {
    /// HTTP status for this failure: 400 for anything caused by the request
    /// or the uploaded file, 500 when encoding the result fails.
    pub fn status_code(&self) -> u16 {
        match self {
            EffectError::Request(_) | EffectError::Crop(_) | EffectError::Decode(_) => 400,
            EffectError::Encode(_) => 500,
        }
    }

    /// Stable snake_case identifier of the underlying failure.
    pub fn kind(&self) -> &'static str {
        match self {
            EffectError::Request(e) => e.kind(),
            EffectError::Crop(e) => e.kind(),
            EffectError::Decode(e) => e.kind(),
            EffectError::Encode(e) => e.kind(),
        }
    }
}

/// A successfully cropped and encoded image.
#[derive(Debug, Clone)]
pub struct CroppedImage {
    /// Encoded JPEG bytes
    pub bytes: Vec<u8>,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl CroppedImage {
    pub fn content_type(&self) -> &'static str {
        JPEG_CONTENT_TYPE
    }
}

/// Crop an uploaded image according to `request`.
pub fn crop_image(
    bytes: &[u8],
    request: &CropRequest,
    options: &CropOptions,
) -> Result<CroppedImage, EffectError> {
    let config = request.resolve().inspect_err(|e| {
        tracing::warn!(kind = e.kind(), error = %e, "crop request rejected");
    })?;

    let image = decode_image(bytes)?;

    let rect = crop_rectangle(image.width, image.height, &config).inspect_err(|e| {
        tracing::warn!(
            kind = e.kind(),
            image_width = image.width,
            image_height = image.height,
            error = %e,
            "crop does not fit image"
        );
    })?;

    let region = extract_region(&image, &rect, options.edge_mode);
    let bytes = encode_image(&region, options.jpeg_quality)?;

    tracing::info!(
        x1 = rect.x1,
        y1 = rect.y1,
        x2 = rect.x2,
        y2 = rect.y2,
        out_width = region.width,
        out_height = region.height,
        encoded_bytes = bytes.len(),
        "cropped image"
    );

    Ok(CroppedImage {
        bytes,
        width: region.width,
        height: region.height,
    })
}

/// Parse raw form fields and crop the uploaded image.
pub fn crop_form<I, K, V>(
    fields: I,
    bytes: &[u8],
    options: &CropOptions,
) -> Result<CroppedImage, EffectError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let request = parse_fields(fields)?;
    crop_image(bytes, &request, options)
}
