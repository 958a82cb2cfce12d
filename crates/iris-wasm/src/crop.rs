//! WASM bindings for the crop pipeline.
//!
//! The host owns HTTP and multipart decoding; it passes the already-split
//! form values here. Optional fields map to `undefined`.

use iris_core::{
    crop_image as core_crop_image, AspectRatio, CropOptions, CropRequest, Dimension,
    EffectError, Orientation, Point, RequestError,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;

/// Resolved crop geometry returned to JavaScript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCrop {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: AspectRatio,
    pub orientation: Option<Orientation>,
}

/// Crop an uploaded image and return JPEG bytes.
///
/// # Arguments
///
/// * `bytes` - Uploaded image file (JPEG or PNG)
/// * `origin_x`, `origin_y` - Top-left pixel of the crop
/// * `width` - Crop width in pixels
/// * `height` - Crop height, only for `free` cropping
/// * `aspect_ratio` - `free`, `square`, `three-two`, `four-three`, `five-four`,
///   `sixteen-nine` or `sixteen-ten`
/// * `orientation` - `landscape` or `portrait`, for non-square fixed ratios
/// * `quality` - JPEG quality (defaults to 95)
///
/// # Errors
///
/// Throws `{ kind, message, status }`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const jpeg = crop_image(bytes, 0, 0, 200, undefined, 'three-two', 'landscape');
/// res.type('image/jpeg').send(Buffer.from(jpeg));
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn crop_image(
    bytes: &[u8],
    origin_x: i32,
    origin_y: i32,
    width: i32,
    height: Option<i32>,
    aspect_ratio: &str,
    orientation: Option<String>,
    quality: Option<u8>,
) -> Result<Vec<u8>, JsValue> {
    crop_image_inner(
        bytes,
        origin_x,
        origin_y,
        width,
        height,
        aspect_ratio,
        orientation.as_deref(),
        quality,
    )
    .map_err(to_js_error)
}

/// Validate crop parameters without an image and return the resolved geometry.
///
/// Useful for previewing the crop box before uploading.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { width, height } = resolve_crop(0, 0, 200, undefined, 'sixteen-nine', 'landscape');
/// // height === 112
/// ```
#[wasm_bindgen]
pub fn resolve_crop(
    origin_x: i32,
    origin_y: i32,
    width: i32,
    height: Option<i32>,
    aspect_ratio: &str,
    orientation: Option<String>,
) -> Result<JsValue, JsValue> {
    let resolved = resolve_crop_inner(
        origin_x,
        origin_y,
        width,
        height,
        aspect_ratio,
        orientation.as_deref(),
    )
    .map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&resolved).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn build_request(
    origin_x: i32,
    origin_y: i32,
    width: i32,
    height: Option<i32>,
    aspect_ratio: &str,
    orientation: Option<&str>,
) -> Result<CropRequest, RequestError> {
    let aspect_ratio = aspect_ratio
        .parse::<AspectRatio>()
        .map_err(|e| RequestError::UnknownAspectRatio(e.0))?;
    let orientation = orientation
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<Orientation>()
                .map_err(|e| RequestError::UnknownOrientation(e.0))
        })
        .transpose()?;

    Ok(CropRequest::new(
        Point::new(origin_x, origin_y),
        Dimension { width, height },
        aspect_ratio,
        orientation,
    ))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn crop_image_inner(
    bytes: &[u8],
    origin_x: i32,
    origin_y: i32,
    width: i32,
    height: Option<i32>,
    aspect_ratio: &str,
    orientation: Option<&str>,
    quality: Option<u8>,
) -> Result<Vec<u8>, EffectError> {
    let request = build_request(origin_x, origin_y, width, height, aspect_ratio, orientation)?;
    let mut options = CropOptions::default();
    if let Some(quality) = quality {
        options = options.with_quality(quality);
    }
    Ok(core_crop_image(bytes, &request, &options)?.bytes)
}

pub(crate) fn resolve_crop_inner(
    origin_x: i32,
    origin_y: i32,
    width: i32,
    height: Option<i32>,
    aspect_ratio: &str,
    orientation: Option<&str>,
) -> Result<ResolvedCrop, EffectError> {
    let request = build_request(origin_x, origin_y, width, height, aspect_ratio, orientation)?;
    let config = request.resolve()?;
    let (x, y) = config.origin();

    Ok(ResolvedCrop {
        x,
        y,
        width: config.width(),
        height: config.height(),
        aspect_ratio: config.aspect_ratio(),
        orientation: config.orientation(),
    })
}
