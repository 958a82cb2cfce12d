//! Conversion of pipeline errors into JavaScript values.
//!
//! Errors cross the boundary as plain objects so the host can pick the HTTP
//! status without parsing messages:
//!
//! ```typescript
//! try {
//!   crop_image(bytes, 0, 0, 200, undefined, 'three-two', 'landscape');
//! } catch (e) {
//!   // e = { kind: 'crop_exceeds_bounds', message: '...', status: 400 }
//!   res.status(e.status).json(e);
//! }
//! ```

use iris_core::EffectError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serializable description of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    pub status: u16,
}

impl From<&EffectError> for ErrorBody {
    fn from(err: &EffectError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            status: err.status_code(),
        }
    }
}

/// Convert an error into a thrown JavaScript object, logging it to the console.
pub(crate) fn to_js_error(err: EffectError) -> JsValue {
    let body = ErrorBody::from(&err);
    web_sys::console::warn_1(&JsValue::from_str(&format!(
        "iris: {} ({})",
        body.message, body.kind
    )));
    serde_wasm_bindgen::to_value(&body).unwrap_or_else(|_| JsValue::from_str(&body.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_core::{CropError, RequestError};

    #[test]
    fn test_body_from_crop_error() {
        let err = EffectError::from(CropError::MissingDimension);
        let body = ErrorBody::from(&err);
        assert_eq!(body.kind, "missing_dimension");
        assert_eq!(body.status, 400);
        assert_eq!(body.message, "Free cropping requires both width and height");
    }

    #[test]
    fn test_body_from_request_error() {
        let err = EffectError::from(RequestError::UnknownAspectRatio("wide".to_string()));
        let body = ErrorBody::from(&err);
        assert_eq!(body.kind, "unknown_aspect_ratio");
        assert_eq!(body.status, 400);
    }
}
