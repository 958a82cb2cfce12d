//! Parsing raw form fields into a [`CropRequest`].
//!
//! The HTTP host hands over the text parts of a multipart upload as
//! `(name, value)` pairs. Field names:
//!
//! | Field | Type | Required |
//! |---|---|---|
//! | `origin_x` | integer | yes |
//! | `origin_y` | integer | yes |
//! | `width` | integer | yes |
//! | `height` | integer | no |
//! | `aspect_ratio` | `free`, `square`, `three-two`, ... | yes |
//! | `orientation` | `landscape`, `portrait` | no |
//!
//! Values are trimmed. An empty optional field counts as absent, since
//! browsers submit blank inputs as empty strings. Unknown fields are ignored.

use thiserror::Error;

use crate::crop::{AspectRatio, CropRequest, Orientation};
use crate::geometry::{Dimension, Point};

/// Why the raw form fields could not be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{field}' must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Unknown aspect ratio '{0}'")]
    UnknownAspectRatio(String),

    #[error("Unknown orientation '{0}'")]
    UnknownOrientation(String),
}

impl RequestError {
    /// Stable snake_case identifier for the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::MissingField(_) => "missing_field",
            RequestError::InvalidInteger { .. } => "invalid_integer",
            RequestError::UnknownAspectRatio(_) => "unknown_aspect_ratio",
            RequestError::UnknownOrientation(_) => "unknown_orientation",
        }
    }
}

#[derive(Default)]
struct RawFields {
    origin_x: Option<String>,
    origin_y: Option<String>,
    width: Option<String>,
    height: Option<String>,
    aspect_ratio: Option<String>,
    orientation: Option<String>,
}

/// Parse `(name, value)` form fields into a crop request.
///
/// Later duplicates of a field replace earlier ones. Only the form shape is
/// checked here; geometry rules are applied by [`crate::crop::resolve`].
pub fn parse_fields<I, K, V>(fields: I) -> Result<CropRequest, RequestError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut raw = RawFields::default();
    for (name, value) in fields {
        let value = value.as_ref().trim().to_string();
        let slot = match name.as_ref() {
            "origin_x" => &mut raw.origin_x,
            "origin_y" => &mut raw.origin_y,
            "width" => &mut raw.width,
            "height" => &mut raw.height,
            "aspect_ratio" => &mut raw.aspect_ratio,
            "orientation" => &mut raw.orientation,
            _ => continue,
        };
        *slot = Some(value);
    }

    let x = required_int("origin_x", raw.origin_x)?;
    let y = required_int("origin_y", raw.origin_y)?;
    let width = required_int("width", raw.width)?;
    let height = optional(raw.height)
        .map(|value| parse_int("height", value))
        .transpose()?;

    let aspect_ratio = required("aspect_ratio", raw.aspect_ratio)?;
    let aspect_ratio = aspect_ratio
        .parse::<AspectRatio>()
        .map_err(|e| RequestError::UnknownAspectRatio(e.0))?;

    let orientation = optional(raw.orientation)
        .map(|value| {
            value
                .parse::<Orientation>()
                .map_err(|e| RequestError::UnknownOrientation(e.0))
        })
        .transpose()?;

    Ok(CropRequest::new(
        Point::new(x, y),
        Dimension { width, height },
        aspect_ratio,
        orientation,
    ))
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(field: &'static str, value: Option<String>) -> Result<String, RequestError> {
    optional(value).ok_or(RequestError::MissingField(field))
}

fn required_int(field: &'static str, value: Option<String>) -> Result<i32, RequestError> {
    parse_int(field, required(field, value)?)
}

fn parse_int(field: &'static str, value: String) -> Result<i32, RequestError> {
    value
        .parse::<i32>()
        .map_err(|_| RequestError::InvalidInteger { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
        pairs.to_vec()
    }

    #[test]
    fn test_parse_fixed_ratio_request() {
        let request = parse_fields(fields(&[
            ("origin_x", "10"),
            ("origin_y", "20"),
            ("width", "200"),
            ("aspect_ratio", "sixteen-nine"),
            ("orientation", "landscape"),
        ]))
        .unwrap();

        assert_eq!(request.origin, Point::new(10, 20));
        assert_eq!(request.dimensions, Dimension::width_only(200));
        assert_eq!(request.aspect_ratio, AspectRatio::SixteenNine);
        assert_eq!(request.orientation, Some(Orientation::Landscape));
    }

    #[test]
    fn test_parse_free_request_with_height() {
        let request = parse_fields(fields(&[
            ("origin_x", "0"),
            ("origin_y", "0"),
            ("width", "300"),
            ("height", "150"),
            ("aspect_ratio", "free"),
        ]))
        .unwrap();
        assert_eq!(request.dimensions, Dimension::new(300, 150));
        assert_eq!(request.orientation, None);
    }

    #[test]
    fn test_negative_origin_parses() {
        let request = parse_fields(fields(&[
            ("origin_x", "-1"),
            ("origin_y", "-1"),
            ("width", "100"),
            ("aspect_ratio", "square"),
        ]))
        .unwrap();
        assert_eq!(request.origin, Point::new(-1, -1));
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let request = parse_fields(fields(&[
            ("origin_x", "0"),
            ("origin_y", "0"),
            ("width", "100"),
            ("height", ""),
            ("aspect_ratio", "square"),
            ("orientation", "  "),
        ]))
        .unwrap();
        assert_eq!(request.dimensions.height, None);
        assert_eq!(request.orientation, None);
    }

    #[test]
    fn test_zero_height_is_present() {
        let request = parse_fields(fields(&[
            ("origin_x", "0"),
            ("origin_y", "0"),
            ("width", "100"),
            ("height", "0"),
            ("aspect_ratio", "free"),
        ]))
        .unwrap();
        assert_eq!(request.dimensions.height, Some(0));
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse_fields(fields(&[
            ("origin_x", "0"),
            ("origin_y", "0"),
            ("aspect_ratio", "free"),
        ]))
        .unwrap_err();
        assert_eq!(err, RequestError::MissingField("width"));

        let err = parse_fields(fields(&[
            ("origin_x", "0"),
            ("origin_y", "0"),
            ("width", "100"),
        ]))
        .unwrap_err();
        assert_eq!(err, RequestError::MissingField("aspect_ratio"));
    }

    #[test]
    fn test_invalid_integer() {
        let err = parse_fields(fields(&[
            ("origin_x", "1.5"),
            ("origin_y", "0"),
            ("width", "100"),
            ("aspect_ratio", "free"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidInteger {
                field: "origin_x",
                value: "1.5".to_string()
            }
        );
        assert_eq!(err.kind(), "invalid_integer");
    }

    #[test]
    fn test_unknown_enum_values() {
        let err = parse_fields(fields(&[
            ("origin_x", "0"),
            ("origin_y", "0"),
            ("width", "100"),
            ("aspect_ratio", "custom"),
        ]))
        .unwrap_err();
        assert_eq!(err, RequestError::UnknownAspectRatio("custom".to_string()));

        let err = parse_fields(fields(&[
            ("origin_x", "0"),
            ("origin_y", "0"),
            ("width", "100"),
            ("aspect_ratio", "four-three"),
            ("orientation", "sideways"),
        ]))
        .unwrap_err();
        assert_eq!(err, RequestError::UnknownOrientation("sideways".to_string()));
    }

    #[test]
    fn test_unknown_fields_ignored_and_values_trimmed() {
        let owned: Vec<(String, String)> = vec![
            ("origin_x".into(), " 5 ".into()),
            ("origin_y".into(), "6".into()),
            ("width".into(), "64".into()),
            ("aspect_ratio".into(), "square".into()),
            ("image_file".into(), "<binary>".into()),
        ];
        let request = parse_fields(owned).unwrap();
        assert_eq!(request.origin, Point::new(5, 6));
    }
}
