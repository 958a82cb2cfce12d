//! Per-call settings for the crop pipeline.

use serde::{Deserialize, Serialize};

use crate::crop::EdgeMode;

/// Default JPEG quality for cropped output.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Settings that shape the pipeline output without affecting validation.
///
/// Missing fields take their defaults when deserialized, so hosts can pass a
/// partial object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// How the far edge of the crop is copied
    pub edge_mode: EdgeMode,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            edge_mode: EdgeMode::Inclusive,
        }
    }
}

impl CropOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> Self {
        self.edge_mode = edge_mode;
        self
    }
}
