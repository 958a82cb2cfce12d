//! Aspect ratio and orientation vocabulary, plus the catalogue mapping each
//! fixed ratio and orientation to the multiplier that turns a width into a
//! height.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named width:height proportion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectRatio {
    /// Caller supplies both dimensions.
    Free,
    /// Height equals width.
    Square,
    ThreeTwo,
    FourThree,
    FiveFour,
    SixteenNine,
    SixteenTen,
}

impl AspectRatio {
    /// Every ratio, in declaration order.
    pub const ALL: [AspectRatio; 7] = [
        AspectRatio::Free,
        AspectRatio::Square,
        AspectRatio::ThreeTwo,
        AspectRatio::FourThree,
        AspectRatio::FiveFour,
        AspectRatio::SixteenNine,
        AspectRatio::SixteenTen,
    ];

    /// Wire name, as sent in the `aspect_ratio` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Free => "free",
            AspectRatio::Square => "square",
            AspectRatio::ThreeTwo => "three-two",
            AspectRatio::FourThree => "four-three",
            AspectRatio::FiveFour => "five-four",
            AspectRatio::SixteenNine => "sixteen-nine",
            AspectRatio::SixteenTen => "sixteen-ten",
        }
    }

    /// True for every ratio that derives height from width.
    #[inline]
    pub fn is_fixed(self) -> bool {
        self != AspectRatio::Free
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Whether a fixed ratio is applied wide (landscape) or tall (portrait).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landscape" => Ok(Orientation::Landscape),
            "portrait" => Ok(Orientation::Portrait),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Returned by `FromStr` when a wire name matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

/// Rational multiplier applied to a width to obtain a height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub numerator: u32,
    pub denominator: u32,
}

impl Ratio {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `floor(width * numerator / denominator)`, computed in integers.
    #[inline]
    pub fn apply(self, width: u32) -> u64 {
        u64::from(width) * u64::from(self.numerator) / u64::from(self.denominator)
    }
}

/// Height multipliers for every fixed, non-square ratio.
///
/// `Free` and `Square` are absent; the resolver handles them
/// with dedicated rules.
pub static CATALOGUE: [((AspectRatio, Orientation), Ratio); 10] = [
    ((AspectRatio::ThreeTwo, Orientation::Landscape), Ratio::new(2, 3)),
    ((AspectRatio::ThreeTwo, Orientation::Portrait), Ratio::new(3, 2)),
    ((AspectRatio::FourThree, Orientation::Landscape), Ratio::new(3, 4)),
    ((AspectRatio::FourThree, Orientation::Portrait), Ratio::new(4, 3)),
    ((AspectRatio::FiveFour, Orientation::Landscape), Ratio::new(4, 5)),
    ((AspectRatio::FiveFour, Orientation::Portrait), Ratio::new(5, 4)),
    ((AspectRatio::SixteenNine, Orientation::Landscape), Ratio::new(9, 16)),
    ((AspectRatio::SixteenNine, Orientation::Portrait), Ratio::new(16, 9)),
    ((AspectRatio::SixteenTen, Orientation::Landscape), Ratio::new(10, 16)),
    ((AspectRatio::SixteenTen, Orientation::Portrait), Ratio::new(16, 10)),
];

/// Look up the height multiplier for a ratio and orientation.
pub fn multiplier(aspect_ratio: AspectRatio, orientation: Orientation) -> Option<Ratio> {
    CATALOGUE
        .iter()
        .find(|(key, _)| *key == (aspect_ratio, orientation))
        .map(|(_, ratio)| *ratio)
}
