use std::str::FromStr;

use serde::Deserialize;

use crate::error::FilterError;

/// Pixel region the normalization operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Stretch the entire image
    #[default]
    All,
    /// Stretch only the bounding box of the visible (alpha > 0) pixels
    Bbox,
    /// Stretch only the visible pixels themselves
    Mask,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Bbox => "bbox",
            Self::Mask => "mask",
        }
    }
}

impl FromStr for Region {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, FilterError> {
        match s {
            "all" => Ok(Self::All),
            "bbox" => Ok(Self::Bbox),
            "mask" => Ok(Self::Mask),
            other => Err(FilterError::InvalidConfiguration(format!(
                "not a supported region '{other}' (options are 'all', 'bbox' and 'mask')"
            ))),
        }
    }
}

/// Filter configuration, fixed for the lifetime of a [`ContrastNormalizer`].
///
/// `mode` is accepted as a deprecated alias for `region` when deserializing;
/// both keys resolve to the single `region` field.
///
/// [`ContrastNormalizer`]: crate::ContrastNormalizer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeContrastConfig {
    #[serde(default, alias = "mode")]
    pub region: Region,

    /// Number of pixels to clip from each end of the histogram before
    /// rescaling it
    #[serde(default)]
    pub cutoff: u32,
}
