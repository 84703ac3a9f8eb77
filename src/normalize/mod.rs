//! Contrast normalization of grayscale images with an alpha channel
//!
//! The transform stretches the luminance histogram so the darkest and
//! brightest tones span the full 0-255 range. The [`Region`] setting selects
//! which pixels feed the histogram and which receive the remapping; the
//! alpha channel is never altered.

mod bbox;
mod composite;
mod stretch;

pub use bbox::BoundingBox;

use image::{DynamicImage, GrayAlphaImage};

use crate::config::{NormalizeContrastConfig, Region};
use crate::error::FilterError;

/// Contrast-normalization filter with a fixed region/cutoff configuration.
///
/// Stateless across calls: every [`process`](Self::process) invocation
/// derives its histogram and lookup table fresh, so one instance may serve
/// many images, concurrently if the caller wishes.
#[derive(Debug, Clone)]
pub struct ContrastNormalizer {
    region: Region,
    cutoff: u32,
}

impl ContrastNormalizer {
    pub fn new(config: NormalizeContrastConfig) -> Self {
        Self {
            region: config.region,
            cutoff: config.cutoff,
        }
    }

    /// Normalize the contrast of a grayscale+alpha image.
    ///
    /// Accepts only `DynamicImage::ImageLumaA8`; the input is left untouched
    /// and a freshly-owned image of identical dimensions is returned, with
    /// the alpha channel byte-identical to the input.
    pub fn process(&self, image: &DynamicImage) -> Result<DynamicImage, FilterError> {
        let DynamicImage::ImageLumaA8(gray) = image else {
            return Err(FilterError::UnsupportedFormat(
                "contrast normalization requires a grayscale image with alpha".to_string(),
            ));
        };

        tracing::debug!(
            region = self.region.as_str(),
            cutoff = self.cutoff,
            width = gray.width(),
            height = gray.height(),
            "normalizing contrast"
        );

        Ok(DynamicImage::ImageLumaA8(self.process_gray(gray)?))
    }

    fn process_gray(&self, image: &GrayAlphaImage) -> Result<GrayAlphaImage, FilterError> {
        match self.region {
            Region::All => {
                let lut = stretch::remap_lut(image.pixels().map(|p| p.0[0]), self.cutoff);
                Ok(composite::apply_full(image, &lut))
            }
            Region::Bbox => {
                let bbox = bbox::extract(image)?;
                tracing::trace!(?bbox, "derived visible bounding box");
                let lut = stretch::remap_lut(composite::box_luma(image, &bbox), self.cutoff);
                Ok(composite::apply_boxed(image, &bbox, &lut))
            }
            Region::Mask => {
                let bbox = bbox::extract(image)?;
                tracing::trace!(?bbox, "derived visible bounding box");
                let lut = stretch::remap_lut(composite::masked_luma(image, &bbox), self.cutoff);
                Ok(composite::apply_masked(image, &bbox, &lut))
            }
        }
    }
}
