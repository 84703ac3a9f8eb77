//! Contrast normalization for grayscale images carrying an alpha channel.
//!
//! The crate provides a single filter: [`ContrastNormalizer`] stretches the
//! luminance histogram of a `LumaA8` image to the full 0-255 range, either
//! over the whole image, over the bounding box of the visible (alpha > 0)
//! pixels, or over the visible pixels alone. A configurable cutoff clips
//! histogram outliers before the stretch range is chosen. Decoding, encoding
//! and pipeline plumbing are the caller's concern.

pub mod config;
pub mod error;
pub mod normalize;

pub use config::{NormalizeContrastConfig, Region};
pub use error::FilterError;
pub use normalize::{BoundingBox, ContrastNormalizer};
