use image::GrayAlphaImage;

use crate::error::FilterError;

/// Minimal axis-aligned rectangle enclosing all visible (alpha > 0) pixels.
///
/// Bounds are inclusive-exclusive: `left..right` by `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Scan the alpha channel for the smallest box containing every visible pixel.
///
/// A fully transparent image has no such box; that case is reported as
/// `EmptyRegion` rather than producing a degenerate crop.
pub fn extract(image: &GrayAlphaImage) -> Result<BoundingBox, FilterError> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[1] > 0 {
            found = true;
            left = left.min(x);
            top = top.min(y);
            right = right.max(x + 1);
            bottom = bottom.max(y + 1);
        }
    }

    if !found {
        return Err(FilterError::EmptyRegion);
    }

    Ok(BoundingBox {
        left,
        top,
        right,
        bottom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::LumaA;

    #[test]
    fn test_extract_finds_single_visible_pixel() {
        let mut img = GrayAlphaImage::from_pixel(10, 10, LumaA([0, 0]));
        img.put_pixel(3, 7, LumaA([100, 255]));

        let bbox = extract(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 3,
                top: 7,
                right: 4,
                bottom: 8
            }
        );
        assert_eq!(bbox.width(), 1);
        assert_eq!(bbox.height(), 1);
    }

    #[test]
    fn test_extract_spans_scattered_pixels() {
        let mut img = GrayAlphaImage::from_pixel(20, 20, LumaA([0, 0]));
        img.put_pixel(2, 5, LumaA([10, 1]));
        img.put_pixel(15, 12, LumaA([20, 128]));

        let bbox = extract(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 2,
                top: 5,
                right: 16,
                bottom: 13
            }
        );
    }

    #[test]
    fn test_extract_covers_fully_opaque_image() {
        let img = GrayAlphaImage::from_pixel(8, 6, LumaA([50, 255]));

        let bbox = extract(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 0,
                top: 0,
                right: 8,
                bottom: 6
            }
        );
    }

    #[test]
    fn test_extract_rejects_fully_transparent_image() {
        let img = GrayAlphaImage::from_pixel(10, 10, LumaA([200, 0]));

        let err = extract(&img).unwrap_err();
        assert!(matches!(err, FilterError::EmptyRegion));
    }
}
