use image::{GrayAlphaImage, LumaA};

use super::bbox::BoundingBox;

/// Mid-gray substituted for masked-out pixels when gathering histogram
/// statistics in `mask` mode, so fully transparent pixels cannot drag the
/// black or white point.
pub(super) const MASK_FILL: u8 = 128;

/// Luminance of every pixel inside the box, transparent pixels included
pub(super) fn box_luma(image: &GrayAlphaImage, bbox: &BoundingBox) -> Vec<u8> {
    let mut luma = Vec::with_capacity((bbox.width() * bbox.height()) as usize);
    for y in bbox.top..bbox.bottom {
        for x in bbox.left..bbox.right {
            luma.push(image.get_pixel(x, y).0[0]);
        }
    }
    luma
}

/// Luminance inside the box with masked-out (alpha == 0) pixels replaced by
/// [`MASK_FILL`]; this is the histogram source for `mask` mode
pub(super) fn masked_luma(image: &GrayAlphaImage, bbox: &BoundingBox) -> Vec<u8> {
    let mut luma = Vec::with_capacity((bbox.width() * bbox.height()) as usize);
    for y in bbox.top..bbox.bottom {
        for x in bbox.left..bbox.right {
            let LumaA([value, alpha]) = *image.get_pixel(x, y);
            luma.push(if alpha > 0 { value } else { MASK_FILL });
        }
    }
    luma
}

/// Remap every pixel's luminance; alpha untouched
pub(super) fn apply_full(image: &GrayAlphaImage, lut: &[u8; 256]) -> GrayAlphaImage {
    GrayAlphaImage::from_fn(image.width(), image.height(), |x, y| {
        let LumaA([value, alpha]) = *image.get_pixel(x, y);
        LumaA([lut[value as usize], alpha])
    })
}

/// Remap luminance inside the box, transparent pixels included; pixels
/// outside the box are untouched
pub(super) fn apply_boxed(
    image: &GrayAlphaImage,
    bbox: &BoundingBox,
    lut: &[u8; 256],
) -> GrayAlphaImage {
    GrayAlphaImage::from_fn(image.width(), image.height(), |x, y| {
        let LumaA([value, alpha]) = *image.get_pixel(x, y);
        if bbox.contains(x, y) {
            LumaA([lut[value as usize], alpha])
        } else {
            LumaA([value, alpha])
        }
    })
}

/// Remap luminance only where alpha > 0; masked-out pixels inside the box and
/// everything outside the box keep their original luminance
pub(super) fn apply_masked(
    image: &GrayAlphaImage,
    bbox: &BoundingBox,
    lut: &[u8; 256],
) -> GrayAlphaImage {
    GrayAlphaImage::from_fn(image.width(), image.height(), |x, y| {
        let LumaA([value, alpha]) = *image.get_pixel(x, y);
        if alpha > 0 && bbox.contains(x, y) {
            LumaA([lut[value as usize], alpha])
        } else {
            LumaA([value, alpha])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shifted_lut() -> [u8; 256] {
        std::array::from_fn(|v| (v as u8).saturating_add(10))
    }

    fn box_2x2() -> BoundingBox {
        BoundingBox {
            left: 1,
            top: 1,
            right: 3,
            bottom: 3,
        }
    }

    #[test]
    fn test_box_luma_collects_crop_in_row_order() {
        let img = GrayAlphaImage::from_fn(4, 4, |x, y| LumaA([(y * 4 + x) as u8, 255]));
        let luma = box_luma(&img, &box_2x2());
        assert_eq!(luma, vec![5, 6, 9, 10]);
    }

    #[test]
    fn test_masked_luma_substitutes_gray_for_transparent() {
        let mut img = GrayAlphaImage::from_pixel(4, 4, LumaA([40, 255]));
        img.put_pixel(1, 1, LumaA([0, 0]));

        let luma = masked_luma(&img, &box_2x2());
        assert_eq!(luma, vec![MASK_FILL, 40, 40, 40]);
    }

    #[test]
    fn test_apply_full_remaps_everything() {
        let img = GrayAlphaImage::from_pixel(3, 3, LumaA([100, 7]));
        let out = apply_full(&img, &shifted_lut());

        for pixel in out.pixels() {
            assert_eq!(pixel.0, [110, 7]);
        }
    }

    #[test]
    fn test_apply_boxed_leaves_outside_untouched() {
        let img = GrayAlphaImage::from_pixel(4, 4, LumaA([100, 0]));
        let out = apply_boxed(&img, &box_2x2(), &shifted_lut());

        assert_eq!(out.get_pixel(0, 0).0, [100, 0]);
        assert_eq!(out.get_pixel(3, 3).0, [100, 0]);
        // Transparent pixels inside the box are still remapped in bbox mode
        assert_eq!(out.get_pixel(1, 1).0, [110, 0]);
    }

    #[test]
    fn test_apply_masked_skips_transparent_pixels() {
        let mut img = GrayAlphaImage::from_pixel(4, 4, LumaA([100, 255]));
        img.put_pixel(2, 2, LumaA([100, 0]));

        let bbox = BoundingBox {
            left: 0,
            top: 0,
            right: 4,
            bottom: 4,
        };
        let out = apply_masked(&img, &bbox, &shifted_lut());

        assert_eq!(out.get_pixel(1, 1).0, [110, 255]);
        assert_eq!(out.get_pixel(2, 2).0, [100, 0]);
    }
}
