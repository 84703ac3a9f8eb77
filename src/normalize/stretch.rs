/// Histogram bins / lookup table entries for 8-bit luminance
const BINS: usize = 256;

/// Build a linear remapping lookup table from a luminance histogram.
///
/// `cutoff` pixels are discarded from each tail of the histogram before the
/// black and white points are chosen; the surviving range is stretched to
/// span 0-255. If clipping leaves no range to stretch (uniform input, or a
/// cutoff swallowing more than half the pixels), the identity table is
/// returned and the image passes through unchanged.
pub fn remap_lut<I>(luma: I, cutoff: u32) -> [u8; 256]
where
    I: IntoIterator<Item = u8>,
{
    let mut histogram = [0u64; BINS];
    for value in luma {
        histogram[value as usize] += 1;
    }

    let (lo, hi) = stretch_range(&histogram, u64::from(cutoff));
    if lo >= hi {
        return identity_lut();
    }

    let range = (hi - lo) as f32;
    let mut lut = [0u8; BINS];
    for (value, entry) in lut.iter_mut().enumerate() {
        *entry = if value <= lo {
            0
        } else if value >= hi {
            255
        } else {
            ((value - lo) as f32 * 255.0 / range)
                .round()
                .clamp(0.0, 255.0) as u8
        };
    }
    lut
}

/// Find the black and white points after clipping `cutoff` pixels from each
/// histogram tail.
///
/// Each scan stops at the bin where the running count first exceeds `cutoff`.
/// If a scan exhausts the histogram the returned pair degenerates to
/// `lo >= hi`, which the caller treats as "nothing to stretch".
fn stretch_range(histogram: &[u64; BINS], cutoff: u64) -> (usize, usize) {
    let mut lo = 0;
    let mut seen = 0u64;
    for (bin, &count) in histogram.iter().enumerate() {
        seen += count;
        if seen > cutoff {
            lo = bin;
            break;
        }
    }

    let mut hi = 0;
    let mut seen = 0u64;
    for (bin, &count) in histogram.iter().enumerate().rev() {
        seen += count;
        if seen > cutoff {
            hi = bin;
            break;
        }
    }

    (lo, hi)
}

fn identity_lut() -> [u8; 256] {
    std::array::from_fn(|value| value as u8)
}
