//! Per pixel conversion between RGB and YCbCr.

/// Converts one RGB triple to `(Y, Cb, Cr)`.
#[inline]
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);

    (
        0.299 * r + 0.587 * g + 0.114 * b,
        -0.1687 * r - 0.3313 * g + 0.5 * b,
        0.5 * r - 0.4187 * g - 0.0813 * b,
    )
}

/// Converts one YCbCr triple back to RGB, rounding and clamping every channel.
#[inline]
pub fn ycbcr_to_rgb(y: f64, cb: f64, cr: f64) -> (u8, u8, u8) {
    (
        clamp(y - 0.001 * cb + 1.402 * cr),
        clamp(y - 0.344 * cb - 0.714 * cr),
        clamp(y + 1.772 * cb + 0.001 * cr),
    )
}

/// rounds to the nearest integer and saturates at 0 and 255
#[inline]
fn clamp(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_gray_to_zero_chroma() {
        let (y, cb, cr) = rgb_to_ycbcr(99, 99, 99);
        assert!((y - 99.0).abs() < 1e-9);
        assert!(cb.abs() < 1e-9);
        assert!(cr.abs() < 1e-9);
    }

    #[test]
    fn should_clamp_out_of_range_values() {
        assert_eq!(ycbcr_to_rgb(300.0, 0.0, 0.0), (255, 255, 255));
        assert_eq!(ycbcr_to_rgb(-20.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn should_round_trip_every_primary_and_gray() {
        for rgb in [
            (0, 0, 0),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (12, 200, 77),
            (128, 128, 128),
        ] {
            let (y, cb, cr) = rgb_to_ycbcr(rgb.0, rgb.1, rgb.2);
            let back = ycbcr_to_rgb(y, cb, cr);
            for (a, b) in [(rgb.0, back.0), (rgb.1, back.1), (rgb.2, back.2)] {
                assert!(
                    (a as i16 - b as i16).abs() <= 1,
                    "{rgb:?} came back as {back:?}"
                );
            }
        }
    }
}
