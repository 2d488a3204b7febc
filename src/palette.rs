//! Maps escape-time results to RGBA colors.  The palette walks the
//! HSL hue wheel: an orbit's escape count, as a fraction of the
//! cutoff, picks a hue at full saturation and half lightness, so
//! quick escapes render red and the slowest near-interior escapes
//! come back around toward red through violet.  Interior points get a
//! reserved flat black.
use escape::PixelResult;

/// The color painted for points presumed to belong to the set itself.
pub const INTERIOR: [u8; 4] = [0, 0, 0, 255];

/// Convert an HSL triple to RGB.  `hue` is in degrees, `saturation`
/// and `lightness` in [0, 1].
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let base = lightness - chroma / 2.0;
    let (r, g, b) = match (hue / 60.0) as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };
    (
        ((r + base) * 255.0).round() as u8,
        ((g + base) * 255.0).round() as u8,
        ((b + base) * 255.0).round() as u8,
    )
}

/// Map one orbit's outcome to an RGBA quadruple.  Deterministic: the
/// same result and cutoff always produce the same color, and every
/// color is fully opaque.
pub fn color_for(result: PixelResult, cutoff: u32) -> [u8; 4] {
    if !result.escaped {
        return INTERIOR;
    }
    let hue = 360.0 * f64::from(result.count) / f64::from(cutoff);
    let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.5);
    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
    }

    #[test]
    fn hsl_secondaries_and_grays() {
        assert_eq!(hsl_to_rgb(60.0, 1.0, 0.5), (255, 255, 0));
        assert_eq!(hsl_to_rgb(180.0, 1.0, 0.5), (0, 255, 255));
        // Zero saturation collapses to a gray ramp on lightness.
        assert_eq!(hsl_to_rgb(123.0, 0.0, 0.5), (128, 128, 128));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
    }

    #[test]
    fn interior_points_are_opaque_black() {
        let interior = PixelResult {
            count: 500,
            escaped: false,
        };
        assert_eq!(color_for(interior, 500), INTERIOR);
    }

    #[test]
    fn escaped_points_are_never_the_interior_color() {
        // Full saturation at half lightness always lights a channel.
        for count in 0..500 {
            let result = PixelResult {
                count,
                escaped: true,
            };
            assert_ne!(color_for(result, 500), INTERIOR);
        }
    }

    #[test]
    fn colors_are_fully_opaque_and_reproducible() {
        for count in &[0, 1, 250, 499] {
            let result = PixelResult {
                count: *count,
                escaped: true,
            };
            let color = color_for(result, 500);
            assert_eq!(color[3], 255);
            assert_eq!(color, color_for(result, 500));
        }
    }
}
