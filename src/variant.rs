//! The closed set of fractal recurrences the renderer knows how to
//! draw, and the permissive text-selector resolution the UI layer
//! relies on.
use num::Complex;

/// Selects the recurrence rule and decides how the caller-supplied
/// complex parameter is used.  All three variants iterate a quadratic
/// map and share the same escape test; they differ only in where the
/// orbit starts, which value plays the role of the constant, and (for
/// the Burning Ship) a component-wise absolute value folded in before
/// squaring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalVariant {
    /// z -> z^2 + c, where c is the caller's parameter and the orbit
    /// starts at the pixel's plane point.
    Julia,
    /// z -> z^2 + c, where c is the pixel's plane point and the orbit
    /// starts at zero.  The caller's parameter is unused.
    Mandelbrot,
    /// z -> (|Re z| + i|Im z|)^2 + c, with the same roles as the
    /// Mandelbrot.  The caller's parameter is unused.
    BurningShip,
}

impl Default for FractalVariant {
    fn default() -> FractalVariant {
        FractalVariant::Julia
    }
}

impl FractalVariant {
    /// Resolve a selector string to a variant.  Selection is total:
    /// anything that isn't a known token, the empty string included,
    /// resolves to the default variant (Julia) instead of failing.
    /// The UI deliberately passes an empty selector on its first
    /// render, expecting a default picture rather than an error.
    pub fn from_selector(selector: &str) -> FractalVariant {
        match selector {
            "julia" => FractalVariant::Julia,
            "mandel" => FractalVariant::Mandelbrot,
            "ship" => FractalVariant::BurningShip,
            _ => FractalVariant::default(),
        }
    }

    /// The canonical selector token for this variant.
    pub fn selector(&self) -> &'static str {
        match *self {
            FractalVariant::Julia => "julia",
            FractalVariant::Mandelbrot => "mandel",
            FractalVariant::BurningShip => "ship",
        }
    }

    /// Given a pixel's plane point and the caller's parameter, return
    /// the starting value and the constant for this variant's orbit.
    pub fn seed(
        &self,
        point: Complex<f64>,
        parameter: Complex<f64>,
    ) -> (Complex<f64>, Complex<f64>) {
        match *self {
            FractalVariant::Julia => (point, parameter),
            FractalVariant::Mandelbrot | FractalVariant::BurningShip => {
                (Complex::new(0.0, 0.0), point)
            }
        }
    }

    /// Advance the orbit one step.
    #[inline]
    pub fn step(&self, z: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
        match *self {
            FractalVariant::Julia | FractalVariant::Mandelbrot => z * z + c,
            FractalVariant::BurningShip => {
                let folded = Complex::new(z.re.abs(), z.im.abs());
                folded * folded + c
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_selectors_resolve() {
        assert_eq!(FractalVariant::from_selector("julia"), FractalVariant::Julia);
        assert_eq!(
            FractalVariant::from_selector("mandel"),
            FractalVariant::Mandelbrot
        );
        assert_eq!(
            FractalVariant::from_selector("ship"),
            FractalVariant::BurningShip
        );
    }

    #[test]
    fn unknown_and_empty_selectors_fall_back_to_julia() {
        assert_eq!(FractalVariant::from_selector(""), FractalVariant::Julia);
        assert_eq!(
            FractalVariant::from_selector("nebulabrot"),
            FractalVariant::Julia
        );
        assert_eq!(FractalVariant::from_selector("JULIA"), FractalVariant::Julia);
    }

    #[test]
    fn selector_round_trips_for_known_variants() {
        for variant in &[
            FractalVariant::Julia,
            FractalVariant::Mandelbrot,
            FractalVariant::BurningShip,
        ] {
            assert_eq!(FractalVariant::from_selector(variant.selector()), *variant);
        }
    }

    #[test]
    fn julia_orbits_start_at_the_pixel() {
        let point = Complex::new(0.5, -0.25);
        let parameter = Complex::new(-0.15, 0.65);
        let (z0, c) = FractalVariant::Julia.seed(point, parameter);
        assert_eq!(z0, point);
        assert_eq!(c, parameter);
    }

    #[test]
    fn mandelbrot_orbits_start_at_zero() {
        let point = Complex::new(0.5, -0.25);
        let parameter = Complex::new(-0.15, 0.65);
        let (z0, c) = FractalVariant::Mandelbrot.seed(point, parameter);
        assert_eq!(z0, Complex::new(0.0, 0.0));
        assert_eq!(c, point);
    }

    #[test]
    fn quadratic_step_squares_and_adds() {
        let z = Complex::new(1.0, 1.0);
        let c = Complex::new(0.5, 0.0);
        // (1 + i)^2 = 2i
        assert_eq!(
            FractalVariant::Mandelbrot.step(z, c),
            Complex::new(0.5, 2.0)
        );
    }

    #[test]
    fn ship_step_folds_into_the_first_quadrant() {
        let c = Complex::new(0.0, 0.0);
        let positive = FractalVariant::BurningShip.step(Complex::new(1.0, 2.0), c);
        let negative = FractalVariant::BurningShip.step(Complex::new(-1.0, -2.0), c);
        assert_eq!(positive, negative);
    }
}
