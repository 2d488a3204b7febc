// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration at the heart of the renderer.  Runs one
//! orbit until it leaves the escape radius or the iteration cutoff is
//! reached, and reports which of the two happened.
use num::Complex;
use variant::FractalVariant;

/// Squared escape radius.  The canonical radius is 2: once an orbit's
/// magnitude passes it, the quadratic map is guaranteed to diverge.
/// Comparing squared magnitudes avoids a square root per step.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// The outcome of iterating a single orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelResult {
    /// Completed iterations before termination, in `0..=cutoff`.
    pub count: u32,
    /// True if the orbit left the escape radius; false if it survived
    /// all `cutoff` steps and is presumed interior.
    pub escaped: bool,
}

/// This is our classic iterator function.  Applies the variant's
/// recurrence to `z0` until the squared magnitude passes
/// [`ESCAPE_RADIUS_SQR`] or `cutoff` steps have been taken.  The
/// escape test runs before each step, so a starting value already
/// outside the radius escapes with a count of zero.
///
/// A non-finite magnitude (overflow to infinity, or NaN fed in by a
/// caller) counts as an immediate escape; the iteration is total over
/// every input and never reports an error.
pub fn escape_time(
    variant: FractalVariant,
    z0: Complex<f64>,
    c: Complex<f64>,
    cutoff: u32,
) -> PixelResult {
    let mut z = z0;
    for count in 0..cutoff {
        let magnitude = z.norm_sqr();
        if !magnitude.is_finite() || magnitude > ESCAPE_RADIUS_SQR {
            return PixelResult {
                count,
                escaped: true,
            };
        }
        z = variant.step(z, c);
    }
    PixelResult {
        count: cutoff,
        escaped: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot_at(re: f64, im: f64, cutoff: u32) -> PixelResult {
        let point = Complex::new(re, im);
        let (z0, c) = FractalVariant::Mandelbrot.seed(point, Complex::new(0.0, 0.0));
        escape_time(FractalVariant::Mandelbrot, z0, c, cutoff)
    }

    #[test]
    fn origin_is_interior_to_the_mandelbrot_set() {
        let result = mandelbrot_at(0.0, 0.0, 500);
        assert!(!result.escaped);
        assert_eq!(result.count, 500);
    }

    #[test]
    fn far_point_escapes_immediately() {
        let result = mandelbrot_at(3.0, 3.0, 500);
        assert!(result.escaped);
        assert!(result.count <= 1);
    }

    #[test]
    fn cusp_neighbor_escapes_eventually() {
        // c = 0.26 sits just past the cardioid cusp at 1/4: outside
        // the set, but dozens of iterations away from diverging.
        let result = mandelbrot_at(0.26, 0.0, 1000);
        assert!(result.escaped);
        assert!(result.count > 10);
    }

    #[test]
    fn raising_the_cutoff_never_lowers_an_escape_count() {
        let shallow = mandelbrot_at(0.26, 0.0, 1000);
        let deep = mandelbrot_at(0.26, 0.0, 10_000);
        assert!(shallow.escaped && deep.escaped);
        assert!(deep.count >= shallow.count);
        // A count decided by escape is stable under any higher cutoff.
        assert_eq!(deep.count, mandelbrot_at(0.26, 0.0, 20_000).count);
    }

    #[test]
    fn non_finite_start_counts_as_escaped() {
        let c = Complex::new(0.0, 0.0);
        for z0 in &[
            Complex::new(::std::f64::NAN, 0.0),
            Complex::new(::std::f64::INFINITY, 0.0),
            Complex::new(0.0, ::std::f64::NEG_INFINITY),
        ] {
            let result = escape_time(FractalVariant::Mandelbrot, *z0, c, 100);
            assert!(result.escaped);
            assert_eq!(result.count, 0);
        }
    }

    #[test]
    fn julia_interior_point_survives_the_cutoff() {
        // z = 0 under c = -0.15 + 0.65i stays bounded.
        let c = Complex::new(-0.15, 0.65);
        let result = escape_time(FractalVariant::Julia, Complex::new(0.0, 0.0), c, 500);
        assert!(!result.escaped);
    }

    #[test]
    fn count_never_exceeds_the_cutoff() {
        for cutoff in &[1, 2, 50, 500] {
            let result = mandelbrot_at(0.26, 0.0, *cutoff);
            assert!(result.count <= *cutoff);
        }
    }
}
