//! Contains the Viewport struct, which describes the relationship
//! between the integral pixel plane of an output image, with its
//! origin at the top-left corner, and a fixed window onto the complex
//! plane centered on the origin.  Every renderer looks at the same
//! window; zooming and panning are not part of this crate.
use num::Complex;

/// Plane units spanned by the shorter side of the image.  A square
/// buffer therefore shows real in [-2, 2] and imaginary in [-2, 2],
/// which comfortably contains the escape-radius-2 disc that bounds
/// every set we draw.
pub const PLANE_SPAN: f64 = 4.0;

/// Maps pixel coordinates to points on the complex plane.  The pixel
/// plane is addressed as (row, column) with row 0 at the top of the
/// image; the complex plane is addressed with the imaginary axis
/// pointing up, so row 0 carries the largest imaginary component.
///
/// Both axes share one scale factor, computed from the shorter image
/// side, so a non-square buffer widens the window along its longer
/// axis instead of stretching the image.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u32,
    height: u32,
    // Plane units per pixel, identical for both axes.
    scale: f64,
    // The plane point under pixel (0, 0), the top-left corner.
    topleft: Complex<f64>,
}

impl Viewport {
    /// Constructor.  Takes the output buffer's dimensions in pixels,
    /// both of which must be positive; the caller (the renderer)
    /// validates them before building a Viewport.
    pub fn new(width: u32, height: u32) -> Viewport {
        let scale = PLANE_SPAN / f64::from(width.min(height));
        let topleft = Complex::new(
            -f64::from(width) * scale / 2.0,
            f64::from(height) * scale / 2.0,
        );
        Viewport {
            width,
            height,
            scale,
            topleft,
        }
    }

    /// The total number of pixels in the viewport.  Used to size the
    /// output buffer.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Describes whether the viewport contains any pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Given the row and column of a pixel, return the complex number
    /// that corresponds to the equivalent location on the plane
    /// window.  Purely arithmetic; total for every in-range pixel.
    pub fn point_for(&self, row: u32, col: u32) -> Complex<f64> {
        Complex::new(
            self.topleft.re + f64::from(col) * self.scale,
            self.topleft.im - f64::from(row) * self.scale,
        )
    }
}
