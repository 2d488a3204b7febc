#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! An escape-time fractal takes a point on the complex plane and
//! repeatedly applies a recurrence to it, measuring how quickly the
//! value goes to infinity.  That "velocity" is the number used to
//! color the corresponding pixel; points that never leave the escape
//! radius within the iteration cutoff are presumed to belong to the
//! set itself and are painted a reserved interior color.
//!
//! This crate renders the Julia family, the Mandelbrot set, and the
//! Burning Ship into a contiguous RGBA byte buffer, row-major from the
//! top-left, ready to be blitted onto any 2D pixel surface.  The
//! library owns no display surface and performs no I/O; [`draw`] is a
//! pure function from its arguments to a buffer.

extern crate crossbeam;
extern crate failure;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod escape;
pub mod palette;
pub mod render;
pub mod variant;
pub mod viewport;

pub use escape::{escape_time, PixelResult};
pub use render::{RenderError, RenderRequest, Renderer};
pub use variant::FractalVariant;
pub use viewport::Viewport;

use num::Complex;

/// Render a fractal into a fresh RGBA buffer.
///
/// `selector` names the variant; unrecognized or empty selectors fall
/// back to [`FractalVariant`]'s default (Julia) rather than failing,
/// so a caller may pass `""` to mean "just draw something."  `real`
/// and `imaginary` form the Julia parameter and are ignored by the
/// Mandelbrot and Burning Ship variants.
///
/// The returned buffer holds exactly `width * height * 4` bytes, one
/// RGBA quadruple per pixel, rows top to bottom.  Identical arguments
/// always produce byte-identical buffers.
pub fn draw(
    width: u32,
    height: u32,
    selector: &str,
    real: f64,
    imaginary: f64,
    cutoff: u32,
) -> Result<Vec<u8>, RenderError> {
    let request = RenderRequest {
        width,
        height,
        variant: FractalVariant::from_selector(selector),
        parameter: Complex::new(real, imaginary),
        cutoff,
    };
    Ok(Renderer::new(request)?.render())
}
