// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Assembles a full fractal image.  The renderer walks every pixel of
//! the requested buffer in row-major order, maps it onto the plane,
//! runs the escape-time iteration, and writes the palette's color
//! into the pixel's slot.  Pixels carry no cross-dependencies, so the
//! threaded entry point hands disjoint row bands to scoped threads
//! and assembles the identical buffer in parallel.
extern crate crossbeam;

use itertools::iproduct;
use num::Complex;

use escape::escape_time;
use failure::Fail;
use palette::color_for;
use variant::FractalVariant;
use viewport::Viewport;

/// Bytes per RGBA pixel in the output buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Upper bound on either image dimension.  At four bytes per pixel
/// this caps a single buffer at 256MB, which keeps a typo in a width
/// field from looking like an out-of-memory bug.
pub const MAX_DIMENSION: u32 = 8192;

/// The ways a render request can be rejected.  Both are detected
/// before any pixel is computed; a failed call never allocates or
/// returns a partial buffer.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A dimension was zero or larger than [`MAX_DIMENSION`].
    #[fail(
        display = "image dimensions {}x{} are outside the supported range 1..={}",
        width, height, max
    )]
    InvalidDimension {
        /// The requested width in pixels.
        width: u32,
        /// The requested height in pixels.
        height: u32,
        /// The bound that was exceeded, [`MAX_DIMENSION`].
        max: u32,
    },
    /// The iteration cutoff was zero.
    #[fail(display = "the iteration cutoff must be at least 1")]
    InvalidCutoff,
}

/// Everything a single render call needs, fixed for the duration of
/// the call.  The parameter is the Julia constant; the Mandelbrot and
/// Burning Ship variants ignore it.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Which recurrence to iterate.
    pub variant: FractalVariant,
    /// The caller's complex parameter.
    pub parameter: Complex<f64>,
    /// Maximum iterations per orbit before presuming the point interior.
    pub cutoff: u32,
}

/// Takes a validated request and produces RGBA buffers from it.  Once
/// constructed, a renderer is immutable and its output is a pure
/// function of the request: the sequential and threaded paths yield
/// byte-identical buffers.
#[derive(Debug)]
pub struct Renderer {
    request: RenderRequest,
    viewport: Viewport,
}

impl Renderer {
    /// Validates the request's dimensions and cutoff, then fixes the
    /// plane window.  All failures happen here; the render methods
    /// themselves cannot fail.
    pub fn new(request: RenderRequest) -> Result<Renderer, RenderError> {
        let dimension_ok = |d: u32| d >= 1 && d <= MAX_DIMENSION;
        if !dimension_ok(request.width) || !dimension_ok(request.height) {
            return Err(RenderError::InvalidDimension {
                width: request.width,
                height: request.height,
                max: MAX_DIMENSION,
            });
        }
        if request.cutoff == 0 {
            return Err(RenderError::InvalidCutoff);
        }
        let viewport = Viewport::new(request.width, request.height);
        Ok(Renderer { request, viewport })
    }

    /// The request this renderer was built from.
    pub fn request(&self) -> &RenderRequest {
        &self.request
    }

    /// Render every pixel on the calling thread, row-major from the
    /// top-left.  The returned buffer holds exactly
    /// `width * height * 4` bytes.
    pub fn render(&self) -> Vec<u8> {
        let mut buffer = vec![0 as u8; self.viewport.len() * BYTES_PER_PIXEL];
        self.render_band(0, &mut buffer);
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count as an option.  The buffer is split into disjoint
    /// row bands, one per thread, so no locking is needed; every band
    /// lands exactly where the sequential path would have put it.
    pub fn render_threaded(&self, threads: usize) -> Vec<u8> {
        let threads = threads.max(1);
        let row_bytes = self.request.width as usize * BYTES_PER_PIXEL;
        let band_rows = (self.request.height as usize + threads - 1) / threads;
        let mut buffer = vec![0 as u8; self.viewport.len() * BYTES_PER_PIXEL];
        crossbeam::scope(|spawner| {
            for (index, band) in buffer.chunks_mut(band_rows * row_bytes).enumerate() {
                spawner.spawn(move |_| {
                    self.render_band((index * band_rows) as u32, band);
                });
            }
        })
        .unwrap();
        buffer
    }

    /// This is the 'primary' helper function: fill a band of whole
    /// rows, the first of which is `top` in image coordinates.  The
    /// band's length decides how many rows it covers.
    fn render_band(&self, top: u32, band: &mut [u8]) {
        let row_bytes = self.request.width as usize * BYTES_PER_PIXEL;
        let rows = (band.len() / row_bytes) as u32;
        let pixels = band.chunks_mut(BYTES_PER_PIXEL);
        for ((row, col), pixel) in iproduct!(0..rows, 0..self.request.width).zip(pixels) {
            let point = self.viewport.point_for(top + row, col);
            let (z0, c) = self.request.variant.seed(point, self.request.parameter);
            let result = escape_time(self.request.variant, z0, c, self.request.cutoff);
            pixel.copy_from_slice(&color_for(result, self.request.cutoff));
        }
    }
}
