use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use fractally_core::{iterate, max_iterations, ViewState, Viewport};

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// Summary of one full-frame pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub elapsed: Duration,
}

/// Recompute every cell of `buffer` for `view`.
///
/// Cells are written in row-major order matching the buffer layout. Rows
/// are independent, so they are colored in parallel on the rayon pool; the
/// call returns only after every row is written, so the caller can hand
/// the buffer to the display straight away.
///
/// An empty buffer is rejected with [`RenderError::InvalidDimensions`];
/// callers treat that as "nothing to draw".
pub fn render(buffer: &mut PixelBuffer, view: &ViewState) -> crate::Result<RenderStats> {
    if buffer.is_empty() {
        return Err(RenderError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let start = Instant::now();
    let viewport = Viewport::new(*view, buffer.width, buffer.height)?;
    let max_iter = max_iterations(view.scale);
    debug!(
        width = viewport.width,
        height = viewport.height,
        center = %view.center,
        scale = view.scale,
        max_iter,
        "Starting full render"
    );

    let scale = view.scale;
    buffer
        .pixels
        .par_chunks_exact_mut(viewport.width as usize)
        .enumerate()
        .for_each(|(py, row)| {
            for (px, cell) in row.iter_mut().enumerate() {
                let c = viewport.pixel_to_plane(px as i32, py as i32);
                *cell = iterate(c.re, c.im, scale).into();
            }
        });

    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        width = viewport.width,
        height = viewport.height,
        max_iter,
        "Render complete"
    );

    Ok(RenderStats {
        width: viewport.width,
        height: viewport.height,
        max_iterations: max_iter,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractally_core::{Color, Complex};

    #[test]
    fn fills_every_cell() {
        let mut buffer = PixelBuffer::new(64, 48).unwrap();
        let stats = render(&mut buffer, &ViewState::default()).unwrap();

        assert_eq!((stats.width, stats.height), (64, 48));
        assert_eq!(stats.max_iterations, 50);
        assert_eq!(buffer.pixels.len(), 64 * 48);
        assert!(buffer.pixels.iter().any(|&p| p != 0));
    }

    #[test]
    fn matches_row_major_reference() {
        let view = ViewState::new(Complex::new(-0.6, 0.2), 1.7).unwrap();
        let mut buffer = PixelBuffer::new(37, 23).unwrap();
        render(&mut buffer, &view).unwrap();

        let vp = Viewport::new(view, 37, 23).unwrap();
        for y in 0..23 {
            for x in 0..37 {
                let c = vp.pixel_to_plane(x, y);
                let expected = iterate(c.re, c.im, view.scale);
                assert_eq!(buffer.pixel(x as u32, y as u32), Some(expected));
            }
        }
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let mut buffer = PixelBuffer::new(0, 100).unwrap();
        let err = render(&mut buffer, &ViewState::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidDimensions {
                width: 0,
                height: 100
            }
        ));
    }

    #[test]
    fn overwrites_previous_contents() {
        let mut buffer = PixelBuffer::new(16, 16).unwrap();
        buffer.pixels.fill(0xffff_ffff);
        // Far outside the set: every cell escapes on the first step.
        let view = ViewState::new(Complex::new(50.0, 50.0), 1.0).unwrap();
        render(&mut buffer, &view).unwrap();
        let first_step = Color::from_escape_ratio(0.0).0;
        assert!(buffer.pixels.iter().all(|&p| p == first_step));
    }
}
