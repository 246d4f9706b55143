use crate::color::Color;
use crate::complex::Complex;

/// Iteration budget at `scale == 1.0`.
pub const BASE_ITERATIONS: f64 = 50.0;

/// Squared bailout radius: an orbit with `|z|² > 4` has escaped.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// The outcome of iterating one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationResult {
    /// The orbit left the bailout circle on step `iterations` (0-based).
    Escaped { iterations: u32 },

    /// The orbit stayed bounded for the whole iteration budget.
    Interior,
}

/// Iteration cap for a given view scale: `⌊50 / scale^¼⌋`, at least 1.
///
/// Zooming out (larger scale) lowers the cap to keep frame time bounded;
/// zooming in raises it to resolve finer detail.
#[inline]
pub fn max_iterations(scale: f64) -> u32 {
    let cap = (BASE_ITERATIONS / scale.sqrt().sqrt()).floor();
    (cap as u32).max(1)
}

/// Run `z ← z² + c` from `z₀ = 0` for at most `max_iter` steps.
#[inline]
pub fn escape_time(c: Complex, max_iter: u32) -> IterationResult {
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let (mut xsq, mut ysq) = (0.0_f64, 0.0_f64);

    for n in 0..max_iter {
        y = 2.0 * x * y + c.im;
        x = xsq - ysq + c.re;
        xsq = x * x;
        ysq = y * y;

        if xsq + ysq > ESCAPE_RADIUS_SQ {
            return IterationResult::Escaped { iterations: n };
        }
    }

    IterationResult::Interior
}

/// Colour of the plane point `(plane_x, plane_y)` at the given view scale.
///
/// Points that never escape get [`Color::BACKGROUND`].
pub fn iterate(plane_x: f64, plane_y: f64, scale: f64) -> Color {
    let max_iter = max_iterations(scale);
    match escape_time(Complex::new(plane_x, plane_y), max_iter) {
        IterationResult::Interior => Color::BACKGROUND,
        IterationResult::Escaped { iterations } => {
            Color::from_escape_ratio(iterations as f64 / max_iter as f64)
        }
    }
}
