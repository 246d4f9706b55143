use crate::complex::Complex;
use crate::error::CoreError;
use crate::view::ViewState;

/// Horizontal offset of the reference pixel, as a fraction of the width.
pub const X_OFFSET: f64 = 0.625;
/// Vertical offset of the reference pixel, as a fraction of the height.
pub const Y_OFFSET: f64 = 0.5;
/// Vertical compression applied to normalised y before scaling.
pub const Y_COMPRESSION: f64 = 1.5;

/// Map a pixel to the complex plane for a `width × height` window.
///
/// `width` and `height` must be non-zero; [`Viewport::new`] is the checked
/// way to get here.
#[inline]
pub fn to_plane(px: i32, py: i32, width: u32, height: u32, view: &ViewState) -> Complex {
    debug_assert!(width > 0 && height > 0, "to_plane needs a non-empty window");
    let nx = px as f64 / width as f64 - X_OFFSET;
    let ny = (py as f64 / height as f64 - Y_OFFSET) / Y_COMPRESSION;
    Complex::new(
        nx * view.scale + view.center.re,
        ny * view.scale + view.center.im,
    )
}

/// A view state bound to concrete window dimensions.
///
/// Pixel `(0, 0)` is the top-left corner and plane-y grows downward with
/// pixel-y. The reference pixel `(0.625·w, 0.5·h)` maps exactly onto
/// `view.center`, which frames the main lobe of the set in a landscape
/// window at the default zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub view: ViewState,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(view: ViewState, width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport {
                reason: format!("dimensions must be > 0, got {width}×{height}"),
            });
        }
        Ok(Self {
            view,
            width,
            height,
        })
    }

    #[inline]
    pub fn pixel_to_plane(&self, px: i32, py: i32) -> Complex {
        to_plane(px, py, self.width, self.height, &self.view)
    }

    /// Normalised offset of a pixel from the window centre, used to keep
    /// the wheel pivot fixed while the scale changes.
    ///
    /// Unlike [`pixel_to_plane`](Self::pixel_to_plane) this measures from
    /// the geometric centre `(w/2, h/2)`.
    pub fn pivot_offset(&self, px: i32, py: i32) -> Complex {
        let w = self.width as f64;
        let h = self.height as f64;
        Complex::new(
            (px as f64 - w / 2.0) / w,
            (py as f64 - h / 2.0) / (h * Y_COMPRESSION),
        )
    }

    /// Plane point the wheel zoom pivots around for a pointer at `(px, py)`.
    pub fn pivot_at(&self, px: i32, py: i32) -> Complex {
        self.view.center + self.pivot_offset(px, py) * self.view.scale
    }

    /// Plane-space centre shift for a drag released at `release` after
    /// grabbing at `anchor`. Content follows the pointer, so the centre
    /// moves opposite to the drag.
    pub fn drag_delta(&self, anchor: (i32, i32), release: (i32, i32)) -> Complex {
        let dx = (anchor.0 - release.0) as f64;
        let dy = (anchor.1 - release.1) as f64;
        Complex::new(
            dx / self.width as f64 * self.view.scale,
            dy / (self.height as f64 * Y_COMPRESSION) * self.view.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn reference_pixel_maps_to_center() {
        let view = ViewState::new(Complex::new(0.3, -0.7), 2.5).unwrap();
        let vp = Viewport::new(view, 800, 200).unwrap();
        // 0.625 · 800 = 500, 0.5 · 200 = 100
        assert_eq!(vp.pixel_to_plane(500, 100), view.center);
    }

    #[test]
    fn corners_follow_offset_constants() {
        let vp = Viewport::new(ViewState::default(), 300, 200).unwrap();

        let tl = vp.pixel_to_plane(0, 0);
        assert!((tl.re - (-0.625 - 0.15)).abs() < EPSILON);
        assert!((tl.im - (-0.5 / 1.5)).abs() < EPSILON);

        let br = vp.pixel_to_plane(300, 200);
        assert!((br.re - (0.375 - 0.15)).abs() < EPSILON);
        assert!((br.im - (0.5 / 1.5)).abs() < EPSILON);
    }

    #[test]
    fn scale_stretches_around_center() {
        let view = ViewState::new(Complex::new(1.0, 1.0), 4.0).unwrap();
        let p = to_plane(0, 0, 100, 100, &view);
        assert!((p.re - (1.0 - 0.625 * 4.0)).abs() < EPSILON);
        assert!((p.im - (1.0 - 0.5 / 1.5 * 4.0)).abs() < EPSILON);
    }

    #[test]
    fn invalid_dimensions() {
        assert!(Viewport::new(ViewState::default(), 0, 100).is_err());
        assert!(Viewport::new(ViewState::default(), 100, 0).is_err());
    }

    #[test]
    fn pivot_offset_measures_from_window_centre() {
        let vp = Viewport::new(ViewState::default(), 300, 200).unwrap();
        let mid = vp.pivot_offset(150, 100);
        assert_eq!(mid, Complex::ZERO);

        let corner = vp.pivot_offset(0, 0);
        assert!((corner.re - (-0.5)).abs() < EPSILON);
        assert!((corner.im - (-100.0 / 300.0)).abs() < EPSILON);
    }

    #[test]
    fn pivot_at_window_centre_is_view_center() {
        let view = ViewState::new(Complex::new(-0.5, 0.25), 0.1).unwrap();
        let vp = Viewport::new(view, 640, 480).unwrap();
        assert_eq!(vp.pivot_at(320, 240), view.center);
    }

    #[test]
    fn drag_delta_opposes_pointer_motion() {
        let view = ViewState::new(Complex::ZERO, 2.0).unwrap();
        let vp = Viewport::new(view, 300, 200).unwrap();
        let d = vp.drag_delta((100, 50), (160, 20));
        assert!((d.re - (-60.0 / 300.0 * 2.0)).abs() < EPSILON);
        assert!((d.im - (30.0 / 300.0 * 2.0)).abs() < EPSILON);
    }
}
