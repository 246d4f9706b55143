use fractally_render::{DirtyRect, PixelBuffer};

/// A cheap compositing hint: show the last raster moved and scaled instead
/// of recomputing it.
///
/// A canvas point `p` is drawn at `pivot + (p − pivot)·zoom + translate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PreviewTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub zoom: f32,
    pub pivot_x: f32,
    pub pivot_y: f32,
}

impl PreviewTransform {
    /// Pure translation, used while dragging.
    pub(crate) fn translate(dx: f32, dy: f32) -> Self {
        Self {
            translate_x: dx,
            translate_y: dy,
            zoom: 1.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
        }
    }

    /// Pure scaling about a fixed canvas point, used while wheel-zooming.
    pub(crate) fn zoom_about(zoom: f32, pivot_x: f32, pivot_y: f32) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            zoom,
            pivot_x,
            pivot_y,
        }
    }

    /// Where the raster point `(x, y)` ends up on the canvas.
    pub(crate) fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.pivot_x + (x - self.pivot_x) * self.zoom + self.translate_x,
            self.pivot_y + (y - self.pivot_y) * self.zoom + self.translate_y,
        )
    }
}

/// What the interaction core needs from whatever owns the window.
///
/// The surface owns the pixel buffer; the controller borrows it to render
/// and then tells the surface which part changed. Windowing toolkits plug
/// in by implementing this trait.
pub(crate) trait HostSurface {
    /// Allocate the initial buffer for a `width × height` window.
    fn init_surface(&mut self, width: u32, height: u32) -> fractally_render::Result<()>;

    /// Reallocate the buffer after the window changed size.
    fn resize_surface(&mut self, width: u32, height: u32) -> fractally_render::Result<()>;

    /// The buffer the renderer writes into.
    fn pixels_mut(&mut self) -> &mut PixelBuffer;

    /// Pixels inside `dirty` changed and must be shown.
    fn update_display(&mut self, dirty: DirtyRect);

    fn set_preview_transform(&mut self, transform: PreviewTransform);

    fn clear_preview_transform(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_every_point() {
        let t = PreviewTransform::translate(12.0, -4.0);
        assert_eq!(t.apply(0.0, 0.0), (12.0, -4.0));
        assert_eq!(t.apply(100.0, 50.0), (112.0, 46.0));
    }

    #[test]
    fn zoom_keeps_pivot_fixed() {
        let t = PreviewTransform::zoom_about(0.5, 60.0, 40.0);
        assert_eq!(t.apply(60.0, 40.0), (60.0, 40.0));
        assert_eq!(t.apply(0.0, 0.0), (30.0, 20.0));
        assert_eq!(t.apply(160.0, 140.0), (110.0, 90.0));
    }
}
