use eframe::egui;
use tracing::trace;

use fractally_core::Color;
use fractally_render::{DirtyRect, PixelBuffer};

use crate::surface::{HostSurface, PreviewTransform};

/// [`HostSurface`] backed by an egui texture.
///
/// The buffer is uploaded lazily: `update_display` only marks it dirty and
/// the next [`paint`](Self::paint) call pushes it to the GPU.
pub(crate) struct EguiSurface {
    buffer: PixelBuffer,
    texture: Option<egui::TextureHandle>,
    dirty: bool,
    preview: Option<PreviewTransform>,
}

impl EguiSurface {
    pub(crate) fn new() -> Self {
        Self {
            buffer: PixelBuffer {
                width: 0,
                height: 0,
                pixels: Vec::new(),
            },
            texture: None,
            dirty: false,
            preview: None,
        }
    }

    /// Draw the last raster into `canvas`, through the preview transform if
    /// one is set. Uncovered canvas is left black.
    pub(crate) fn paint(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        canvas: egui::Rect,
    ) {
        if self.dirty {
            self.upload(ctx);
        }

        painter.rect_filled(canvas, 0.0, egui::Color32::BLACK);
        let Some(ref tex) = self.texture else {
            return;
        };

        let draw_rect = match self.preview {
            Some(t) => preview_rect(&t, canvas),
            None => canvas,
        };
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter
            .with_clip_rect(canvas)
            .image(tex.id(), draw_rect, uv, egui::Color32::WHITE);
    }

    fn upload(&mut self, ctx: &egui::Context) {
        self.dirty = false;
        if self.buffer.is_empty() {
            self.texture = None;
            return;
        }
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [self.buffer.width as usize, self.buffer.height as usize],
            &to_rgba(&self.buffer),
        );
        self.texture = Some(ctx.load_texture("fractal", image, egui::TextureOptions::LINEAR));
    }
}

/// Expand packed cells to opaque RGBA bytes: red, green, then the accent
/// byte in the blue slot.
fn to_rgba(buffer: &PixelBuffer) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(buffer.pixels.len() * 4);
    for &cell in &buffer.pixels {
        let c = Color(cell);
        rgba.extend_from_slice(&[c.red(), c.green(), c.accent(), 255]);
    }
    rgba
}

/// Canvas rectangle the raster occupies under `t`. Transform coordinates
/// are canvas-relative; egui wants absolute ones.
fn preview_rect(t: &PreviewTransform, canvas: egui::Rect) -> egui::Rect {
    let (x0, y0) = t.apply(0.0, 0.0);
    let (x1, y1) = t.apply(canvas.width(), canvas.height());
    egui::Rect::from_min_max(
        canvas.min + egui::vec2(x0, y0),
        canvas.min + egui::vec2(x1, y1),
    )
}

impl HostSurface for EguiSurface {
    fn init_surface(&mut self, width: u32, height: u32) -> fractally_render::Result<()> {
        self.buffer = PixelBuffer::new(width, height)?;
        self.dirty = true;
        Ok(())
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> fractally_render::Result<()> {
        self.buffer.resize(width, height)?;
        self.dirty = true;
        Ok(())
    }

    fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    fn update_display(&mut self, dirty: DirtyRect) {
        trace!(?dirty, "Display update");
        self.dirty = true;
    }

    fn set_preview_transform(&mut self, transform: PreviewTransform) {
        self.preview = Some(transform);
    }

    fn clear_preview_transform(&mut self) {
        self.preview = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_layout() {
        let mut buffer = PixelBuffer::new(2, 1).unwrap();
        buffer.pixels[1] = Color::from_escape_ratio(0.0).0;
        assert_eq!(to_rgba(&buffer), vec![0, 0, 0, 255, 255, 0, 56, 255]);
    }

    #[test]
    fn drag_preview_shifts_rect() {
        let canvas = egui::Rect::from_min_size(egui::pos2(0.0, 20.0), egui::vec2(300.0, 200.0));
        let r = preview_rect(&PreviewTransform::translate(30.0, -10.0), canvas);
        assert_eq!(r.min, egui::pos2(30.0, 10.0));
        assert_eq!(r.size(), egui::vec2(300.0, 200.0));
    }

    #[test]
    fn zoom_preview_scales_about_pivot() {
        let canvas = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 200.0));
        let r = preview_rect(&PreviewTransform::zoom_about(0.5, 100.0, 100.0), canvas);
        assert_eq!(r.min, egui::pos2(50.0, 50.0));
        assert_eq!(r.max, egui::pos2(200.0, 150.0));
    }

    #[test]
    fn surface_tracks_preview_and_dirty_flag() {
        let mut surface = EguiSurface::new();
        surface.init_surface(4, 4).unwrap();
        assert!(surface.dirty);
        surface.set_preview_transform(PreviewTransform::translate(1.0, 2.0));
        assert!(surface.preview.is_some());
        surface.clear_preview_transform();
        assert!(surface.preview.is_none());
        surface.resize_surface(8, 2).unwrap();
        assert_eq!(surface.pixels_mut().pixels.len(), 16);
    }
}
