use fractally_core::Color;

use crate::error::RenderError;

/// A `width × height` grid of packed 32-bit colour cells, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// One cell per pixel; index `y * width + x`.
    pub pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with [`Color::BACKGROUND`].
    ///
    /// A zero dimension yields an empty buffer rather than an error; the
    /// renderer refuses to draw into it.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        let mut buffer = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        buffer.resize(width, height)?;
        Ok(buffer)
    }

    /// Reallocate for new dimensions. Existing contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> crate::Result<()> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RenderError::Allocation { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation { width, height })?;
        pixels.resize(len, Color::BACKGROUND.0);

        self.width = width;
        self.height = height;
        self.pixels = pixels;
        Ok(())
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The colour at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .map(|&p| Color(p))
    }

    /// The rectangle covering the whole buffer.
    pub fn full_rect(&self) -> DirtyRect {
        DirtyRect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

/// Region of the buffer that changed and must be shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_background() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        assert_eq!(buf.pixels.len(), 12);
        assert!(buf.pixels.iter().all(|&p| p == 0));
        assert!(!buf.is_empty());
    }

    #[test]
    fn zero_dimension_is_empty() {
        let buf = PixelBuffer::new(0, 10).unwrap();
        assert!(buf.is_empty());
        assert!(buf.pixels.is_empty());
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.pixels[0] = 0xdead;
        buf.resize(5, 7).unwrap();
        assert_eq!((buf.width, buf.height), (5, 7));
        assert_eq!(buf.pixels.len(), 35);
        assert_eq!(buf.pixels[0], 0);
    }

    #[test]
    fn pixel_is_row_major() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        buf.pixels[3 + 2] = 7;
        assert_eq!(buf.pixel(2, 1), Some(Color(7)));
        assert_eq!(buf.pixel(3, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
    }

    #[test]
    fn full_rect_covers_buffer() {
        let buf = PixelBuffer::new(640, 480).unwrap();
        assert_eq!(
            buf.full_rect(),
            DirtyRect {
                x: 0,
                y: 0,
                width: 640,
                height: 480
            }
        );
    }
}
