use crate::complex::Complex;
use crate::error::CoreError;

/// Where the viewer is looking: the plane point under the reference pixel
/// and how many plane units the window spans horizontally.
///
/// `scale` is always positive and finite. Every mutation goes through a
/// multiplicative factor that is itself positive, so the invariant holds
/// for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    pub scale: f64,
}

impl ViewState {
    pub const DEFAULT_CENTER: Complex = Complex { re: -0.15, im: 0.0 };
    pub const DEFAULT_SCALE: f64 = 1.0;

    pub fn new(center: Complex, scale: f64) -> crate::Result<Self> {
        if scale <= 0.0 || !scale.is_finite() {
            return Err(CoreError::InvalidScale(scale));
        }
        Ok(Self { center, scale })
    }

    /// Shift the centre by a plane-space offset.
    #[inline]
    pub fn pan(&mut self, delta: Complex) {
        self.center += delta;
    }

    /// Multiply the scale by `factor`. Values above 1 show more of the plane.
    #[inline]
    pub fn zoom(&mut self, factor: f64) {
        debug_assert!(factor > 0.0, "zoom factor must be positive");
        self.scale *= factor;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: Self::DEFAULT_CENTER,
            scale: Self::DEFAULT_SCALE,
        }
    }
}
