use std::f64::consts::PI;

/// A packed 32-bit colour cell as written into the pixel buffer.
///
/// Layout, low byte first: green, accent, red, unused. The accent byte is
/// the constant [`Color::ACCENT`] for every escaped point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Points inside the set.
    pub const BACKGROUND: Self = Self(0);

    /// Mid-tone written into byte 1 of every escaped colour.
    pub const ACCENT: u8 = 56;

    /// Pack a colour from the escape ratio `mu = n / max_iter` in `[0, 1)`.
    ///
    /// The ratio is bent through `sin(mu·π/2)`: slow escapes lean red, fast
    /// escapes lean green.
    pub fn from_escape_ratio(mu: f64) -> Self {
        let c = (mu / 2.0 * PI).sin();
        let green = (c * 255.0).round() as u32;
        let red = ((1.0 - c) * 255.0).round() as u32;
        Self(green | (Self::ACCENT as u32) << 8 | red << 16)
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn accent(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn is_background(self) -> bool {
        self == Self::BACKGROUND
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> u32 {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ratio_is_pure_red_with_accent() {
        let c = Color::from_escape_ratio(0.0);
        assert_eq!((c.red(), c.accent(), c.green()), (255, 56, 0));
        assert_eq!(c.0 >> 24, 0);
    }

    #[test]
    fn ratio_one_is_pure_green_with_accent() {
        let c = Color::from_escape_ratio(1.0);
        assert_eq!((c.red(), c.accent(), c.green()), (0, 56, 255));
    }

    #[test]
    fn midpoint_follows_sine_curve() {
        // sin(π/4) ≈ 0.7071 → green 180, red 75
        let c = Color::from_escape_ratio(0.5);
        assert_eq!(c.green(), 180);
        assert_eq!(c.red(), 75);
    }

    #[test]
    fn background_is_zero() {
        assert_eq!(u32::from(Color::BACKGROUND), 0);
        assert!(Color::BACKGROUND.is_background());
        assert!(!Color::from_escape_ratio(0.2).is_background());
    }
}
