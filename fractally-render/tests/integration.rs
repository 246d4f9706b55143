use fractally_core::{Color, Complex, ViewState};
use fractally_render::{render, PixelBuffer};

#[test]
fn end_to_end_default_view() {
    let mut buffer = PixelBuffer::new(300, 200).unwrap();
    let stats = render(&mut buffer, &ViewState::default()).unwrap();

    assert_eq!((stats.width, stats.height), (300, 200));
    assert_eq!(buffer.pixel(187, 100), Some(Color::BACKGROUND));

    let has_color = buffer.pixels.iter().any(|&p| p != 0);
    assert!(has_color, "default view should contain escaped points");
}

#[test]
fn render_determinism() {
    let view = ViewState::new(Complex::new(-0.7, 0.3), 0.4).unwrap();
    let mut a = PixelBuffer::new(128, 96).unwrap();
    let mut b = PixelBuffer::new(128, 96).unwrap();

    render(&mut a, &view).unwrap();
    render(&mut b, &view).unwrap();

    assert_eq!(a.pixels, b.pixels, "renders must be deterministic");
}

#[test]
fn rerender_after_resize() {
    let view = ViewState::default();
    let mut buffer = PixelBuffer::new(300, 200).unwrap();
    render(&mut buffer, &view).unwrap();

    buffer.resize(150, 100).unwrap();
    let stats = render(&mut buffer, &view).unwrap();
    assert_eq!((stats.width, stats.height), (150, 100));
    assert_eq!(buffer.pixels.len(), 150 * 100);
    // 0.625 · 150 ≈ 93, still inside the main cardioid.
    assert_eq!(buffer.pixel(93, 50), Some(Color::BACKGROUND));
}

#[test]
fn zoomed_out_view_uses_lower_cap() {
    let view = ViewState::new(Complex::new(-0.15, 0.0), 16.0).unwrap();
    let mut buffer = PixelBuffer::new(64, 64).unwrap();
    let stats = render(&mut buffer, &view).unwrap();
    assert_eq!(stats.max_iterations, 25);
}
