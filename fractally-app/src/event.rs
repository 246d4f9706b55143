/// Pointer buttons as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    Left,
    Right,
    Up,
    Down,
    Plus,
    Minus,
}

/// Already-decoded input, in canvas pixel coordinates.
///
/// `Wheel::delta` follows the convention that positive values widen the
/// view (zoom out) and negative values narrow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum InputEvent {
    PointerDown { button: PointerButton, x: i32, y: i32 },
    PointerUp { button: PointerButton, x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    Wheel { delta: i32 },
    KeyDown { key: Key },
    Resize { width: u32, height: u32 },
}
