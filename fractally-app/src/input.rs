use eframe::egui;

use crate::event::{InputEvent, Key, PointerButton};

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

fn map_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::ArrowLeft => Some(Key::Left),
        egui::Key::ArrowRight => Some(Key::Right),
        egui::Key::ArrowUp => Some(Key::Up),
        egui::Key::ArrowDown => Some(Key::Down),
        egui::Key::Plus | egui::Key::Equals => Some(Key::Plus),
        egui::Key::Minus => Some(Key::Minus),
        _ => None,
    }
}

/// Canvas-relative integer pixel position.
fn canvas_pos(pos: egui::Pos2, canvas: egui::Rect) -> (i32, i32) {
    (
        (pos.x - canvas.min.x).floor() as i32,
        (pos.y - canvas.min.y).floor() as i32,
    )
}

/// Points of smooth scrolling that count as one wheel line.
const POINTS_PER_LINE: f32 = 50.0;

/// Wheel direction in the controller's convention: scrolling up (positive
/// egui `y`) narrows the view.
fn wheel_delta(scroll_y: f32) -> i32 {
    if scroll_y > 0.0 {
        -1
    } else if scroll_y < 0.0 {
        1
    } else {
        0
    }
}

/// Fold one frame of wheel scrolling into at most one tick.
///
/// Trackpads deliver many small `Point` deltas per frame; those are summed
/// and converted to lines, and less than a line of travel is dropped.
fn fold_wheel(
    deltas: impl IntoIterator<Item = (egui::MouseWheelUnit, f32)>,
) -> Option<InputEvent> {
    let lines: f32 = deltas
        .into_iter()
        .map(|(unit, y)| match unit {
            egui::MouseWheelUnit::Point => y / POINTS_PER_LINE,
            egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => y,
        })
        .sum();
    if lines.abs() < 1.0 {
        return None;
    }
    Some(InputEvent::Wheel {
        delta: wheel_delta(lines),
    })
}

/// Translate one raw egui event into the controller's vocabulary.
pub(crate) fn translate_event(event: &egui::Event, canvas: egui::Rect) -> Option<InputEvent> {
    match event {
        egui::Event::PointerMoved(pos) => {
            let (x, y) = canvas_pos(*pos, canvas);
            Some(InputEvent::PointerMove { x, y })
        }
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = map_button(*button)?;
            let (x, y) = canvas_pos(*pos, canvas);
            if *pressed {
                // Presses outside the canvas never start a gesture.
                canvas.contains(*pos).then_some(InputEvent::PointerDown { button, x, y })
            } else {
                Some(InputEvent::PointerUp { button, x, y })
            }
        }
        egui::Event::Key {
            key, pressed: true, ..
        } => map_key(*key).map(|key| InputEvent::KeyDown { key }),
        _ => None,
    }
}

/// Collect this frame's input for the canvas occupying `canvas`.
pub(crate) fn collect_input(ctx: &egui::Context, canvas: egui::Rect) -> Vec<InputEvent> {
    ctx.input(|i| {
        let mut events: Vec<InputEvent> = i
            .events
            .iter()
            .filter_map(|event| translate_event(event, canvas))
            .collect();
        let wheel = i.events.iter().filter_map(|event| match event {
            egui::Event::MouseWheel { unit, delta, .. } => Some((*unit, delta.y)),
            _ => None,
        });
        events.extend(fold_wheel(wheel));
        events
    })
}
