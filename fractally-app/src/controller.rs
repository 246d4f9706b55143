use std::time::{Duration, Instant};

use tracing::{debug, trace};

use fractally_core::{Complex, ViewState, Viewport};
use fractally_render::{render, RenderStats};

use crate::debounce::Debounce;
use crate::event::{InputEvent, Key, PointerButton};
use crate::surface::{HostSurface, PreviewTransform};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Arrow-key pan, as a fraction of the scale.
pub(crate) const KEY_PAN_X: f64 = 0.18;
pub(crate) const KEY_PAN_Y: f64 = 0.12;
/// Scale multiplier for the `+` key.
pub(crate) const KEY_ZOOM_IN: f64 = 0.8;
/// Scale multiplier for the `-` key.
pub(crate) const KEY_ZOOM_OUT: f64 = 1.25;
/// Default quiet period after the last wheel tick before the full render.
pub(crate) const DEFAULT_WHEEL_SETTLE: Duration = Duration::from_secs(1);

/// Per-tick wheel factor: two ticks equal one key step.
fn wheel_factor(delta: i32) -> f64 {
    if delta > 0 {
        KEY_ZOOM_OUT.sqrt()
    } else {
        KEY_ZOOM_IN.sqrt()
    }
}

// ---------------------------------------------------------------------------
// Gestures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGesture {
    anchor_x: i32,
    anchor_y: i32,
}

/// One burst of wheel ticks, alive until the debounce fires.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WheelGesture {
    /// Product of every tick factor so far.
    accumulated_scale: f64,
    /// Plane point the burst zooms around, fixed on the first tick.
    pivot: Complex,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the view state and turns decoded input into previews and renders.
///
/// Drags and wheel bursts are shown by transforming the last raster; the
/// expensive full render only runs when a gesture ends (button release or
/// wheel settle). Key presses render immediately.
pub(crate) struct InteractionController<S: HostSurface> {
    surface: S,
    view: ViewState,
    width: u32,
    height: u32,
    /// Last known pointer position, tracked even when idle.
    pointer: (i32, i32),
    drag: Option<DragGesture>,
    wheel: Option<WheelGesture>,
    settle: Debounce,
    render_count: u64,
    last_render: Option<RenderStats>,
}

impl<S: HostSurface> InteractionController<S> {
    /// Allocate the surface and draw the initial frame.
    pub(crate) fn new(
        mut surface: S,
        width: u32,
        height: u32,
        wheel_settle: Duration,
    ) -> fractally_render::Result<Self> {
        surface.init_surface(width, height)?;
        let mut controller = Self {
            surface,
            view: ViewState::default(),
            width,
            height,
            pointer: (0, 0),
            drag: None,
            wheel: None,
            settle: Debounce::new(wheel_settle),
            render_count: 0,
            last_render: None,
        };
        controller.refresh()?;
        Ok(controller)
    }

    pub(crate) fn view(&self) -> &ViewState {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn render_count(&self) -> u64 {
        self.render_count
    }

    pub(crate) fn last_render(&self) -> Option<&RenderStats> {
        self.last_render.as_ref()
    }

    /// How long until a pending wheel commit is due.
    pub(crate) fn settle_remaining(&self, now: Instant) -> Option<Duration> {
        self.settle.remaining(now)
    }

    fn viewport(&self) -> Option<Viewport> {
        Viewport::new(self.view, self.width, self.height).ok()
    }

    /// Feed one decoded input event.
    pub(crate) fn handle(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> fractally_render::Result<()> {
        match event {
            InputEvent::PointerDown { button, x, y } => {
                self.pointer = (x, y);
                if button == PointerButton::Primary {
                    self.begin_drag(x, y)?;
                }
                Ok(())
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = (x, y);
                self.preview_drag(x, y);
                Ok(())
            }
            InputEvent::PointerUp { button, x, y } => {
                self.pointer = (x, y);
                if button == PointerButton::Primary {
                    self.commit_drag(x, y)?;
                }
                Ok(())
            }
            InputEvent::Wheel { delta } => {
                self.wheel_tick(delta, now);
                Ok(())
            }
            InputEvent::KeyDown { key } => self.key_step(key),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Commit a settled wheel burst. Returns `true` if a commit happened.
    pub(crate) fn poll(&mut self, now: Instant) -> fractally_render::Result<bool> {
        if !self.settle.fire_if_due(now) {
            return Ok(false);
        }
        if let Some(wheel) = self.wheel.take() {
            debug!(
                accumulated = wheel.accumulated_scale,
                scale = self.view.scale,
                "Wheel zoom settled"
            );
        }
        self.surface.clear_preview_transform();
        self.refresh()?;
        Ok(true)
    }

    /// Drop a pending wheel burst without rendering. The view keeps the
    /// zoom it reached; the caller renders it. Returns `true` if a burst
    /// was pending.
    fn end_wheel_burst(&mut self) -> bool {
        let Some(wheel) = self.wheel.take() else {
            return false;
        };
        self.settle.cancel();
        self.surface.clear_preview_transform();
        debug!(
            accumulated = wheel.accumulated_scale,
            scale = self.view.scale,
            "Wheel zoom interrupted"
        );
        true
    }

    // -- Drag ------------------------------------------------------------

    /// A drag translates the last raster, so a zoom still in preview is
    /// rendered first.
    fn begin_drag(&mut self, x: i32, y: i32) -> fractally_render::Result<()> {
        if self.end_wheel_burst() {
            self.refresh()?;
        }
        trace!(x, y, "Drag started");
        self.drag = Some(DragGesture {
            anchor_x: x,
            anchor_y: y,
        });
        Ok(())
    }

    fn preview_drag(&mut self, x: i32, y: i32) {
        let Some(drag) = self.drag else {
            return;
        };
        let dx = drag.anchor_x - x;
        let dy = drag.anchor_y - y;
        self.surface
            .set_preview_transform(PreviewTransform::translate(-dx as f32, -dy as f32));
    }

    fn commit_drag(&mut self, x: i32, y: i32) -> fractally_render::Result<()> {
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };
        if let Some(viewport) = self.viewport() {
            let delta = viewport.drag_delta((drag.anchor_x, drag.anchor_y), (x, y));
            self.view.pan(delta);
            debug!(
                dx = delta.re,
                dy = delta.im,
                center = %self.view.center,
                "Drag committed"
            );
        }
        self.surface.clear_preview_transform();
        self.refresh()
    }

    // -- Wheel -----------------------------------------------------------

    fn wheel_tick(&mut self, delta: i32, now: Instant) {
        if delta == 0 || self.drag.is_some() {
            return;
        }
        let Some(viewport) = self.viewport() else {
            return;
        };
        let (px, py) = self.pointer;
        let factor = wheel_factor(delta);

        let wheel = self.wheel.get_or_insert_with(|| WheelGesture {
            accumulated_scale: 1.0,
            pivot: viewport.pivot_at(px, py),
        });
        wheel.accumulated_scale *= factor;
        let wheel = *wheel;

        self.surface.set_preview_transform(PreviewTransform::zoom_about(
            (1.0 / wheel.accumulated_scale) as f32,
            px as f32,
            py as f32,
        ));

        // Keep the pivot under the same normalised offset as the scale moves.
        let offset = viewport.pivot_offset(px, py);
        self.view.zoom(factor);
        self.view.center = wheel.pivot - offset * self.view.scale;
        self.settle.schedule(now);

        trace!(
            factor,
            accumulated = wheel.accumulated_scale,
            scale = self.view.scale,
            "Wheel tick"
        );
    }

    // -- Keys ------------------------------------------------------------

    fn key_step(&mut self, key: Key) -> fractally_render::Result<()> {
        self.end_wheel_burst();
        let scale = self.view.scale;
        match key {
            Key::Left => self.view.pan(Complex::new(KEY_PAN_X * scale, 0.0)),
            Key::Right => self.view.pan(Complex::new(-KEY_PAN_X * scale, 0.0)),
            Key::Up => self.view.pan(Complex::new(0.0, KEY_PAN_Y * scale)),
            Key::Down => self.view.pan(Complex::new(0.0, -KEY_PAN_Y * scale)),
            Key::Plus => self.view.zoom(KEY_ZOOM_IN),
            Key::Minus => self.view.zoom(KEY_ZOOM_OUT),
        }
        debug!(?key, center = %self.view.center, scale = self.view.scale, "Key step");
        self.refresh()
    }

    // -- Layout & render -------------------------------------------------

    fn resize(&mut self, width: u32, height: u32) -> fractally_render::Result<()> {
        debug!(width, height, "Surface resized");
        self.end_wheel_burst();
        self.surface.resize_surface(width, height)?;
        self.width = width;
        self.height = height;
        self.refresh()
    }

    /// Full recompute of the buffer followed by a display update.
    /// An empty surface is skipped.
    fn refresh(&mut self) -> fractally_render::Result<()> {
        let buffer = self.surface.pixels_mut();
        if buffer.is_empty() {
            debug!(
                width = buffer.width,
                height = buffer.height,
                "Skipping render of empty surface"
            );
            return Ok(());
        }
        let stats = render(buffer, &self.view)?;
        let dirty = buffer.full_rect();
        self.surface.update_display(dirty);
        self.render_count += 1;
        self.last_render = Some(stats);
        Ok(())
    }
}
