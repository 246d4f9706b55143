use std::time::Instant;

use eframe::egui;
use tracing::{error, info};

use fractally_core::ViewState;
use fractally_render::RenderStats;

use crate::controller::InteractionController;
use crate::egui_surface::EguiSurface;
use crate::event::InputEvent;
use crate::input::collect_input;
use crate::preferences::AppPreferences;

const WINDOW_TITLE: &str = "Fractally";

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

pub(crate) struct FractallyApp {
    controller: InteractionController<EguiSurface>,
    preferences: AppPreferences,
    /// Canvas size the controller last saw, in points.
    canvas_size: [u32; 2],
    /// Render count reflected in the window title.
    titled_render: u64,
}

impl FractallyApp {
    pub(crate) fn new(preferences: AppPreferences) -> fractally_render::Result<Self> {
        let w = preferences.window_width as u32;
        let h = preferences.window_height as u32;
        let controller =
            InteractionController::new(EguiSurface::new(), w, h, preferences.wheel_settle())?;
        Ok(Self {
            controller,
            preferences,
            canvas_size: [w, h],
            titled_render: 0,
        })
    }

    fn dispatch(&mut self, events: Vec<InputEvent>, now: Instant) {
        for event in events {
            if let Err(e) = self.controller.handle(event, now) {
                fatal(e);
            }
        }
        if let Err(e) = self.controller.poll(now) {
            fatal(e);
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let count = self.controller.render_count();
        if count == self.titled_render {
            return;
        }
        self.titled_render = count;
        let title = window_title(self.controller.view(), self.controller.last_render());
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
    }
}

fn window_title(view: &ViewState, stats: Option<&RenderStats>) -> String {
    match stats {
        Some(stats) => format!(
            "{WINDOW_TITLE} - {} @ {:.3e} ({} iter, {} ms)",
            view.center,
            view.scale,
            stats.max_iterations,
            stats.elapsed.as_millis()
        ),
        None => WINDOW_TITLE.to_string(),
    }
}

/// Buffer allocation failures cannot be recovered from.
fn fatal(e: fractally_render::RenderError) -> ! {
    error!("Fatal render error: {e}");
    std::process::exit(1);
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for FractallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (response, painter) =
                    ui.allocate_painter(available, egui::Sense::click_and_drag());
                let canvas = response.rect;

                let mut events = Vec::new();
                let size = [canvas.width().max(0.0) as u32, canvas.height().max(0.0) as u32];
                if size != self.canvas_size {
                    self.canvas_size = size;
                    events.push(InputEvent::Resize {
                        width: size[0],
                        height: size[1],
                    });
                }
                events.extend(collect_input(ctx, canvas));
                self.dispatch(events, Instant::now());

                if self.controller.is_dragging() {
                    ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
                }
                self.controller.surface_mut().paint(ctx, &painter, canvas);
            });

        self.update_title(ctx);

        if let Some(remaining) = self.controller.settle_remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.preferences.window_width = self.canvas_size[0].max(1) as f32;
        self.preferences.window_height = self.canvas_size[1].max(1) as f32;
        self.preferences.save();
        info!("Saved preferences on exit");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub(crate) fn run(prefs: AppPreferences) -> eframe::Result {
    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([prefs.window_width, prefs.window_height]);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "fractally",
        options,
        Box::new(move |_cc| Ok(Box::new(FractallyApp::new(prefs)?))),
    )
}
