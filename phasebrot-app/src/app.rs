use std::sync::mpsc;

use eframe::egui;
use tracing::{error, info, warn};

use phasebrot_core::{InputEvent, Outcome, ViewportController, ViewportState};
use phasebrot_render::{FrameBuffer, FrameRenderer, FrameStats, RenderError};

use crate::config::{snapshots_directory, AppConfig};
use crate::input::{self, hud_key_free, HUD_KEY};
use crate::snapshot_worker::{spawn_snapshot_worker, SnapshotRequest};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const HUD_MARGIN: f32 = 8.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 6.0;

/// Report a resource failure and stop the process.
fn fatal(err: RenderError) -> ! {
    error!("Fatal: {err}");
    std::process::exit(1);
}

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct PhasebrotApp {
    pub(crate) controller: ViewportController,
    pub(crate) state: ViewportState,
    pub(crate) buffer: FrameBuffer,
    pub(crate) renderer: FrameRenderer,
    pub(crate) texture: Option<egui::TextureHandle>,
    pub(crate) last_stats: Option<FrameStats>,
    pub(crate) show_hud: bool,
    hud_key_free: bool,
    snapshots: Option<mpsc::Sender<SnapshotRequest>>,
    snapshot_pending: bool,
}

impl PhasebrotApp {
    pub(crate) fn new(config: AppConfig) -> phasebrot_render::Result<Self> {
        let width = (config.window_width.max(1.0)) as u32;
        let height = (config.window_height.max(1.0)) as u32;
        let state = ViewportState::new(width, height)?;
        let buffer = FrameBuffer::for_viewport(&state)?;
        let renderer = FrameRenderer::new(config.worker_threads)?;

        let snapshots = match spawn_snapshot_worker() {
            Ok(tx) => Some(tx),
            Err(e) => {
                warn!("Snapshots disabled, could not start writer thread: {e}");
                None
            }
        };

        let controller = ViewportController::new(config.key_bindings);
        let hud_key_free = hud_key_free(controller.bindings());
        if !hud_key_free {
            warn!("{} is bound to an action; HUD toggle disabled", HUD_KEY.name());
        }

        info!(width, height, workers = renderer.workers(), "Viewport ready");
        Ok(Self {
            controller,
            state,
            buffer,
            renderer,
            texture: None,
            last_stats: None,
            show_hud: config.show_hud,
            hud_key_free,
            snapshots,
            snapshot_pending: false,
        })
    }

    // -- Events -------------------------------------------------------------

    /// Apply every event before the fill, so a fill never sees half a frame's input.
    fn apply_events(&mut self, ctx: &egui::Context, events: &[InputEvent]) {
        for event in events {
            match self.controller.apply(&mut self.state, event) {
                Outcome::Continue => {}
                Outcome::Quit => {
                    info!("Quit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Outcome::Reallocate { width, height } => {
                    if let Err(e) = self.buffer.resize(width, height) {
                        fatal(e);
                    }
                }
                Outcome::Snapshot => self.snapshot_pending = true,
            }
        }
    }

    // -- Frame --------------------------------------------------------------

    /// Fill the buffer for the current state and upload it to the texture.
    fn render_frame(&mut self, ctx: &egui::Context) {
        let stats = self.renderer.fill(&mut self.buffer, &self.state);
        self.last_stats = Some(stats);

        let size = [self.buffer.width() as usize, self.buffer.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, &self.buffer.to_rgba_opaque());
        match self.texture.as_mut() {
            Some(tex) => tex.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("frame", image, egui::TextureOptions::NEAREST))
            }
        }
    }

    fn send_snapshot(&mut self) {
        self.snapshot_pending = false;
        let Some(tx) = &self.snapshots else {
            warn!("Snapshot requested but the writer thread is not running");
            return;
        };
        let request = SnapshotRequest {
            buffer: self.buffer.clone(),
            state: self.state,
            dir: snapshots_directory(),
        };
        if tx.send(request).is_err() {
            warn!("Snapshot writer has stopped; disabling snapshots");
            self.snapshots = None;
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for PhasebrotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        if self.hud_key_free && ctx.input(|i| i.key_pressed(HUD_KEY)) {
            self.show_hud = !self.show_hud;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                let canvas = [available.x.max(1.0) as u32, available.y.max(1.0) as u32];
                let (response, painter) =
                    ui.allocate_painter(available, egui::Sense::click_and_drag());

                let events = input::collect_events(ctx, &response, canvas, self.hud_key_free);
                self.apply_events(ctx, &events);
                self.render_frame(ctx);

                if let Some(ref tex) = self.texture {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(tex.id(), response.rect, uv, egui::Color32::WHITE);
                }
            });

        if self.snapshot_pending {
            self.send_snapshot();
        }

        self.show_hud(ctx);

        // The fill above used the pre-advance phase for every pixel.
        self.state.advance_frame();
        ctx.request_repaint();
    }
}
