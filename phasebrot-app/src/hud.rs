use eframe::egui;

use crate::app::{PhasebrotApp, HUD_CORNER_RADIUS, HUD_MARGIN};

impl PhasebrotApp {
    pub(crate) fn show_hud(&mut self, ctx: &egui::Context) {
        if !self.show_hud {
            return;
        }

        egui::Area::new(egui::Id::new("hud_view"))
            .anchor(egui::Align2::LEFT_TOP, [HUD_MARGIN, HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(166))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));
                        ui.style_mut().spacing.item_spacing.y = 2.0;

                        let s = &self.state;
                        ui.label(format!("Center: {:.10} {:+.10}i", s.center.re, s.center.im));
                        ui.label(format!("Scale: {:.3e}", s.scale));
                        ui.label(format!(
                            "Phase: {}{}",
                            s.phase,
                            if s.paused { " (paused)" } else { "" }
                        ));
                        ui.label(format!("Resolution: {}×{}", s.width, s.height));

                        if let Some(stats) = self.last_stats {
                            ui.label(format!(
                                "Fill: {:.1} ms · {} bands · {} workers",
                                stats.elapsed.as_secs_f64() * 1000.0,
                                stats.bands,
                                self.renderer.workers()
                            ));
                        }
                    });
            });
    }
}
