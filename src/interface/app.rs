use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clustering::config::SessionConfig;
use crate::clustering::session::KmeansSession;
use crate::render::snapshot::export_snapshot;

use super::controls_panel::{ControlsAction, ControlsPanel};
use super::plot_view::PlotView;

pub struct KmeansApp {
    // System stuff
    session: Option<KmeansSession>,
    rng: StdRng,

    // GUI stuff
    controls_panel: ControlsPanel,
    plot_view: PlotView,

    logs: Vec<String>,
}

impl Default for KmeansApp {
    fn default() -> Self {
        let mut rng = StdRng::from_entropy();
        let mut logs = Vec::new();

        // Mirror the classic demo: a session exists as soon as the app opens,
        // showing the unassigned starting picture.
        let session = match KmeansSession::new(SessionConfig::default(), &mut rng) {
            Ok(session) => {
                logs.push(format!(
                    "Session started: {} points, {} clusters.",
                    session.get_config().num_points,
                    session.get_config().num_clusters
                ));
                Some(session)
            }
            Err(e) => {
                logs.push(format!("Failed to start session: {}", e));
                None
            }
        };

        Self {
            session,
            rng,
            controls_panel: ControlsPanel::new(),
            plot_view: PlotView::new(),
            logs,
        }
    }
}

impl KmeansApp {
    /// Apply global styles to ensure consistent text sizes and padding.
    fn apply_global_styles(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        style.text_styles = [
            (egui::TextStyle::Heading, egui::FontId::proportional(24.0)),
            (egui::TextStyle::Body, egui::FontId::proportional(18.0)),
            (egui::TextStyle::Button, egui::FontId::proportional(20.0)),
            // Monospace: intended only for console-like output
            (egui::TextStyle::Monospace, egui::FontId::monospace(12.0)),
        ]
        .into();

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);

        ctx.set_style(style);
    }

    fn handle_action(&mut self, action: ControlsAction) {
        match action {
            ControlsAction::Advance => {
                if let Some(session) = &mut self.session {
                    session.step();
                    self.logs
                        .push(format!("Iteration {} complete.", session.get_iterations()));
                } else {
                    self.logs
                        .push("No session to advance. Press Reset first.".to_string());
                }
            }
            ControlsAction::Reset => match &mut self.session {
                Some(session) => match session.reset(&mut self.rng) {
                    Ok(()) => self
                        .logs
                        .push("Session reset: new points, new centroids.".to_string()),
                    Err(e) => self.logs.push(format!("Reset failed: {}", e)),
                },
                None => match KmeansSession::new(SessionConfig::default(), &mut self.rng) {
                    Ok(session) => {
                        self.session = Some(session);
                        self.logs.push("Session started.".to_string());
                    }
                    Err(e) => self.logs.push(format!("Failed to start session: {}", e)),
                },
            },
            ControlsAction::ExportSnapshot => {
                if let Some(session) = &self.session {
                    let path = format!("kmeans_iter_{:03}.png", session.get_iterations());
                    match export_snapshot(session, &path) {
                        Ok(()) => self.logs.push(format!("Snapshot written to {}.", path)),
                        Err(e) => self.logs.push(format!("Snapshot export failed: {}", e)),
                    }
                } else {
                    self.logs.push("Nothing to export yet.".to_string());
                }
            }
        }
    }

    fn bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("console_panel")
            .resizable(true)
            .default_height(140.0)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.add_space(10.0);
                    ui.heading("Console output");
                    ui.separator();

                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            ui.spacing_mut().item_spacing.y = 2.0; // Tighter lines for console-like text

                            for log in &self.logs {
                                ui.monospace(log);
                            }
                        });
                });
            });
    }
}

impl eframe::App for KmeansApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_global_styles(ctx);

        // 1. Top panel: advance / reset / export controls
        let action = self.controls_panel.show(ctx, self.session.as_ref());

        if let Some(action) = action {
            self.handle_action(action);
        }

        // 2. Bottom panel: console output (resizable)
        self.bottom_panel(ctx);

        // 3. Central panel: the clustering picture itself
        self.plot_view.show(ctx, self.session.as_ref());
    }
}
