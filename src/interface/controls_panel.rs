use eframe::egui;

use crate::clustering::session::KmeansSession;

/// What the user asked for this frame. The app translates the action into
/// session calls so the panel itself never touches clustering state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlsAction {
    Advance,
    Reset,
    ExportSnapshot,
}

pub struct ControlsPanel {}

impl ControlsPanel {
    pub fn new() -> Self {
        Self {}
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        session: Option<&KmeansSession>,
    ) -> Option<ControlsAction> {
        let mut action = None;

        egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.add_space(10.0);

                if ui.button("Next iteration").clicked() {
                    action = Some(ControlsAction::Advance);
                }
                if ui.button("Reset").clicked() {
                    action = Some(ControlsAction::Reset);
                }
                if ui.button("Export snapshot").clicked() {
                    action = Some(ControlsAction::ExportSnapshot);
                }

                if let Some(session) = session {
                    ui.separator();
                    ui.label(format!("Iterations: {}", session.get_iterations()));
                }
            });
            ui.add_space(10.0);
        });

        action
    }
}
