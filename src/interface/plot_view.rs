use eframe::egui;
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::clustering::session::KmeansSession;
use crate::render::palette::{cluster_color, UNASSIGNED_COLOR};

const POINT_MARKER_RADIUS: f32 = 4.0;
const CENTROID_MARKER_RADIUS: f32 = 9.0;

pub struct PlotView {}

impl PlotView {
    pub fn new() -> Self {
        Self {}
    }

    pub fn show(&self, ctx: &egui::Context, session: Option<&KmeansSession>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(session) = session else {
                ui.label("No active session. Press Reset to start one.");
                return;
            };

            let config = session.get_config();
            let pad = 0.05 * (config.domain_max - config.domain_min);

            Plot::new("kmeans_plot")
                .data_aspect(1.0)
                .include_x(config.domain_min - pad)
                .include_x(config.domain_max + pad)
                .include_y(config.domain_min - pad)
                .include_y(config.domain_max + pad)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    // Points not yet assigned (only before the first iteration)
                    let unassigned: Vec<[f64; 2]> = session
                        .get_points()
                        .iter()
                        .filter(|p| p.cluster.is_none())
                        .map(|p| [p.x, p.y])
                        .collect();
                    if !unassigned.is_empty() {
                        let (r, g, b) = UNASSIGNED_COLOR;
                        plot_ui.points(
                            Points::new(PlotPoints::from(unassigned))
                                .radius(POINT_MARKER_RADIUS)
                                .color(egui::Color32::from_rgb(r, g, b))
                                .shape(MarkerShape::Circle)
                                .filled(true),
                        );
                    }

                    // One marker group per cluster so each gets its palette color
                    for index in 0..session.get_centroids().len() {
                        let members: Vec<[f64; 2]> = session
                            .get_points()
                            .iter()
                            .filter(|p| p.cluster == Some(index))
                            .map(|p| [p.x, p.y])
                            .collect();
                        if members.is_empty() {
                            continue;
                        }
                        let (r, g, b) = cluster_color(index);
                        plot_ui.points(
                            Points::new(PlotPoints::from(members))
                                .radius(POINT_MARKER_RADIUS)
                                .color(egui::Color32::from_rgb(r, g, b))
                                .shape(MarkerShape::Circle)
                                .filled(true),
                        );
                    }

                    // Centroids on top, bigger and diamond-shaped
                    for (index, centroid) in session.get_centroids().iter().enumerate() {
                        let (r, g, b) = cluster_color(index);
                        plot_ui.points(
                            Points::new(PlotPoints::from(vec![[centroid.x, centroid.y]]))
                                .radius(CENTROID_MARKER_RADIUS)
                                .color(egui::Color32::from_rgb(r, g, b))
                                .shape(MarkerShape::Diamond)
                                .filled(true)
                                .name(format!("Centroid {}", index)),
                        );
                    }
                });
        });
    }
}
