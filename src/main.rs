use kmeans_steps::interface::app::KmeansApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([880.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "k-means, step by step",
        native_options,
        Box::new(|_cc| Ok(Box::new(KmeansApp::default()))),
    )
}
