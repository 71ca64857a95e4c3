pub mod app;
pub mod controls_panel;
pub mod plot_view;
