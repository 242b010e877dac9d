pub mod axis_scale;
pub mod colors;
pub mod egui_line;
pub mod egui_plot_settings;
