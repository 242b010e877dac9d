#![warn(clippy::all, rust_2018_idioms)]

pub mod chart;
pub mod egui_plot_stuff;
pub mod error;
pub mod ui;
pub mod util;
pub mod widgets;
