pub mod column_chooser;
pub mod graph_font;
pub mod graph_form;
pub mod graphic_window;
pub mod line_form;
