mod app;
pub mod dialogs;

pub use app::{APP_NAME, GraphViewer};
