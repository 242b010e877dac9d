pub mod dia_table;
pub mod settings;
pub mod task_index;
pub mod viewer;
pub mod workspacer;
