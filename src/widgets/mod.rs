pub mod label_input;
pub mod validation;
