use crate::widgets::label_input::{LabelInput, collect_errors};
use crate::widgets::validation::{NumberEntry, PlainEntry, Validatable};

#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdit {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormAction {
    None,
    Legend(bool),
    Submit,
    Reset,
}

/// The "Graph properties" panel of a chart window.
#[derive(Debug, Clone)]
pub struct GraphForm {
    pub title: LabelInput<PlainEntry>,
    pub x_label: LabelInput<PlainEntry>,
    pub y_label: LabelInput<PlainEntry>,
    pub x_min: LabelInput<NumberEntry>,
    pub x_max: LabelInput<NumberEntry>,
    pub y_min: LabelInput<NumberEntry>,
    pub y_max: LabelInput<NumberEntry>,
    pub legend: bool,
}

impl Default for GraphForm {
    fn default() -> Self {
        Self {
            title: LabelInput::new("Graph title", PlainEntry::default()),
            x_label: LabelInput::new("Name of x axis", PlainEntry::default()),
            y_label: LabelInput::new("Name of y axis", PlainEntry::default()),
            x_min: LabelInput::new("Min x", NumberEntry::new(0.0)),
            x_max: LabelInput::new("Max x", NumberEntry::new(0.0)),
            y_min: LabelInput::new("Min y", NumberEntry::new(0.0)),
            y_max: LabelInput::new("Max y", NumberEntry::new(0.0)),
            legend: false,
        }
    }
}

impl GraphForm {
    /// Clears every field and turns the legend off.
    pub fn reset(&mut self) {
        self.title.input.clear();
        self.x_label.input.clear();
        self.y_label.input.clear();
        self.x_min.input.clear();
        self.x_max.input.clear();
        self.y_min.input.clear();
        self.y_max.input.clear();
        self.legend = false;
    }

    pub fn collect_errors(&mut self) -> Vec<(String, String)> {
        collect_errors(&mut [
            &mut self.title,
            &mut self.x_label,
            &mut self.y_label,
            &mut self.x_min,
            &mut self.x_max,
            &mut self.y_min,
            &mut self.y_max,
        ])
    }

    pub fn submit(&mut self) -> Result<GraphEdit, Vec<(String, String)>> {
        let errors = self.collect_errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(GraphEdit {
            title: self.title.value().to_owned(),
            x_label: self.x_label.value().to_owned(),
            y_label: self.y_label.value().to_owned(),
            x_min: self.x_min.input.number().unwrap_or_default(),
            x_max: self.x_max.input.number().unwrap_or_default(),
            y_min: self.y_min.input.number().unwrap_or_default(),
            y_max: self.y_max.input.number().unwrap_or_default(),
        })
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> GraphFormAction {
        let mut action = GraphFormAction::None;

        ui.group(|ui| {
            ui.label("Graph properties");

            self.title.ui(ui);
            self.x_label.ui(ui);
            self.y_label.ui(ui);
            self.x_min.ui(ui);
            self.x_max.ui(ui);
            self.y_min.ui(ui);
            self.y_max.ui(ui);

            if ui.checkbox(&mut self.legend, "Legend").changed() {
                action = GraphFormAction::Legend(self.legend);
            }

            ui.horizontal(|ui| {
                if ui.button("Ok").clicked() {
                    action = GraphFormAction::Submit;
                }
                if ui.button("Reset").clicked() {
                    action = GraphFormAction::Reset;
                }
            });
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::validation::{NUMBER_MESSAGE, REQUIRED_MESSAGE};

    #[test]
    fn test_defaults_submit() {
        let mut form = GraphForm::default();
        let edit = form.submit().unwrap();
        assert_eq!(edit.x_min, 0.0);
        assert_eq!(edit.x_max, 0.0);
        assert!(edit.title.is_empty());
    }

    #[test]
    fn test_reset_requires_bounds_again() {
        let mut form = GraphForm::default();
        form.legend = true;
        form.title.on_key("Run 1");
        form.reset();

        assert!(!form.legend);
        assert_eq!(form.title.value(), "");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|(_, e)| e == REQUIRED_MESSAGE));
    }

    #[test]
    fn test_non_numeric_bound() {
        let mut form = GraphForm::default();
        form.y_max.on_key("ten");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors, vec![("Max y".to_owned(), NUMBER_MESSAGE.to_owned())]);
    }

    #[test]
    fn test_infinite_bound_is_not_a_number() {
        let mut form = GraphForm::default();
        form.x_max.on_key("inf");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors, vec![("Max x".to_owned(), NUMBER_MESSAGE.to_owned())]);
    }

    #[test]
    fn test_submit_collects_values() {
        let mut form = GraphForm::default();
        form.title.on_key("Pressure");
        form.x_label.on_key("t, s");
        form.x_max.on_key("12.5");
        form.y_min.on_key("-3");

        let edit = form.submit().unwrap();
        assert_eq!(edit.title, "Pressure");
        assert_eq!(edit.x_label, "t, s");
        assert_eq!(edit.x_max, 12.5);
        assert_eq!(edit.y_min, -3.0);
    }
}
