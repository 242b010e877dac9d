use egui::Color32;

use super::validation::{FieldState, Validatable, ValidatedCombobox};

/// A label and a validated input together.
///
/// A field can be linked to a controlling value with [`LabelInput::link`]:
/// while the controller is off the input is disabled, cleared and its error
/// suppressed.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct LabelInput<V> {
    pub label: String,
    pub input: V,
    pub enabled: bool,
}

impl<V: Validatable> LabelInput<V> {
    pub fn new(label: &str, input: V) -> Self {
        Self {
            label: label.to_owned(),
            input,
            enabled: true,
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn link(&mut self, controller: bool) {
        if controller {
            self.enabled = true;
        } else {
            self.enabled = false;
            if !self.input.value().is_empty() || self.input.state() != &FieldState::Untouched {
                self.input.clear();
            }
        }
    }

    pub fn on_key(&mut self, proposed: &str) -> bool {
        if !self.enabled {
            return true;
        }
        self.input.on_key(proposed)
    }

    /// Runs the focus-out check as a form submission does. Disabled fields pass.
    pub fn trigger_focusout_validation(&mut self) -> bool {
        if !self.enabled {
            return true;
        }
        self.input.on_focus_out()
    }

    pub fn error(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.input.error()
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            ui.add_sized([90.0, 18.0], egui::Label::new(&self.label));
            ui.add_enabled_ui(self.enabled, |ui| self.text_edit(ui)).inner
        })
        .inner
    }

    fn text_edit(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let mut buffer = self.input.value().to_owned();
        let mut edit = egui::TextEdit::singleline(&mut buffer).desired_width(120.0);
        if !self.input.is_valid() {
            edit = edit.text_color(Color32::RED);
        }
        let response = ui.add(edit);

        if response.changed() {
            self.on_key(&buffer);
        }
        if response.lost_focus() {
            self.trigger_focusout_validation();
        }

        if let Some(error) = self.error() {
            ui.colored_label(Color32::RED, error);
        }
        response
    }
}

impl LabelInput<ValidatedCombobox> {
    /// Text entry with a dropdown of the allowed values.
    pub fn combo_ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            ui.add_sized([90.0, 18.0], egui::Label::new(&self.label));
            ui.add_enabled_ui(self.enabled, |ui| {
                let response = self.text_edit(ui);

                let choices = self.input.choices().unwrap_or_default().to_vec();
                egui::ComboBox::from_id_salt(("label_input_choices", &self.label))
                    .selected_text("")
                    .width(20.0)
                    .show_ui(ui, |ui| {
                        for choice in &choices {
                            let selected = self.input.value() == choice;
                            if ui.selectable_label(selected, choice).clicked() {
                                self.input.select(choice);
                            }
                        }
                    });
                response
            })
            .inner
        })
        .inner
    }
}

/// Object safe view of a field for form submission.
pub trait FormField {
    fn label(&self) -> &str;
    fn validate_for_submit(&mut self) -> Option<String>;
}

impl<V: Validatable> FormField for LabelInput<V> {
    fn label(&self) -> &str {
        &self.label
    }

    fn validate_for_submit(&mut self) -> Option<String> {
        self.trigger_focusout_validation();
        self.error().map(str::to_owned)
    }
}

/// Validates every field and returns `(label, error)` for the failing ones.
pub fn collect_errors(fields: &mut [&mut dyn FormField]) -> Vec<(String, String)> {
    fields
        .iter_mut()
        .filter_map(|field| {
            field
                .validate_for_submit()
                .map(|error| (field.label().to_owned(), error))
        })
        .collect()
}

/// Message shown when a form submission fails.
pub fn error_detail(errors: &[(String, String)]) -> String {
    let names: Vec<&str> = errors.iter().map(|(label, _)| label.as_str()).collect();
    format!("The following field have errors:\n * {}", names.join("\n * "))
}
