use crate::egui_plot_stuff::axis_scale::AxisScale;
use crate::egui_plot_stuff::colors::color_names;
use crate::egui_plot_stuff::egui_line::{LineProperties, LineStyleKind};
use crate::widgets::label_input::{LabelInput, collect_errors};
use crate::widgets::validation::{
    NumberEntry, RequiredEntry, Validatable, ValidatedCombobox,
};

pub const WIDTH_MESSAGE: &str = "Width must be greater than 0";

/// Validated edit of one line, produced by a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEdit {
    pub target: String,
    pub properties: LineProperties,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFormAction {
    None,
    /// The chosen line changed to an existing line label.
    Selected(String),
    Submit,
    Reset,
}

/// The "Line properties" panel of a chart window.
#[derive(Debug, Clone)]
pub struct LineForm {
    pub choose_line: LabelInput<ValidatedCombobox>,
    pub line_label: LabelInput<RequiredEntry>,
    pub color: LabelInput<ValidatedCombobox>,
    pub width: LabelInput<NumberEntry>,
    pub line_type: LabelInput<ValidatedCombobox>,
    pub x_scale: LabelInput<ValidatedCombobox>,
    pub y_scale: LabelInput<ValidatedCombobox>,
}

impl Default for LineForm {
    fn default() -> Self {
        let mut form = Self {
            choose_line: LabelInput::new("Choose line", ValidatedCombobox::default()),
            line_label: LabelInput::new("Line label", RequiredEntry::default()),
            color: LabelInput::new("Color", ValidatedCombobox::new(&color_names())),
            width: LabelInput::new("Width", NumberEntry::default()),
            line_type: LabelInput::new(
                "Line type",
                ValidatedCombobox::new(&LineStyleKind::names()),
            ),
            x_scale: LabelInput::new("X-axis scale", ValidatedCombobox::new(&AxisScale::names())),
            y_scale: LabelInput::new("Y-axis scale", ValidatedCombobox::new(&AxisScale::names())),
        };
        form.sync_disabled();
        form
    }
}

impl LineForm {
    pub fn set_line_labels<S: AsRef<str>>(&mut self, labels: &[S]) {
        self.choose_line.input.set_choices(labels);
    }

    /// Fields other than "Choose line" are only editable once a line is chosen.
    pub fn sync_disabled(&mut self) {
        let controller = !self.choose_line.value().is_empty();
        self.line_label.link(controller);
        self.color.link(controller);
        self.width.link(controller);
        self.line_type.link(controller);
        self.x_scale.link(controller);
        self.y_scale.link(controller);
    }

    /// Shows the current properties of `line` in the form.
    pub fn fill(&mut self, line: &LineProperties, x_scale: AxisScale, y_scale: AxisScale) {
        self.choose_line.input.set_value(&line.label);
        self.sync_disabled();
        self.line_label.input.set_value(&line.label);
        self.color.input.set_value(&line.color);
        self.width.input.set_number(f64::from(line.width));
        self.line_type.input.set_value(line.style.name());
        self.x_scale.input.set_value(x_scale.name());
        self.y_scale.input.set_value(y_scale.name());
    }

    /// Clears every field except the chosen line.
    pub fn reset(&mut self) {
        self.line_label.input.clear();
        self.color.input.clear();
        self.width.input.clear();
        self.line_type.input.clear();
        self.x_scale.input.clear();
        self.y_scale.input.clear();
    }

    pub fn collect_errors(&mut self) -> Vec<(String, String)> {
        collect_errors(&mut [
            &mut self.choose_line,
            &mut self.line_label,
            &mut self.color,
            &mut self.width,
            &mut self.line_type,
            &mut self.x_scale,
            &mut self.y_scale,
        ])
    }

    /// Validates every field and builds the edit, or returns the failing fields.
    pub fn submit(&mut self) -> Result<LineEdit, Vec<(String, String)>> {
        let mut errors = self.collect_errors();
        if self.width.enabled && self.width.input.number().is_some_and(|width| width <= 0.0) {
            errors.push((self.width.label.clone(), WIDTH_MESSAGE.to_owned()));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        // every field passed its focus-out check, so the lookups below succeed
        let style = LineStyleKind::from_name(self.line_type.value()).unwrap_or_default();
        let x_scale = AxisScale::from_name(self.x_scale.value()).unwrap_or_default();
        let y_scale = AxisScale::from_name(self.y_scale.value()).unwrap_or_default();
        let width = self.width.input.number().unwrap_or_default() as f32;

        Ok(LineEdit {
            target: self.choose_line.value().to_owned(),
            properties: LineProperties {
                label: self.line_label.value().to_owned(),
                color: self.color.value().to_owned(),
                width,
                style,
            },
            x_scale,
            y_scale,
        })
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> LineFormAction {
        let mut action = LineFormAction::None;

        ui.group(|ui| {
            ui.label("Line properties");

            let before = self.choose_line.value().to_owned();
            self.choose_line.combo_ui(ui);
            let chosen = self.choose_line.value().to_owned();
            if chosen != before {
                self.sync_disabled();
                let known = self
                    .choose_line
                    .input
                    .choices()
                    .is_some_and(|labels| labels.contains(&chosen));
                if known {
                    action = LineFormAction::Selected(chosen);
                }
            }

            self.line_label.ui(ui);
            self.color.combo_ui(ui);
            self.width.ui(ui);
            self.line_type.combo_ui(ui);
            self.x_scale.combo_ui(ui);
            self.y_scale.combo_ui(ui);

            ui.horizontal(|ui| {
                if ui.button("Ok").clicked() {
                    action = LineFormAction::Submit;
                }
                if ui.button("Reset").clicked() {
                    action = LineFormAction::Reset;
                }
            });
        });

        action
    }
}
