use super::graph_font::GraphFont;
use super::graph_form::{GraphEdit, GraphForm, GraphFormAction};
use super::line_form::{LineEdit, LineForm, LineFormAction};
use crate::egui_plot_stuff::colors::default_color_name;
use crate::egui_plot_stuff::egui_line::{EguiLine, LineProperties};
use crate::egui_plot_stuff::egui_plot_settings::EguiPlotSettings;
use crate::ui::dialogs::show_error;
use crate::widgets::label_input::error_detail;

/// Most lines one chart can hold, one per palette color.
pub const MAX_LINES: usize = 24;

/// A chart window: the plot plus its line and graph property panels.
#[derive(Debug, Clone)]
pub struct GraphicWindow {
    pub id: usize,
    pub title: String,
    pub lines: Vec<EguiLine>,
    pub plot_settings: EguiPlotSettings,
    pub line_form: LineForm,
    pub graph_form: GraphForm,
    pub open: bool,
}

impl GraphicWindow {
    pub fn new(id: usize, title: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            lines: Vec::new(),
            plot_settings: EguiPlotSettings::default(),
            line_form: LineForm::default(),
            graph_form: GraphForm::default(),
            open: true,
        }
    }

    /// Adds a series with default properties. Returns false once the chart is full.
    pub fn add_line(&mut self, label: &str, points: Vec<[f64; 2]>) -> bool {
        if self.lines.len() >= MAX_LINES {
            log::warn!("Chart '{}' already has {MAX_LINES} lines", self.title);
            return false;
        }
        let color = default_color_name(self.lines.len());
        self.lines
            .push(EguiLine::new(LineProperties::new(label, color), points));
        self.refresh_line_choices();
        true
    }

    pub fn line_labels(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.properties.label.clone())
            .collect()
    }

    pub fn line(&self, label: &str) -> Option<&EguiLine> {
        self.lines.iter().find(|line| line.properties.label == label)
    }

    fn refresh_line_choices(&mut self) {
        let labels = self.line_labels();
        self.line_form.set_line_labels(&labels);
    }

    /// Shows the chosen line's current properties in the line form.
    pub fn renew_line_form(&mut self, label: &str) {
        let Some(line) = self.line(label) else {
            return;
        };
        let properties = line.properties.clone();
        self.line_form.fill(
            &properties,
            self.plot_settings.x_scale,
            self.plot_settings.y_scale,
        );
    }

    /// Applies a line form submission. Labels stay unique within the chart.
    pub fn apply_line_edit(&mut self, edit: &LineEdit) -> Result<(), String> {
        let label = &edit.properties.label;
        if !label.is_empty() && *label != edit.target && self.line(label).is_some() {
            return Err(format!("A line named '{label}' already exists"));
        }

        let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.properties.label == edit.target)
        else {
            return Err(format!("No line named '{}'", edit.target));
        };

        let mut properties = edit.properties.clone();
        if properties.label.is_empty() {
            properties.label.clone_from(&line.properties.label);
        }
        line.properties = properties.clone();

        self.plot_settings.set_scales(edit.x_scale, edit.y_scale);
        self.refresh_line_choices();
        self.renew_line_form(&properties.label);
        Ok(())
    }

    pub fn apply_graph_edit(&mut self, edit: &GraphEdit) {
        self.plot_settings.x_label.clone_from(&edit.x_label);
        self.plot_settings.y_label.clone_from(&edit.y_label);
        self.plot_settings.title.clone_from(&edit.title);

        if !self.plot_settings.set_x_bounds(edit.x_min, edit.x_max) {
            log::debug!("Keeping x bounds, max {} <= min {}", edit.x_max, edit.x_min);
        }
        if !self.plot_settings.set_y_bounds(edit.y_min, edit.y_max) {
            log::debug!("Keeping y bounds, max {} <= min {}", edit.y_max, edit.y_min);
        }
    }

    pub fn set_legend(&mut self, legend: bool) {
        self.plot_settings.set_legend(legend);
        self.graph_form.legend = legend;
    }

    fn on_line_action(&mut self, action: LineFormAction) {
        match action {
            LineFormAction::None => {}
            LineFormAction::Selected(label) => self.renew_line_form(&label),
            LineFormAction::Reset => self.line_form.reset(),
            LineFormAction::Submit => match self.line_form.submit() {
                Ok(edit) => {
                    if let Err(e) = self.apply_line_edit(&edit) {
                        show_error("Cannot replot line", &e);
                    }
                }
                Err(errors) => show_error("Cannot replot line", &error_detail(&errors)),
            },
        }
    }

    fn on_graph_action(&mut self, action: GraphFormAction) {
        match action {
            GraphFormAction::None => {}
            GraphFormAction::Legend(legend) => self.set_legend(legend),
            GraphFormAction::Reset => {
                self.graph_form.reset();
                self.plot_settings.set_legend(false);
            }
            GraphFormAction::Submit => match self.graph_form.submit() {
                Ok(edit) => self.apply_graph_edit(&edit),
                Err(errors) => show_error("Cannot replot graph", &error_detail(&errors)),
            },
        }
    }

    fn plot_ui(&mut self, ui: &mut egui::Ui) {
        if !self.plot_settings.title.is_empty() {
            ui.vertical_centered(|ui| {
                ui.heading(&self.plot_settings.title);
            });
        }

        let plot = egui_plot::Plot::new(("graph_viewer_plot", self.id)).height(360.0);
        let plot = self.plot_settings.apply_to_plot(plot);

        let x_scale = self.plot_settings.x_scale;
        let y_scale = self.plot_settings.y_scale;
        let lines = &self.lines;
        let settings = &mut self.plot_settings;
        plot.show(ui, |plot_ui| {
            settings.apply_bounds(plot_ui);
            for line in lines {
                line.draw(plot_ui, x_scale, y_scale);
            }
        });
    }

    pub fn show(&mut self, ctx: &egui::Context, font: GraphFont) {
        let mut open = self.open;

        egui::Window::new(self.title.clone())
            .id(egui::Id::new(("graphic_window", self.id)))
            .open(&mut open)
            .default_size([760.0, 640.0])
            .show(ctx, |ui| {
                ui.style_mut().override_font_id = Some(font.font_id(13.0));

                self.plot_ui(ui);

                ui.separator();

                ui.horizontal_top(|ui| {
                    let line_action = self.line_form.ui(ui);
                    let graph_action = self.graph_form.ui(ui);
                    self.on_line_action(line_action);
                    self.on_graph_action(graph_action);
                });
            });

        self.open = open;
    }
}
