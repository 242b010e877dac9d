use super::dia_table::DiaTable;
use super::task_index::dia_file_name;
use super::workspacer::{WorkspaceAction, Workspacer};
use crate::chart::column_chooser::{
    ChooserOutcome, ColumnChooser, INVALID_COUNT_DETAIL, INVALID_COUNT_MESSAGE,
};
use crate::chart::graph_font::GraphFont;
use crate::chart::graphic_window::GraphicWindow;
use crate::error::Result;
use crate::ui::dialogs::show_error;

/// Builds a chart of `columns` against the first table column, titled by the first chosen column.
pub fn build_chart(table: &DiaTable, id: usize, columns: &[String]) -> Result<GraphicWindow> {
    let title = columns.first().map(String::as_str).unwrap_or_default();
    let mut chart = GraphicWindow::new(id, title);
    for column in columns {
        let points = table.series(column)?;
        chart.add_line(column, points);
    }
    Ok(chart)
}

/// Task tree, table view and the open charts.
#[derive(Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Viewer {
    pub workspacer: Workspacer,
    #[serde(skip)]
    pub table: Option<DiaTable>,
    #[serde(skip)]
    pub chooser: Option<ColumnChooser>,
    #[serde(skip)]
    pub charts: Vec<GraphicWindow>,
    #[serde(skip)]
    next_chart_id: usize,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-indexes the persisted directory, if any.
    pub fn restore(&mut self) {
        if self.workspacer.directory.is_some() {
            self.workspacer.refresh();
        }
    }

    pub fn select_directory(&mut self) {
        if self.workspacer.select_directory() {
            self.drop_loaded_table();
        }
    }

    /// Forgets the table and chooser built from the previous directory index.
    pub fn drop_loaded_table(&mut self) {
        self.table = None;
        self.chooser = None;
    }

    /// Loads the table of one transducer. The previous table is dropped on failure.
    pub fn load_table(&mut self, task: &str, transducer: &str) -> Result<()> {
        self.drop_loaded_table();

        let Some(dir) = self.workspacer.directory.clone() else {
            log::warn!("No directory selected");
            return Ok(());
        };

        self.table = Some(DiaTable::load(&dir, &dia_file_name(task, transducer))?);
        Ok(())
    }

    pub fn open_chooser(&mut self) {
        if let Some(table) = &self.table {
            self.chooser = Some(ColumnChooser::new(&table.columns));
        }
    }

    pub fn make_chart(&mut self, columns: &[String]) -> Result<()> {
        let Some(table) = &self.table else {
            return Ok(());
        };

        let chart = build_chart(table, self.next_chart_id, columns)?;
        log::info!("Opened chart '{}' with {} line(s)", chart.title, chart.lines.len());
        self.next_chart_id += 1;
        self.charts.push(chart);
        Ok(())
    }

    fn chooser_ui(&mut self, ctx: &egui::Context) {
        let Some(chooser) = &mut self.chooser else {
            return;
        };

        match chooser.ui(ctx) {
            ChooserOutcome::Pending => {}
            ChooserOutcome::Cancelled => self.chooser = None,
            ChooserOutcome::InvalidCount(count) => {
                log::warn!("{count} columns chosen");
                show_error(INVALID_COUNT_MESSAGE, INVALID_COUNT_DETAIL);
            }
            ChooserOutcome::Chosen(columns) => {
                self.chooser = None;
                if let Err(e) = self.make_chart(&columns) {
                    show_error("Cannot make graph", &e.to_string());
                }
            }
        }
    }

    fn left_side_panel_ui(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("graph_viewer_tasks_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                let action = self.workspacer.workspace_ui(ui);
                self.on_workspace_action(action);
            });
    }

    fn on_workspace_action(&mut self, action: WorkspaceAction) {
        match action {
            WorkspaceAction::None => {}
            WorkspaceAction::Reloaded => self.drop_loaded_table(),
            WorkspaceAction::Selected(task, transducer) => {
                if let Err(e) = self.load_table(&task, &transducer) {
                    show_error(
                        &format!("Cannot open {}", dia_file_name(&task, &transducer)),
                        &e.to_string(),
                    );
                }
            }
        }
    }

    fn central_panel_ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Table data");

                if let Some((task, transducer)) = &self.workspacer.selected {
                    ui.separator();
                    ui.label(dia_file_name(task, transducer));
                }

                ui.separator();

                if ui
                    .add_enabled(self.table.is_some(), egui::Button::new("Make graph"))
                    .on_disabled_hover_text("No table loaded.")
                    .clicked()
                {
                    self.open_chooser();
                }
            });

            ui.separator();

            if let Some(table) = &self.table {
                egui::ScrollArea::horizontal()
                    .id_salt("TableScrollArea")
                    .show(ui, |ui| table.ui(ui));
            }
        });
    }

    fn charts_ui(&mut self, ctx: &egui::Context, font: GraphFont) {
        for chart in &mut self.charts {
            chart.show(ctx, font);
        }
        self.charts.retain(|chart| chart.open);
    }

    pub fn ui(&mut self, ctx: &egui::Context, font: GraphFont) {
        self.left_side_panel_ui(ctx);
        self.central_panel_ui(ctx);
        self.chooser_ui(ctx);
        self.charts_ui(ctx, font);
    }
}
