use super::dialogs;
use crate::chart::graph_font::GraphFont;
use crate::util::settings::Settings;
use crate::util::viewer::Viewer;

pub const APP_NAME: &str = "Graph Viewer";

const ABOUT_TEXT: &str = "Graph Viewer\n\nby Pavel Vanyushin\nFor assistance please contact the author.";
const EXIT_QUESTION: &str = "Are you sure you want to exit?";

#[derive(Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GraphViewer {
    viewer: Viewer,
    font: GraphFont,
    #[serde(skip)]
    settings: Settings,
    #[serde(skip)]
    allowed_to_close: bool,
}

impl GraphViewer {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        // Load previous app state (if any).
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.settings = settings;
        app.viewer.restore();
        app
    }

    fn file_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("File", |ui| {
            if ui.button("Select directory...").clicked() {
                ui.close();
                self.viewer.select_directory();
            }

            ui.separator();

            if ui.button("Quit").clicked() {
                ui.close();
                if dialogs::confirm("Quit", EXIT_QUESTION) {
                    self.allowed_to_close = true;
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        });
    }

    fn settings_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Settings", |ui| {
            ui.menu_button("Graph font", |ui| {
                for font in GraphFont::ALL {
                    ui.radio_value(&mut self.font, font, font.name());
                }
            });

            ui.separator();

            self.settings.ui(ui);

            ui.separator();

            if ui.button("Save settings").clicked() {
                ui.close();
                if let Err(e) = self.settings.save() {
                    dialogs::show_error("Cannot save settings", &e.to_string());
                }
            }
        });
    }

    fn help_menu(ui: &mut egui::Ui) {
        ui.menu_button("Help", |ui| {
            if ui.button("About...").clicked() {
                ui.close();
                dialogs::show_info("About", ABOUT_TEXT);
            }
        });
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.allowed_to_close {
            return;
        }

        if dialogs::confirm("Quit", EXIT_QUESTION) {
            self.allowed_to_close = true;
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }
}

impl eframe::App for GraphViewer {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = &ui.ctx().clone();
        self.handle_close_request(ctx);

        egui::TopBottomPanel::top("graph_viewer_top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.file_menu(ui);
                self.settings_menu(ui);
                Self::help_menu(ui);

                ui.separator();

                egui::global_theme_preference_switch(ui);
            });
        });

        self.viewer.ui(ctx, self.font);
    }
}
