use std::path::{Path, PathBuf};

use super::task_index::{TaskIndex, dia_file_name};
use crate::error::Result;
use crate::ui::dialogs::show_error;

/// What happened in the task panel this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceAction {
    None,
    /// The directory was picked or refreshed; anything loaded from the old index is stale.
    Reloaded,
    Selected(String, String),
}

/// The selected results directory and the task tree built from it.
#[derive(Default, Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Workspacer {
    pub directory: Option<PathBuf>,
    #[serde(skip)]
    pub index: TaskIndex,
    #[serde(skip)]
    pub skipped: Vec<String>,
    #[serde(skip)]
    pub selected: Option<(String, String)>,
}

impl Workspacer {
    /// Indexes `dir` and makes it the current directory.
    ///
    /// On failure the previous directory and index are kept.
    pub fn load_directory(&mut self, dir: &Path) -> Result<()> {
        let report = TaskIndex::scan(dir)?;
        if !report.skipped.is_empty() {
            log::warn!(
                "Skipped {} file(s) with malformed names: {:?}",
                report.skipped.len(),
                report.skipped
            );
        }

        self.directory = Some(dir.to_path_buf());
        self.index = report.index;
        self.skipped = report.skipped;
        self.selected = None;
        Ok(())
    }

    /// Re-reads the current directory. Errors are shown to the user.
    pub fn refresh(&mut self) {
        let Some(dir) = self.directory.clone() else {
            return;
        };
        if let Err(e) = self.load_directory(&dir) {
            show_error(&format!("Cannot read directory {}", dir.display()), &e.to_string());
        }
    }

    /// Asks for a directory and indexes it. Returns true when a new directory was loaded.
    pub fn select_directory(&mut self) -> bool {
        let Some(dir) = rfd::FileDialog::new()
            .set_title("Select directory")
            .pick_folder()
        else {
            return false;
        };

        match self.load_directory(&dir) {
            Ok(()) => true,
            Err(e) => {
                show_error(&format!("Cannot read directory {}", dir.display()), &e.to_string());
                false
            }
        }
    }

    /// Path of the `.dia` file for a task and transducer in the current directory.
    pub fn file_path(&self, task: &str, transducer: &str) -> Option<PathBuf> {
        self.directory
            .as_ref()
            .map(|dir| dir.join(dia_file_name(task, transducer)))
    }

    fn select_directory_ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut loaded = false;
        ui.horizontal(|ui| {
            let dir_name = match &self.directory {
                Some(dir) => dir.display().to_string(),
                None => "No directory is currently selected".to_owned(),
            };

            if ui
                .button("Select directory")
                .on_hover_text(dir_name)
                .clicked()
            {
                loaded = self.select_directory();
            }

            if self.directory.is_some()
                && ui
                    .button("↻")
                    .on_hover_text("Refresh the directory")
                    .clicked()
            {
                self.refresh();
                loaded = true;
            }
        });
        loaded
    }

    /// The "List of tasks" tree.
    pub fn workspace_ui(&mut self, ui: &mut egui::Ui) -> WorkspaceAction {
        ui.heading("List of tasks");
        let reloaded = self.select_directory_ui(ui);
        ui.separator();

        if reloaded {
            return WorkspaceAction::Reloaded;
        }
        if self.index.is_empty() {
            ui.label("No tasks");
            return WorkspaceAction::None;
        }

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .id_salt("WorkspaceScrollArea")
            .show(ui, |ui| {
                for (task, transducers) in self.index.iter() {
                    egui::CollapsingHeader::new(task)
                        .id_salt(("task", task))
                        .show(ui, |ui| {
                            for transducer in transducers {
                                let is_selected = self
                                    .selected
                                    .as_ref()
                                    .is_some_and(|(t, d)| t == task && d == transducer);
                                if ui.selectable_label(is_selected, transducer).clicked() {
                                    clicked = Some((task.to_owned(), transducer.clone()));
                                }
                            }
                        });
                }
            });

        match clicked {
            Some((task, transducer)) => {
                self.selected = Some((task.clone(), transducer.clone()));
                WorkspaceAction::Selected(task, transducer)
            }
            None => WorkspaceAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_directory_builds_the_tree() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["B#1.dia", "A#2.dia", "A#1.dia", "broken.dia"] {
            fs::write(dir.path().join(name), "banner\nT X\n0 1\n").unwrap();
        }

        let mut workspacer = Workspacer::default();
        workspacer.load_directory(dir.path()).unwrap();

        assert_eq!(workspacer.directory.as_deref(), Some(dir.path()));
        assert_eq!(workspacer.index.tasks().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(workspacer.index.get("A").unwrap(), ["1", "2"]);
        assert_eq!(workspacer.skipped, vec!["broken.dia"]);
        assert_eq!(
            workspacer.file_path("A", "2"),
            Some(dir.path().join("A#2.dia"))
        );
    }

    #[test]
    fn test_failed_load_keeps_previous_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A#1.dia"), "").unwrap();

        let mut workspacer = Workspacer::default();
        workspacer.load_directory(dir.path()).unwrap();
        assert!(workspacer.load_directory(&dir.path().join("missing")).is_err());

        assert_eq!(workspacer.directory.as_deref(), Some(dir.path()));
        assert_eq!(workspacer.index.len(), 1);
    }

    #[test]
    fn test_only_the_directory_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A#1.dia"), "").unwrap();

        let mut workspacer = Workspacer::default();
        workspacer.load_directory(dir.path()).unwrap();
        workspacer.selected = Some(("A".to_owned(), "1".to_owned()));

        let json = serde_json::to_string(&workspacer).unwrap();
        let restored: Workspacer = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.directory, workspacer.directory);
        assert!(restored.index.is_empty());
        assert_eq!(restored.selected, None);
    }
}
