use std::fs;
use std::path::Path;

use crate::error::{GraphViewerError, Result};

pub const DIA_EXTENSION: &str = ".dia";
const DIA_PATTERN: &str = "*#*.dia";

/// Tasks and their transducers in insertion order.
///
/// [`TaskIndex::scan`] sorts directory entries by file name before inserting,
/// so the order is the lexicographic order of the file names and does not
/// depend on the platform's directory listing.
#[derive(Default, Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct TaskIndex {
    tasks: Vec<(String, Vec<String>)>,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ScanReport {
    pub index: TaskIndex,
    /// `.dia` files whose names do not follow `<task>#<transducer>.dia`.
    pub skipped: Vec<String>,
}

impl TaskIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `transducer` to `task`, creating the task entry on first use.
    pub fn insert(&mut self, task: &str, transducer: &str) {
        match self.tasks.iter_mut().find(|(name, _)| name == task) {
            Some((_, transducers)) => transducers.push(transducer.to_owned()),
            None => self
                .tasks
                .push((task.to_owned(), vec![transducer.to_owned()])),
        }
    }

    pub fn get(&self, task: &str) -> Option<&[String]> {
        self.tasks
            .iter()
            .find(|(name, _)| name == task)
            .map(|(_, transducers)| transducers.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tasks
            .iter()
            .map(|(task, transducers)| (task.as_str(), transducers.as_slice()))
    }

    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|(task, _)| task.as_str())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Builds the index from a list of file names.
    pub fn from_file_names<I, S>(names: I) -> ScanReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pattern = glob::Pattern::new(DIA_PATTERN).ok();
        let mut report = ScanReport::default();

        for name in names {
            let name = name.as_ref();
            if !name.ends_with(DIA_EXTENSION) {
                continue;
            }

            let parsed = if pattern.as_ref().is_none_or(|p| p.matches(name)) {
                split_file_name(name)
            } else {
                None
            };

            match parsed {
                Some((task, transducer)) => report.index.insert(task, transducer),
                None => {
                    log::warn!("Skipping {name}: expected <task>#<transducer>{DIA_EXTENSION}");
                    report.skipped.push(name.to_owned());
                }
            }
        }

        report
    }

    /// Scans `dir` for `<task>#<transducer>.dia` files.
    pub fn scan(dir: &Path) -> Result<ScanReport> {
        let entries = fs::read_dir(dir).map_err(|e| GraphViewerError::from_io(e, dir))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| GraphViewerError::from_io(e, dir))?;
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        let report = Self::from_file_names(&names);
        log::info!(
            "Indexed {} tasks from {:?} ({} skipped)",
            report.index.len(),
            dir,
            report.skipped.len()
        );
        Ok(report)
    }
}

/// File name for a task/transducer pair.
pub fn dia_file_name(task: &str, transducer: &str) -> String {
    format!("{task}#{transducer}{DIA_EXTENSION}")
}

/// Splits `<task>#<transducer>.dia` at the first `#`.
fn split_file_name(name: &str) -> Option<(&str, &str)> {
    let stem = name.strip_suffix(DIA_EXTENSION)?;
    let (task, transducer) = stem.split_once('#')?;
    if task.is_empty() || transducer.is_empty() {
        return None;
    }
    Some((task, transducer))
}
