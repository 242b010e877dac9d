use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{GraphViewerError, Result};

pub const AUTOFILL_DATE: &str = "autofill date";
pub const AUTOFILL_SHEET_DATA: &str = "autofill sheet data";

pub const SETTINGS_FILE_NAME: &str = "graph_viewer_settings.json";
pub const SETTINGS_PATH_VAR: &str = "GRAPH_VIEWER_SETTINGS";

/// Where settings live: `$GRAPH_VIEWER_SETTINGS`, else the eframe storage
/// directory, else the working directory.
pub fn default_path(app_id: &str) -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_PATH_VAR) {
        return PathBuf::from(path);
    }
    eframe::storage_dir(app_id)
        .map(|dir| dir.join(SETTINGS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}

/// A typed setting value, stored as `{"type": ..., "value": ...}`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl SettingValue {
    fn same_type(&self, other: &SettingValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Application settings backed by a JSON file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub path: PathBuf,
    fields: BTreeMap<String, SettingValue>,
}

fn default_fields() -> BTreeMap<String, SettingValue> {
    BTreeMap::from([
        (AUTOFILL_DATE.to_owned(), SettingValue::Bool(true)),
        (AUTOFILL_SHEET_DATA.to_owned(), SettingValue::Bool(true)),
    ])
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults(Path::new(SETTINGS_FILE_NAME))
    }
}

impl Settings {
    pub fn with_defaults(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            fields: default_fields(),
        }
    }

    /// Reads `path`, falling back to defaults when it does not exist.
    ///
    /// Unknown keys and values of the wrong type are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings = Self::with_defaults(path);

        if !path.exists() {
            log::info!("No settings file at {path:?}, using defaults");
            return Ok(settings);
        }

        let text =
            std::fs::read_to_string(path).map_err(|err| GraphViewerError::from_io(err, path))?;
        let stored: BTreeMap<String, serde_json::Value> = serde_json::from_str(&text)?;

        for (key, raw) in stored {
            let Some(current) = settings.fields.get_mut(&key) else {
                log::warn!("Ignoring unknown setting '{key}'");
                continue;
            };
            match serde_json::from_value::<SettingValue>(raw) {
                Ok(value) if current.same_type(&value) => *current = value,
                Ok(_) => log::warn!("Ignoring setting '{key}': wrong type"),
                Err(e) => log::warn!("Ignoring setting '{key}': {e}"),
            }
        }

        log::info!("Loaded settings from {path:?}");
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|err| GraphViewerError::from_io(err, parent))?;
        }

        let text = serde_json::to_string_pretty(&self.fields)?;
        std::fs::write(&self.path, text).map_err(|err| GraphViewerError::from_io(err, &self.path))?;
        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.fields.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.fields.get(key) {
            Some(SettingValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<()> {
        match self.fields.get_mut(key) {
            Some(current) if current.same_type(&value) => {
                *current = value;
                Ok(())
            }
            _ => Err(GraphViewerError::Settings(
                "Bad key or wrong variable type".to_owned(),
            )),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Checkboxes for the boolean settings. Returns true if one was toggled.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        for (key, value) in &mut self.fields {
            if let SettingValue::Bool(checked) = value {
                changed |= ui.checkbox(checked, key.as_str()).changed();
            }
        }
        changed
    }
}
