pub const REQUIRED_MESSAGE: &str = "A value is required";
pub const NUMBER_MESSAGE: &str = "A number is required";
pub const CHOICE_MESSAGE: &str = "Choose one of the listed values";

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    /// An empty message marks a provisional failure, e.g. a rejected keystroke
    /// or an auto-completed choice that has not been confirmed yet.
    Invalid(String),
}

/// Result of the key-level check for a proposed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Accept,
    Reject,
    /// Replace the text with the single matching choice.
    Complete(String),
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FieldCore {
    pub value: String,
    pub state: FieldState,
}

/// Input validation shared by every form field variant.
///
/// Implementors provide the key-level and focus-out checks; `on_key` and
/// `on_focus_out` drive the state machine. Every pass starts by clearing the
/// previous error.
pub trait Validatable {
    fn core(&self) -> &FieldCore;
    fn core_mut(&mut self) -> &mut FieldCore;

    fn key_check(&self, _proposed: &str, _deleting: bool) -> KeyOutcome {
        KeyOutcome::Accept
    }

    fn focus_out_check(&self) -> Result<(), String> {
        Ok(())
    }

    /// Closed set of values the field accepts, if any.
    fn choices(&self) -> Option<&[String]> {
        None
    }

    fn value(&self) -> &str {
        &self.core().value
    }

    fn state(&self) -> &FieldState {
        &self.core().state
    }

    fn error(&self) -> Option<&str> {
        match &self.core().state {
            FieldState::Invalid(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self.core().state, FieldState::Invalid(_))
    }

    /// Sets the value programmatically without validating it.
    fn set_value(&mut self, value: &str) {
        let core = self.core_mut();
        core.value = value.to_owned();
        core.state = FieldState::Untouched;
    }

    fn clear(&mut self) {
        self.set_value("");
    }

    /// Handles a keystroke that would change the text to `proposed`.
    fn on_key(&mut self, proposed: &str) -> bool {
        let deleting = proposed.chars().count() < self.value().chars().count();
        let outcome = self.key_check(proposed, deleting);
        let core = self.core_mut();
        match outcome {
            KeyOutcome::Accept => {
                core.value = proposed.to_owned();
                core.state = FieldState::Valid;
                true
            }
            KeyOutcome::Clear => {
                core.value.clear();
                core.state = FieldState::Valid;
                true
            }
            KeyOutcome::Reject => {
                core.state = FieldState::Invalid(String::new());
                false
            }
            KeyOutcome::Complete(choice) => {
                core.value = choice;
                core.state = FieldState::Invalid(String::new());
                false
            }
        }
    }

    fn on_focus_out(&mut self) -> bool {
        match self.focus_out_check() {
            Ok(()) => {
                self.core_mut().state = FieldState::Valid;
                true
            }
            Err(message) => {
                self.core_mut().state = FieldState::Invalid(message);
                false
            }
        }
    }
}

/// Free text, always valid.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct PlainEntry {
    core: FieldCore,
}

impl PlainEntry {
    pub fn new(value: &str) -> Self {
        let mut entry = Self::default();
        entry.set_value(value);
        entry
    }
}

impl Validatable for PlainEntry {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }
}

/// An entry that requires a value.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct RequiredEntry {
    core: FieldCore,
}

impl RequiredEntry {
    pub fn new(value: &str) -> Self {
        let mut entry = Self::default();
        entry.set_value(value);
        entry
    }
}

impl Validatable for RequiredEntry {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn focus_out_check(&self) -> Result<(), String> {
        if self.core.value.is_empty() {
            return Err(REQUIRED_MESSAGE.to_owned());
        }
        Ok(())
    }
}

/// A required entry holding a decimal number.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct NumberEntry {
    core: FieldCore,
}

impl NumberEntry {
    pub fn new(value: f64) -> Self {
        let mut entry = Self::default();
        entry.set_number(value);
        entry
    }

    /// The value as a finite number. `inf` and `NaN` do not count.
    pub fn number(&self) -> Option<f64> {
        self.core
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    pub fn set_number(&mut self, value: f64) {
        self.set_value(&value.to_string());
    }
}

impl Validatable for NumberEntry {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn focus_out_check(&self) -> Result<(), String> {
        if self.core.value.trim().is_empty() {
            return Err(REQUIRED_MESSAGE.to_owned());
        }
        if self.number().is_none() {
            return Err(NUMBER_MESSAGE.to_owned());
        }
        Ok(())
    }
}

/// A combobox that only takes values from its list of choices.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct ValidatedCombobox {
    core: FieldCore,
    choices: Vec<String>,
}

impl ValidatedCombobox {
    pub fn new<S: AsRef<str>>(choices: &[S]) -> Self {
        Self {
            core: FieldCore::default(),
            choices: choices.iter().map(|c| c.as_ref().to_owned()).collect(),
        }
    }

    pub fn set_choices<S: AsRef<str>>(&mut self, choices: &[S]) {
        self.choices = choices.iter().map(|c| c.as_ref().to_owned()).collect();
    }

    /// Picks a value from the dropdown. Only listed values are taken.
    pub fn select(&mut self, choice: &str) -> bool {
        if !self.choices.iter().any(|c| c == choice) {
            return false;
        }
        self.core.value = choice.to_owned();
        self.core.state = FieldState::Valid;
        true
    }

    fn matching(&self, text: &str) -> Vec<&String> {
        let text = text.to_lowercase();
        self.choices
            .iter()
            .filter(|c| c.to_lowercase().starts_with(&text))
            .collect()
    }
}

impl Validatable for ValidatedCombobox {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FieldCore {
        &mut self.core
    }

    fn key_check(&self, proposed: &str, deleting: bool) -> KeyOutcome {
        if deleting {
            return KeyOutcome::Clear;
        }
        match self.matching(proposed).as_slice() {
            [] => KeyOutcome::Reject,
            [only] => KeyOutcome::Complete((*only).clone()),
            _ => KeyOutcome::Accept,
        }
    }

    fn focus_out_check(&self) -> Result<(), String> {
        if self.core.value.is_empty() {
            return Err(REQUIRED_MESSAGE.to_owned());
        }
        if !self.choices.iter().any(|c| *c == self.core.value) {
            return Err(CHOICE_MESSAGE.to_owned());
        }
        Ok(())
    }

    fn choices(&self) -> Option<&[String]> {
        Some(&self.choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> ValidatedCombobox {
        ValidatedCombobox::new(&["blue", "black", "green", "Grey"])
    }

    #[test]
    fn test_required_entry_empty_on_focus_out() {
        let mut entry = RequiredEntry::default();
        assert_eq!(entry.state(), &FieldState::Untouched);

        assert!(!entry.on_focus_out());
        assert_eq!(entry.error(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_required_entry_edit_clears_error() {
        let mut entry = RequiredEntry::default();
        entry.on_focus_out();
        assert!(entry.error().is_some());

        assert!(entry.on_key("a"));
        assert_eq!(entry.error(), None);
        assert_eq!(entry.value(), "a");

        assert!(entry.on_focus_out());
        assert_eq!(entry.state(), &FieldState::Valid);
    }

    #[test]
    fn test_number_entry() {
        let mut entry = NumberEntry::default();
        assert!(!entry.on_focus_out());
        assert_eq!(entry.error(), Some(REQUIRED_MESSAGE));

        entry.on_key("1.5x");
        assert!(!entry.on_focus_out());
        assert_eq!(entry.error(), Some(NUMBER_MESSAGE));

        entry.on_key("-1.5");
        assert!(entry.on_focus_out());
        assert_eq!(entry.number(), Some(-1.5));
    }

    #[test]
    fn test_number_entry_rejects_non_finite_values() {
        let mut entry = NumberEntry::default();
        for text in ["inf", "-Infinity", "NaN"] {
            entry.on_key(text);
            assert!(!entry.on_focus_out(), "{text} accepted");
            assert_eq!(entry.error(), Some(NUMBER_MESSAGE));
            assert_eq!(entry.number(), None);
        }
    }

    #[test]
    fn test_combobox_matching_ignores_case() {
        let mut combo = colors();
        // "G" matches "green" and "Grey"
        assert!(combo.on_key("G"));
        assert_eq!(combo.value(), "G");
        assert!(combo.on_key("GRE"));
        assert_eq!(combo.value(), "GRE");
        assert!(!combo.on_key("Gree"));
        assert_eq!(combo.value(), "green");
    }

    #[test]
    fn test_combobox_single_keystroke_match() {
        let mut combo = ValidatedCombobox::new(&["solid", "dashed", "dotted"]);
        assert!(!combo.on_key("s"));
        assert_eq!(combo.value(), "solid");
        assert!(!combo.is_valid());
        assert_eq!(combo.error(), None);

        assert!(combo.on_focus_out());
        assert!(combo.is_valid());
    }

    #[test]
    fn test_combobox_ambiguous_prefix_is_accepted() {
        let mut combo = colors();
        assert!(combo.on_key("b"));
        assert_eq!(combo.value(), "b");
        assert!(combo.on_key("bl"));
        assert_eq!(combo.value(), "bl");
        assert!(!combo.on_key("blu"));
        assert_eq!(combo.value(), "blue");
    }

    #[test]
    fn test_combobox_rejects_unknown_prefix() {
        let mut combo = colors();
        assert!(!combo.on_key("x"));
        assert_eq!(combo.value(), "");
        assert!(!combo.is_valid());
    }

    #[test]
    fn test_combobox_deletion_clears() {
        let mut combo = colors();
        combo.on_key("blu");
        assert_eq!(combo.value(), "blue");
        assert!(combo.on_key("blu"));
        assert_eq!(combo.value(), "");
        assert!(combo.is_valid());
    }

    #[test]
    fn test_combobox_focus_out() {
        let mut combo = colors();
        assert!(!combo.on_focus_out());
        assert_eq!(combo.error(), Some(REQUIRED_MESSAGE));

        combo.on_key("bl");
        assert!(!combo.on_focus_out());
        assert_eq!(combo.error(), Some(CHOICE_MESSAGE));

        assert!(combo.select("black"));
        assert!(combo.on_focus_out());
        assert!(!combo.select("purple"));
        assert_eq!(combo.value(), "black");
    }

    #[test]
    fn test_plain_entry_is_always_valid() {
        let mut entry = PlainEntry::default();
        assert!(entry.on_focus_out());
        assert!(entry.on_key("title"));
        assert!(entry.on_focus_out());
    }
}
