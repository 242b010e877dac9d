use super::graphic_window::MAX_LINES;

pub const INVALID_COUNT_MESSAGE: &str = "Invalid number of transducers";
pub const INVALID_COUNT_DETAIL: &str =
    "You must choose at least 1 and no more than 24 transducers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserOutcome {
    Pending,
    Cancelled,
    Chosen(Vec<String>),
    InvalidCount(usize),
}

/// Dialog listing the table columns that can be drawn against the first one.
#[derive(Debug, Clone)]
pub struct ColumnChooser {
    pub columns: Vec<String>,
    pub selected: Vec<bool>,
}

/// Checks that between 1 and [`MAX_LINES`] columns were chosen.
pub fn validate_selection(chosen: &[String]) -> Result<(), usize> {
    if chosen.is_empty() || chosen.len() > MAX_LINES {
        return Err(chosen.len());
    }
    Ok(())
}

impl ColumnChooser {
    /// The first table column is the x axis and is not offered.
    pub fn new(table_columns: &[String]) -> Self {
        let columns: Vec<String> = table_columns.iter().skip(1).cloned().collect();
        Self {
            selected: vec![false; columns.len()],
            columns,
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(selected) = self.selected.get_mut(index) {
            *selected = !*selected;
        }
    }

    pub fn chosen(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(&self.selected)
            .filter(|&(_, &selected)| selected)
            .map(|(column, _)| column.clone())
            .collect()
    }

    pub fn confirm(&self) -> ChooserOutcome {
        let chosen = self.chosen();
        match validate_selection(&chosen) {
            Ok(()) => ChooserOutcome::Chosen(chosen),
            Err(count) => ChooserOutcome::InvalidCount(count),
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ChooserOutcome {
        let mut open = true;
        let mut outcome = ChooserOutcome::Pending;

        egui::Window::new("Choose Graphs to Display")
            .open(&mut open)
            .collapsible(false)
            .default_size([400.0, 400.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("ColumnChooserScrollArea")
                    .max_height(320.0)
                    .show(ui, |ui| {
                        for index in 0..self.columns.len() {
                            if ui
                                .selectable_label(self.selected[index], &self.columns[index])
                                .clicked()
                            {
                                self.toggle(index);
                            }
                        }
                    });

                ui.separator();
                if ui.button("Ok").clicked() {
                    outcome = self.confirm();
                }
            });

        if !open {
            return ChooserOutcome::Cancelled;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(n: usize) -> Vec<String> {
        std::iter::once("Time".to_owned())
            .chain((1..=n).map(|i| format!("P{i}")))
            .collect()
    }

    #[test]
    fn test_first_column_is_not_offered() {
        let chooser = ColumnChooser::new(&columns(2));
        assert_eq!(chooser.columns, vec!["P1", "P2"]);
    }

    #[test]
    fn test_nothing_chosen_is_invalid() {
        let chooser = ColumnChooser::new(&columns(3));
        assert_eq!(chooser.confirm(), ChooserOutcome::InvalidCount(0));
    }

    #[test]
    fn test_chosen_in_column_order() {
        let mut chooser = ColumnChooser::new(&columns(3));
        chooser.toggle(2);
        chooser.toggle(0);
        assert_eq!(
            chooser.confirm(),
            ChooserOutcome::Chosen(vec!["P1".to_owned(), "P3".to_owned()])
        );
        chooser.toggle(0);
        assert_eq!(chooser.chosen(), vec!["P3"]);
    }

    #[test]
    fn test_more_than_max_lines_is_invalid() {
        let mut chooser = ColumnChooser::new(&columns(MAX_LINES + 1));
        for index in 0..chooser.columns.len() {
            chooser.toggle(index);
        }
        assert_eq!(chooser.confirm(), ChooserOutcome::InvalidCount(MAX_LINES + 1));

        chooser.toggle(0);
        assert!(matches!(chooser.confirm(), ChooserOutcome::Chosen(c) if c.len() == MAX_LINES));
    }
}
