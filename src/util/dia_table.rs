use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphViewerError, Result};

/// A `.dia` result table: a banner line, a whitespace separated header, then
/// whitespace separated numeric rows.
#[derive(Clone, Debug)]
pub struct DiaTable {
    pub source: PathBuf,
    pub dataframe: DataFrame,
    pub columns: Vec<String>,
}

/// An `i64` series when every cell is an integer, otherwise `f64`.
///
/// Cells must already parse as `f64`.
fn typed_series(name: &str, cells: &[&str]) -> Series {
    let integers: Option<Vec<i64>> = cells.iter().map(|cell| cell.parse().ok()).collect();
    match integers {
        Some(values) => Series::new(name.into(), values),
        None => {
            let values: Vec<f64> = cells
                .iter()
                .map(|cell| cell.parse().unwrap_or(f64::NAN))
                .collect();
            Series::new(name.into(), values)
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GraphViewerError::from_io(e, path))
}

impl DiaTable {
    pub fn load(dir: &Path, file_name: &str) -> Result<Self> {
        let path = dir.join(file_name);
        let table = Self::parse(&read_text(&path)?, &path)?;
        log::info!(
            "Loaded {:?}: {} rows, columns {:?}",
            path,
            table.height(),
            table.columns
        );
        Ok(table)
    }

    /// Parses the text of a `.dia` file. `source` is only used for error messages.
    pub fn parse(text: &str, source: &Path) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .skip(1)
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((_, header)) = lines.next() else {
            return Err(GraphViewerError::MissingHeader(source.to_path_buf()));
        };
        let columns: Vec<String> = header.split_whitespace().map(str::to_owned).collect();
        for (index, name) in columns.iter().enumerate() {
            if columns[..index].contains(name) {
                return Err(GraphViewerError::DuplicateColumn(name.clone()));
            }
        }

        // cells stay as text per column until the column type is known
        let mut cells_by_column: Vec<Vec<&str>> = vec![Vec::new(); columns.len()];
        for (line_number, line) in lines {
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != columns.len() {
                return Err(GraphViewerError::RaggedRow {
                    line: line_number,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }

            for ((cell, column), values) in cells.iter().zip(&columns).zip(&mut cells_by_column) {
                if cell.parse::<f64>().is_err() {
                    return Err(GraphViewerError::Parse {
                        line: line_number,
                        column: column.clone(),
                        value: (*cell).to_owned(),
                    });
                }
                values.push(*cell);
            }
        }

        let dataframe = DataFrame::new_infer_height(
            columns
                .iter()
                .zip(&cells_by_column)
                .map(|(name, cells)| Column::from(typed_series(name, cells)))
                .collect(),
        )
        .expect("could not create DataFrame from iterator");

        Ok(Self {
            source: source.to_path_buf(),
            dataframe,
            columns,
        })
    }

    pub fn height(&self) -> usize {
        self.dataframe.height()
    }

    pub fn get_column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    /// Values of a column as `f64`, nulls become NaN.
    pub fn column_values(&self, name: &str) -> Result<Vec<f64>> {
        let column = self
            .dataframe
            .column(name)
            .map_err(|_| GraphViewerError::MissingColumn(name.to_owned()))?;
        let values = column.cast(&DataType::Float64)?;
        Ok(values
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// `(x, y)` points pairing the first column with `name`.
    pub fn series(&self, name: &str) -> Result<Vec<[f64; 2]>> {
        let x_name = self
            .columns
            .first()
            .ok_or_else(|| GraphViewerError::MissingColumn(name.to_owned()))?;
        let x = self.column_values(x_name)?;
        let y = self.column_values(name)?;
        Ok(x.into_iter().zip(y).map(|(x, y)| [x, y]).collect())
    }

    pub fn cell_text(&self, row: usize, column: usize) -> String {
        self.dataframe
            .columns()
            .get(column)
            .and_then(|c| c.get(row).ok())
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let mut table = TableBuilder::new(ui)
            .id_salt("dia_table")
            .striped(true)
            .resizable(true)
            .column(Column::exact(40.0)); // No.
        for _ in &self.columns {
            table = table.column(Column::initial(90.0).at_least(40.0));
        }

        table
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("No.");
                });
                for name in &self.columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, self.height(), |mut row| {
                    let index = row.index();
                    row.col(|ui| {
                        ui.label(index.to_string());
                    });
                    for column in 0..self.columns.len() {
                        row.col(|ui| {
                            ui.label(self.cell_text(index, column));
                        });
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<DiaTable> {
        DiaTable::parse(text, Path::new("test.dia"))
    }

    #[test]
    fn test_banner_is_skipped_and_header_names_columns() {
        let table = parse("header banner\nT X Y\n0 1.0 2.0\n").unwrap();
        assert_eq!(table.columns, vec!["T", "X", "Y"]);
        assert_eq!(table.height(), 1);

        let t = table.dataframe.column("T").unwrap().i64().unwrap().get(0);
        assert_eq!(t, Some(0));
        assert_eq!(table.column_values("X").unwrap(), vec![1.0]);
        assert_eq!(table.column_values("Y").unwrap(), vec![2.0]);
    }

    #[test]
    fn test_runs_of_whitespace_separate_cells() {
        let table = parse("banner\n  Time\tP1   P2\n0.0   1000.0\t-2\n0.5 2.5 3\n").unwrap();
        assert_eq!(table.columns, vec!["Time", "P1", "P2"]);
        assert_eq!(table.column_values("P1").unwrap(), vec![1000.0, 2.5]);
        assert_eq!(table.column_values("P2").unwrap(), vec![-2.0, 3.0]);
    }

    #[test]
    fn test_series_pairs_first_column() {
        let table = parse("banner\nTime A B\n0 10 20\n1 11 21\n").unwrap();
        assert_eq!(
            table.series("B").unwrap(),
            vec![[0.0, 20.0], [1.0, 21.0]]
        );
    }

    #[test]
    fn test_malformed_number_is_parse_error() {
        let err = parse("banner\nT X\n0 1.0\n1 abc\n").unwrap_err();
        match err {
            GraphViewerError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 4);
                assert_eq!(column, "X");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let err = parse("banner\nT X Y\n0 1.0\n").unwrap_err();
        assert!(matches!(
            err,
            GraphViewerError::RaggedRow {
                line: 3,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse("only a banner\n").unwrap_err(),
            GraphViewerError::MissingHeader(_)
        ));
        assert!(matches!(
            parse("").unwrap_err(),
            GraphViewerError::MissingHeader(_)
        ));
    }

    fn dtypes(table: &DiaTable) -> Vec<DataType> {
        table.dataframe.dtypes()
    }

    #[test]
    fn test_integer_columns_only_when_every_cell_is_integer() {
        let table = parse("banner\nT X Y\n0 +1 1\n1 +2 1.5\n").unwrap();
        assert_eq!(
            dtypes(&table),
            vec![DataType::Int64, DataType::Int64, DataType::Float64]
        );
        assert_eq!(table.column_values("X").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_integer_beyond_i64_is_float() {
        let table = parse("banner\nT X\n0 99999999999999999999\n1 2\n").unwrap();
        assert_eq!(dtypes(&table), vec![DataType::Int64, DataType::Float64]);
        assert_eq!(table.column_values("X").unwrap(), vec![1e20, 2.0]);
    }

    #[test]
    fn test_nan_and_infinity_cells_are_float() {
        let table = parse("banner\nT X Y\n0 nan 1\n1 inf -Infinity\n").unwrap();
        assert_eq!(
            dtypes(&table),
            vec![DataType::Int64, DataType::Float64, DataType::Float64]
        );
        let x = table.column_values("X").unwrap();
        assert!(x[0].is_nan());
        assert_eq!(x[1], f64::INFINITY);
        assert_eq!(table.column_values("Y").unwrap(), vec![1.0, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        assert!(matches!(
            parse("banner\nT X X\n0 1 2\n").unwrap_err(),
            GraphViewerError::DuplicateColumn(name) if name == "X"
        ));
    }

    #[test]
    fn test_header_without_rows() {
        let table = parse("banner\nT X\n").unwrap();
        assert_eq!(table.height(), 0);
        assert_eq!(table.get_column_names(), vec!["T", "X"]);
    }

    #[test]
    fn test_unknown_column() {
        let table = parse("banner\nT X\n0 1\n").unwrap();
        assert!(matches!(
            table.column_values("Z").unwrap_err(),
            GraphViewerError::MissingColumn(_)
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A#1.dia"), "banner\nT X\n0 1.5\n1 2.5\n").unwrap();

        let table = DiaTable::load(dir.path(), "A#1.dia").unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.cell_text(1, 1), "2.5");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("A#1.dia");
        fs::write(&path, "banner\nT X\n0 1\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file modes; the read must then succeed
        let readable = fs::File::open(&path).is_ok();
        let result = DiaTable::load(dir.path(), "A#1.dia");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        if readable {
            assert!(result.is_ok());
        } else {
            assert!(matches!(
                result.unwrap_err(),
                GraphViewerError::PermissionDenied(p) if p == path
            ));
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DiaTable::load(dir.path(), "A#1.dia").unwrap_err();
        assert!(matches!(err, GraphViewerError::File(_)));
    }
}
