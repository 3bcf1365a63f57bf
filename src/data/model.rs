use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common tabular dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric summaries.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Label extraction errors
// ---------------------------------------------------------------------------

/// Failure modes when reading the label (last) column as a numeric series.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("dataset has no columns")]
    NoColumns,
    #[error("dataset has no rows")]
    NoRows,
    #[error("label column '{column}' has a non-numeric value at row {row}: '{value}'")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// A loaded table: named columns, row-major cells. Read-only after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Ordered column names; the last one is the label.
    pub column_names: Vec<String>,
    /// Rows, each the same length as `column_names`.
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Dataset { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// First `min(n, len)` rows, in original order.
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Name of the label (last) column.
    pub fn label_name(&self) -> Option<&str> {
        self.column_names.last().map(String::as_str)
    }

    /// The label column as a numeric series. `Null` cells become NaN
    /// (missing); any other non-numeric cell is an error.
    pub fn label_values(&self) -> Result<Vec<f64>, LabelError> {
        let col_idx = self.n_columns().checked_sub(1).ok_or(LabelError::NoColumns)?;
        if self.rows.is_empty() {
            return Err(LabelError::NoRows);
        }
        let column = self.column_names[col_idx].clone();

        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = &cells[col_idx];
                match cell {
                    CellValue::Null => Ok(f64::NAN),
                    _ => cell.as_f64().ok_or_else(|| LabelError::NotNumeric {
                        column: column.clone(),
                        row,
                        value: cell.to_string(),
                    }),
                }
            })
            .collect()
    }

    /// Render the first `n` rows as an aligned text table with an index
    /// column, in the style of a pandas `head()` printout.
    pub fn preview(&self, n: usize) -> String {
        let rows = self.head(n);
        let idx_width = rows.len().saturating_sub(1).to_string().len();

        let mut widths: Vec<usize> = self.column_names.iter().map(|c| c.len()).collect();
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        for row in &cells {
            for (i, s) in row.iter().enumerate() {
                widths[i] = widths[i].max(s.len());
            }
        }

        let mut out = String::new();
        out.push_str(&" ".repeat(idx_width));
        for (name, &w) in self.column_names.iter().zip(&widths) {
            out.push_str("  ");
            out.push_str(&format!("{name:>w$}"));
        }
        for (i, row) in cells.iter().enumerate() {
            out.push('\n');
            out.push_str(&format!("{i:>idx_width$}"));
            for (s, &w) in row.iter().zip(&widths) {
                out.push_str("  ");
                out.push_str(&format!("{s:>w$}"));
            }
        }
        out
    }

    /// Print the console previews: the first 10 rows, then the first 15.
    pub fn print_previews(&self) {
        println!("{}", self.preview(10));
        println!();
        println!("{}", self.preview(15));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n_rows: usize) -> Dataset {
        let rows = (0..n_rows)
            .map(|i| {
                vec![
                    CellValue::String(format!("row_{i}")),
                    CellValue::Integer(i as i64 * 10),
                ]
            })
            .collect();
        Dataset::new(vec!["name".into(), "rentals".into()], rows)
    }

    #[test]
    fn head_returns_exactly_n_rows_in_order() {
        let ds = sample(20);
        let head = ds.head(10);
        assert_eq!(head.len(), 10);
        assert_eq!(head[0][0], CellValue::String("row_0".into()));
        assert_eq!(head[9][0], CellValue::String("row_9".into()));
    }

    #[test]
    fn head_is_clamped_to_table_length() {
        let ds = sample(4);
        assert_eq!(ds.head(15).len(), 4);
    }

    #[test]
    fn preview_has_header_plus_n_lines() {
        let ds = sample(20);
        assert_eq!(ds.preview(10).lines().count(), 11);
        assert_eq!(ds.preview(15).lines().count(), 16);
    }

    #[test]
    fn label_values_reads_last_column() {
        let ds = sample(3);
        assert_eq!(ds.label_values().unwrap(), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn label_values_null_becomes_nan() {
        let ds = Dataset::new(
            vec!["x".into(), "y".into()],
            vec![
                vec![CellValue::Integer(1), CellValue::Float(2.5)],
                vec![CellValue::Integer(2), CellValue::Null],
            ],
        );
        let vals = ds.label_values().unwrap();
        assert_eq!(vals[0], 2.5);
        assert!(vals[1].is_nan());
    }

    #[test]
    fn label_values_rejects_text() {
        let ds = Dataset::new(
            vec!["x".into(), "y".into()],
            vec![vec![CellValue::Integer(1), CellValue::String("oops".into())]],
        );
        match ds.label_values() {
            Err(LabelError::NotNumeric { column, row, .. }) => {
                assert_eq!(column, "y");
                assert_eq!(row, 0);
            }
            other => panic!("expected NotNumeric, got {other:?}"),
        }
    }

    #[test]
    fn label_values_rejects_empty_table() {
        let ds = Dataset::new(vec!["y".into()], vec![]);
        assert!(matches!(ds.label_values(), Err(LabelError::NoRows)));
    }
}
