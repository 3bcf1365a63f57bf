/// Data layer: core types, loading, and label summarization.
///
/// Architecture:
/// ```text
///  .csv / .parquet / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  named columns, row-major cells
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  label column → mean/median, histogram, box stats
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod summary;

use std::path::Path;

use anyhow::Result;

use model::Dataset;
use summary::LabelSummary;

/// Load a dataset, summarize its label column, and print the console
/// previews (first 10 rows, then first 15).
pub fn open_dataset(path: &Path) -> Result<(Dataset, LabelSummary)> {
    let dataset = loader::load_file(path)?;
    let summary = LabelSummary::from_dataset(&dataset)?;
    log::info!(
        "Loaded {} rows x {} columns from {}, label column '{}'",
        dataset.len(),
        dataset.n_columns(),
        path.display(),
        summary.column,
    );
    dataset.print_previews();
    Ok((dataset, summary))
}
