use std::path::{Path, PathBuf};

use crate::data::model::CensusYear;

// ---------------------------------------------------------------------------
// Source configuration
// ---------------------------------------------------------------------------

/// Where the census CSV sources live. Built once in `main` and passed to the
/// loader; replaces any notion of a global file table.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Per-year barangay tables, in census-year order.
    pub yearly: [(CensusYear, PathBuf); 3],
    /// Citywide totals table (one total column per census year).
    pub totals: PathBuf,
}

impl SourceConfig {
    /// Conventional layout: `<dir>/2010.csv`, `<dir>/2015.csv`,
    /// `<dir>/2020.csv` and `<dir>/total.csv`.
    pub fn from_dir(dir: &Path) -> Self {
        let yearly = CensusYear::ALL
            .map(|year| (year, dir.join(format!("{}.csv", year.as_i32()))));
        SourceConfig {
            yearly,
            totals: dir.join("total.csv"),
        }
    }

    /// Path of the table for one census year.
    pub fn path_for(&self, year: CensusYear) -> &Path {
        let (_, path) = self
            .yearly
            .iter()
            .find(|(y, _)| *y == year)
            .expect("all census years are configured");
        path
    }
}
