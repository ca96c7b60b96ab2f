use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::config::SourceConfig;
use crate::data::model::{CensusYear, Row, TotalsRecord, YearlyDataset};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Required schemas
// ---------------------------------------------------------------------------

const YEARLY_COLUMNS: [&str; 2] = ["Name", "Population"];
const TOTALS_COLUMNS: [&str; 3] = [
    "Population 2010 Census",
    "Population 2015 Census",
    "Population 2020 Census",
];

/// One barangay row as it appears in a yearly CSV.
#[derive(Debug, Deserialize)]
struct RawYearlyRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Population")]
    population: f64,
}

/// One row of the totals CSV.
#[derive(Debug, Deserialize)]
struct RawTotalsRecord {
    #[serde(rename = "Population 2010 Census")]
    total_2010: f64,
    #[serde(rename = "Population 2015 Census")]
    total_2015: f64,
    #[serde(rename = "Population 2020 Census")]
    total_2020: f64,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the barangay table for one census year.
///
/// Fails with [`LoadError::SourceUnavailable`] when the file cannot be opened
/// or a record cannot be parsed, and [`LoadError::SchemaInvalid`] when the
/// `Name` or `Population` column is absent.
pub fn load_year(config: &SourceConfig, year: CensusYear) -> Result<YearlyDataset, LoadError> {
    let source_id = year.to_string();
    let mut reader = open(&source_id, config.path_for(year))?;
    check_columns(&source_id, &mut reader, &YEARLY_COLUMNS)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let record: RawYearlyRecord = result.map_err(|e| unavailable(&source_id, e))?;
        rows.push(Row::new(record.name, record.population));
    }

    let dataset = YearlyDataset { year, rows };
    if dataset.is_empty() {
        log::warn!("the {source_id} census table has no rows");
    }
    log::info!(
        "loaded {} rows from the {source_id} census table",
        dataset.len()
    );
    Ok(dataset)
}

/// Load the citywide totals. The **last** row is authoritative; any earlier
/// rows are skipped over deliberately.
pub fn load_totals(config: &SourceConfig) -> Result<TotalsRecord, LoadError> {
    let source_id = "totals";
    let mut reader = open(source_id, &config.totals)?;
    check_columns(source_id, &mut reader, &TOTALS_COLUMNS)?;

    let mut last: Option<RawTotalsRecord> = None;
    for result in reader.deserialize() {
        last = Some(result.map_err(|e| unavailable(source_id, e))?);
    }

    let record = last.ok_or_else(|| LoadError::Empty {
        source_id: source_id.to_string(),
    })?;
    Ok(TotalsRecord {
        total_2010: record.total_2010,
        total_2015: record.total_2015,
        total_2020: record.total_2020,
    })
}

/// Eagerly validate every configured source before the session starts.
///
/// The explorer refuses to run against a partially-broken dataset: the first
/// failure is returned with the offending source id and nothing else runs.
pub fn validate_all(config: &SourceConfig) -> Result<(), LoadError> {
    for &(year, _) in &config.yearly {
        let dataset = load_year(config, year)?;
        log::info!("validated {year} source ({} rows)", dataset.len());
    }
    load_totals(config)?;
    log::info!("validated totals source");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open(source_id: &str, path: &Path) -> Result<csv::Reader<File>, LoadError> {
    csv::Reader::from_path(path).map_err(|e| unavailable(source_id, e))
}

fn unavailable(source_id: &str, source: csv::Error) -> LoadError {
    LoadError::SourceUnavailable {
        source_id: source_id.to_string(),
        source,
    }
}

fn check_columns(
    source_id: &str,
    reader: &mut csv::Reader<File>,
    required: &[&str],
) -> Result<(), LoadError> {
    let headers = reader
        .headers()
        .map_err(|e| unavailable(source_id, e))?
        .clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::SchemaInvalid {
                source_id: source_id.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_source(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn full_config(dir: &TempDir) -> SourceConfig {
        write_source(
            dir,
            "2010.csv",
            "Name,Population\nIrisan,1200\nLoakan,800\n",
        );
        write_source(dir, "2015.csv", "Name,Population\nIrisan,1400\nLoakan,900\n");
        write_source(
            dir,
            "2020.csv",
            "Name,Population\nIrisan,1600\nLoakan,1000\n",
        );
        write_source(
            dir,
            "total.csv",
            "Population 2010 Census,Population 2015 Census,Population 2020 Census\n\
             90000,95000,99000\n\
             100000,120000,150000\n",
        );
        SourceConfig::from_dir(dir.path())
    }

    #[test]
    fn loads_yearly_rows_in_source_order() {
        let dir = TempDir::new().unwrap();
        let config = full_config(&dir);

        let dataset = load_year(&config, CensusYear::Y2010).unwrap();
        assert_eq!(dataset.year, CensusYear::Y2010);
        assert_eq!(dataset.rows[0], Row::new("Irisan", 1200.0));
        assert_eq!(dataset.rows[1], Row::new("Loakan", 800.0));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let config = SourceConfig::from_dir(dir.path());

        let err = load_year(&config, CensusYear::Y2015).unwrap_err();
        assert!(matches!(
            err,
            LoadError::SourceUnavailable { ref source_id, .. } if source_id == "2015"
        ));
    }

    #[test]
    fn missing_population_column_is_schema_invalid() {
        let dir = TempDir::new().unwrap();
        write_source(&dir, "2010.csv", "Name,Households\nIrisan,300\n");
        let config = SourceConfig::from_dir(dir.path());

        let err = load_year(&config, CensusYear::Y2010).unwrap_err();
        assert!(matches!(
            err,
            LoadError::SchemaInvalid { ref column, .. } if column == "Population"
        ));
    }

    #[test]
    fn totals_use_the_last_row() {
        let dir = TempDir::new().unwrap();
        let config = full_config(&dir);

        let totals = load_totals(&config).unwrap();
        assert_eq!(totals.total_2010, 100000.0);
        assert_eq!(totals.total_2015, 120000.0);
        assert_eq!(totals.total_2020, 150000.0);
    }

    #[test]
    fn totals_missing_column_is_schema_invalid() {
        let dir = TempDir::new().unwrap();
        let mut config = full_config(&dir);
        write_source(
            &dir,
            "broken_total.csv",
            "Population 2010 Census,Population 2015 Census\n100,200\n",
        );
        config.totals = dir.path().join("broken_total.csv");

        let err = load_totals(&config).unwrap_err();
        assert!(matches!(
            err,
            LoadError::SchemaInvalid { ref column, .. } if column == "Population 2020 Census"
        ));
        assert!(validate_all(&config).is_err());
    }

    #[test]
    fn validate_all_accepts_a_complete_layout() {
        let dir = TempDir::new().unwrap();
        let config = full_config(&dir);
        assert!(validate_all(&config).is_ok());
    }
}
