use std::fmt;

// ---------------------------------------------------------------------------
// CensusYear – the three fixed snapshot years
// ---------------------------------------------------------------------------

/// One of the census snapshot years with available data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CensusYear {
    Y2010,
    Y2015,
    Y2020,
}

impl CensusYear {
    /// All configured years, oldest first.
    pub const ALL: [CensusYear; 3] = [CensusYear::Y2010, CensusYear::Y2015, CensusYear::Y2020];

    pub fn as_i32(self) -> i32 {
        match self {
            CensusYear::Y2010 => 2010,
            CensusYear::Y2015 => 2015,
            CensusYear::Y2020 => 2020,
        }
    }
}

impl fmt::Display for CensusYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

// ---------------------------------------------------------------------------
// Row – one barangay record
// ---------------------------------------------------------------------------

/// A single barangay's population record for one census year.
/// Duplicate names in a source are kept as independent entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub population: f64,
}

impl Row {
    pub fn new(name: impl Into<String>, population: f64) -> Self {
        Row {
            name: name.into(),
            population,
        }
    }
}

// ---------------------------------------------------------------------------
// YearlyDataset – all rows for one census year
// ---------------------------------------------------------------------------

/// The parsed barangay table for one census year, in source order.
/// Every row had both `Name` and `Population` columns (checked at load).
#[derive(Debug, Clone)]
pub struct YearlyDataset {
    pub year: CensusYear,
    pub rows: Vec<Row>,
}

impl YearlyDataset {
    /// The population column, in row order.
    pub fn populations(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.population).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// TotalsRecord – citywide totals per census year
// ---------------------------------------------------------------------------

/// Citywide total population per census year, taken from the **last** row of
/// the totals source. Earlier rows are historical/partial and ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsRecord {
    pub total_2010: f64,
    pub total_2015: f64,
    pub total_2020: f64,
}

impl TotalsRecord {
    pub fn total_for(&self, year: CensusYear) -> f64 {
        match year {
            CensusYear::Y2010 => self.total_2010,
            CensusYear::Y2015 => self.total_2015,
            CensusYear::Y2020 => self.total_2020,
        }
    }

    /// (year, total) pairs for trend fitting, oldest first.
    pub fn as_points(&self) -> [(i32, f64); 3] {
        CensusYear::ALL.map(|y| (y.as_i32(), self.total_for(y)))
    }
}
