use crate::data::model::TotalsRecord;
use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Pairwise growth between census totals
// ---------------------------------------------------------------------------

/// Percentage growth between each pair of census totals. Values keep full
/// precision; rounding to two decimals happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthResult {
    pub from_2010_to_2015: f64,
    pub from_2015_to_2020: f64,
    pub from_2010_to_2020: f64,
}

/// Relative change from `earlier` to `later`, as a percentage. Each pair uses
/// only its own two endpoints; nothing is compounded.
pub fn growth_percent(earlier: f64, later: f64, baseline: &str) -> Result<f64, AnalysisError> {
    if earlier == 0.0 {
        return Err(AnalysisError::DivisionByZero {
            baseline: baseline.to_string(),
        });
    }
    Ok(((later - earlier) / earlier) * 100.0)
}

/// Growth percentages for 2010→2015, 2015→2020 and 2010→2020.
///
/// Fails with [`AnalysisError::DivisionByZero`] when a baseline total is
/// zero; the caller reports this and the session continues.
pub fn compute_growth(totals: &TotalsRecord) -> Result<GrowthResult, AnalysisError> {
    Ok(GrowthResult {
        from_2010_to_2015: growth_percent(totals.total_2010, totals.total_2015, "2010 total")?,
        from_2015_to_2020: growth_percent(totals.total_2015, totals.total_2020, "2015 total")?,
        from_2010_to_2020: growth_percent(totals.total_2010, totals.total_2020, "2010 total")?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TOTALS: TotalsRecord = TotalsRecord {
        total_2010: 100000.0,
        total_2015: 120000.0,
        total_2020: 150000.0,
    };

    #[test]
    fn each_pair_uses_only_its_own_endpoints() {
        let growth = compute_growth(&TOTALS).unwrap();
        assert!((growth.from_2010_to_2015 - 20.0).abs() < 1e-12);
        assert!((growth.from_2015_to_2020 - 25.0).abs() < 1e-12);
        // 2010→2020 is computed directly, not by compounding the halves.
        assert!((growth.from_2010_to_2020 - 50.0).abs() < 1e-12);
    }

    #[test]
    fn shrinking_totals_yield_negative_growth() {
        let growth = growth_percent(200.0, 150.0, "2010 total").unwrap();
        assert!((growth + 25.0).abs() < 1e-12);
    }

    #[test]
    fn zero_baseline_is_division_by_zero() {
        let totals = TotalsRecord {
            total_2010: 0.0,
            ..TOTALS
        };
        assert!(matches!(
            compute_growth(&totals),
            Err(AnalysisError::DivisionByZero { .. })
        ));
    }
}
