use crate::analysis::growth::growth_percent;
use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Linear trend extrapolation
// ---------------------------------------------------------------------------

/// Least-squares extrapolation of the census totals to a future year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub target_year: i32,
    /// Fitted total evaluated at `target_year`, full precision. Displayed
    /// rounded to whole persons.
    pub predicted: f64,
    /// Growth percentage from the latest known total to the prediction.
    pub growth_from_last: f64,
}

/// First-degree least-squares fit `total = slope * year + intercept`.
#[derive(Debug, Clone, Copy)]
struct LinearFit {
    slope: f64,
    intercept: f64,
}

impl LinearFit {
    /// Closed-form ordinary least squares over centered sums. With three
    /// points this is an exact least-squares fit, not a two-point line.
    fn fit(points: &[(i32, f64)]) -> Result<Self, AnalysisError> {
        let distinct = distinct_years(points);
        if distinct < 2 {
            return Err(AnalysisError::InsufficientData { distinct });
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|&(x, _)| x as f64).sum::<f64>() / n;
        let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let mut ss_xy = 0.0;
        let mut ss_xx = 0.0;
        for &(x, y) in points {
            let dx = x as f64 - mean_x;
            ss_xy += dx * (y - mean_y);
            ss_xx += dx * dx;
        }

        let slope = ss_xy / ss_xx;
        Ok(LinearFit {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    fn at(&self, year: i32) -> f64 {
        self.slope * year as f64 + self.intercept
    }
}

/// Fit a line through the known (year, total) pairs and evaluate it at
/// `target_year`. The growth figure uses the latest known total as baseline
/// and the prediction as the new value, same formula as the growth analyzer.
///
/// Fails with [`AnalysisError::InsufficientData`] when fewer than two
/// distinct years are supplied (the fit is degenerate), and with
/// [`AnalysisError::DivisionByZero`] when the latest known total is zero.
pub fn predict(points: &[(i32, f64)], target_year: i32) -> Result<PredictionResult, AnalysisError> {
    let Some(&(last_year, last_total)) = points.iter().max_by_key(|&&(year, _)| year) else {
        return Err(AnalysisError::InsufficientData { distinct: 0 });
    };

    let fit = LinearFit::fit(points)?;
    let predicted = fit.at(target_year);
    let growth_from_last = growth_percent(last_total, predicted, &format!("{last_year} total"))?;

    Ok(PredictionResult {
        target_year,
        predicted,
        growth_from_last,
    })
}

fn distinct_years(points: &[(i32, f64)]) -> usize {
    let mut years: Vec<i32> = points.iter().map(|&(year, _)| year).collect();
    years.sort_unstable();
    years.dedup();
    years.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
