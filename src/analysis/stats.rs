use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Descriptive statistics over the population column
// ---------------------------------------------------------------------------

/// Central-tendency summary of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

/// Compute mean, median and mode over a numeric column.
///
/// * Median averages the two middle values when the count is even.
/// * Mode is the most frequent value; when several values share the maximum
///   frequency the smallest one is reported, so the result is deterministic.
///
/// Fails with [`AnalysisError::EmptyInput`] on an empty column.
pub fn summarize(values: &[f64]) -> Result<Summary, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    Ok(Summary {
        mean,
        median,
        mode: mode_of_sorted(&sorted),
    })
}

/// Most frequent value of a non-empty ascending slice. Equal values are
/// adjacent after sorting, so one pass over the runs suffices; keeping only
/// strictly-longer runs makes the smallest value win frequency ties.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best_value = sorted[0];
    let mut best_len = 0usize;
    let mut run_value = sorted[0];
    let mut run_len = 0usize;

    for &v in sorted {
        if v == run_value {
            run_len += 1;
        } else {
            run_value = v;
            run_len = 1;
        }
        if run_len > best_len {
            best_len = run_len;
            best_value = run_value;
        }
    }
    best_value
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_mixed_frequencies() {
        let summary = summarize(&[5.0, 5.0, 3.0, 3.0, 3.0, 7.0]).unwrap();
        assert!((summary.mean - 26.0 / 6.0).abs() < 1e-12);
        assert_eq!(summary.median, 4.0);
        assert_eq!(summary.mode, 3.0);
    }

    #[test]
    fn median_of_odd_count_is_the_middle_value() {
        let summary = summarize(&[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(summary.median, 5.0);
    }

    #[test]
    fn mode_ties_resolve_to_the_smallest_value() {
        let summary = summarize(&[8.0, 2.0, 8.0, 2.0, 5.0]).unwrap();
        assert_eq!(summary.mode, 2.0);
    }

    #[test]
    fn single_value_is_its_own_summary() {
        let summary = summarize(&[42.0]).unwrap();
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.mode, 42.0);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(summarize(&[]), Err(AnalysisError::EmptyInput));
    }
}
