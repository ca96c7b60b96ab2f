use crate::data::model::Row;

// ---------------------------------------------------------------------------
// Ranking / partitioning for charts
// ---------------------------------------------------------------------------

/// Label of the synthetic remainder row appended by [`top_n_with_other`].
pub const OTHER_LABEL: &str = "Other Barangays";

/// Which end of the population ranking [`extreme`] slices from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Highest,
    Lowest,
}

/// Top `n` rows by population (descending) plus one synthetic
/// `"Other Barangays"` row carrying the sum of everything that did not make
/// the cut. The remainder row is always appended, with population 0 when the
/// dataset has `n` rows or fewer. The input is left untouched.
pub fn top_n_with_other(rows: &[Row], n: usize) -> Vec<Row> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.population.total_cmp(&a.population));

    let cut = n.min(ranked.len());
    let other: f64 = ranked[cut..].iter().map(|r| r.population).sum();
    ranked.truncate(cut);
    ranked.push(Row::new(OTHER_LABEL, other));
    ranked
}

/// First `k` rows after ranking by population in the given direction. When
/// fewer than `k` rows exist, all of them are returned.
pub fn extreme(rows: &[Row], k: usize, direction: Direction) -> Vec<Row> {
    let mut ranked = rows.to_vec();
    match direction {
        Direction::Highest => ranked.sort_by(|a, b| b.population.total_cmp(&a.population)),
        Direction::Lowest => ranked.sort_by(|a, b| a.population.total_cmp(&b.population)),
    }
    ranked.truncate(k);
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_rows(count: usize) -> Vec<Row> {
        // Barangay i has population 100 * i, so ranking is easy to read off.
        (1..=count)
            .map(|i| Row::new(format!("Barangay {i}"), 100.0 * i as f64))
            .collect()
    }

    #[test]
    fn partitions_top_rows_from_the_remainder() {
        let rows = numbered_rows(35);
        let chart = top_n_with_other(&rows, 30);

        assert_eq!(chart.len(), 31);
        assert_eq!(chart[0], Row::new("Barangay 35", 3500.0));
        assert_eq!(chart[29], Row::new("Barangay 6", 600.0));
        // Barangays 1..=5 fold into the remainder: 100+200+300+400+500.
        assert_eq!(chart[30], Row::new(OTHER_LABEL, 1500.0));
    }

    #[test]
    fn exactly_n_rows_still_append_a_zero_remainder() {
        let rows = numbered_rows(30);
        let chart = top_n_with_other(&rows, 30);

        assert_eq!(chart.len(), 31);
        assert_eq!(chart[30], Row::new(OTHER_LABEL, 0.0));
    }

    #[test]
    fn fewer_rows_than_n_keeps_them_all() {
        let rows = numbered_rows(3);
        let chart = top_n_with_other(&rows, 30);

        assert_eq!(chart.len(), 4);
        assert_eq!(chart[3], Row::new(OTHER_LABEL, 0.0));
    }

    #[test]
    fn extreme_slices_either_end() {
        let rows = numbered_rows(10);

        let highest = extreme(&rows, 5, Direction::Highest);
        assert_eq!(highest.len(), 5);
        assert_eq!(highest[0].name, "Barangay 10");
        assert_eq!(highest[4].name, "Barangay 6");

        let lowest = extreme(&rows, 5, Direction::Lowest);
        assert_eq!(lowest[0].name, "Barangay 1");
        assert_eq!(lowest[4].name, "Barangay 5");
    }

    #[test]
    fn extreme_on_a_small_dataset_returns_everything() {
        let rows = numbered_rows(3);
        let slice = extreme(&rows, 5, Direction::Highest);
        assert_eq!(slice.len(), 3);
    }

    #[test]
    fn inputs_are_left_untouched() {
        let rows = numbered_rows(10);
        let before = rows.clone();
        let _ = top_n_with_other(&rows, 4);
        let _ = extreme(&rows, 2, Direction::Lowest);
        assert_eq!(rows, before);
    }
}
