use std::io::{self, Write};

use crate::data::model::Row;

// ---------------------------------------------------------------------------
// Rendering sink
// ---------------------------------------------------------------------------

/// How a labeled series should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    BarHorizontal,
}

/// A labeled numeric series ready for drawing. All values are already
/// computed; the sink only presents them.
#[derive(Debug, Clone)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Chart {
    pub fn from_rows(kind: ChartKind, title: impl Into<String>, rows: &[Row]) -> Self {
        Chart {
            kind,
            title: title.into(),
            labels: rows.iter().map(|r| r.name.clone()).collect(),
            values: rows.iter().map(|r| r.population).collect(),
        }
    }
}

/// Output side of the explorer: full row listings, named-value summaries and
/// charts. Implementations decide the presentation technology.
pub trait RenderSink {
    fn rows(&mut self, title: &str, rows: &[Row]) -> io::Result<()>;
    fn summary(&mut self, title: &str, entries: &[(String, String)]) -> io::Result<()>;
    fn chart(&mut self, chart: &Chart) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// Plain-text sink
// ---------------------------------------------------------------------------

const BAR_WIDTH: usize = 40;

/// Text renderer writing tables, summaries, pie shares and scaled bars.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        TextSink { out }
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n{title}")?;
        writeln!(self.out, "{}", "-".repeat(title.len()))
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn rows(&mut self, title: &str, rows: &[Row]) -> io::Result<()> {
        self.heading(title)?;
        for row in rows {
            writeln!(
                self.out,
                "  {:<32} {:>12}",
                row.name,
                format_population(row.population)
            )?;
        }
        writeln!(self.out, "  ({} rows)", rows.len())
    }

    fn summary(&mut self, title: &str, entries: &[(String, String)]) -> io::Result<()> {
        self.heading(title)?;
        for (label, value) in entries {
            writeln!(self.out, "  {label}: {value}")?;
        }
        Ok(())
    }

    fn chart(&mut self, chart: &Chart) -> io::Result<()> {
        self.heading(&chart.title)?;
        match chart.kind {
            ChartKind::Pie => {
                let total: f64 = chart.values.iter().sum();
                for (label, &value) in chart.labels.iter().zip(&chart.values) {
                    let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                    writeln!(
                        self.out,
                        "  {:<32} {:>5.1}%  ({})",
                        label,
                        share,
                        format_population(value)
                    )?;
                }
            }
            ChartKind::BarHorizontal => {
                let max = chart.values.iter().cloned().fold(0.0_f64, f64::max);
                for (label, &value) in chart.labels.iter().zip(&chart.values) {
                    let filled = if max > 0.0 {
                        ((value / max) * BAR_WIDTH as f64).round() as usize
                    } else {
                        0
                    };
                    writeln!(
                        self.out,
                        "  {:<32} {:<width$} {}",
                        label,
                        "#".repeat(filled),
                        format_population(value),
                        width = BAR_WIDTH
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Populations are counts; print them without a fractional part unless the
/// source actually carried one.
pub fn format_population(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut TextSink<Vec<u8>>)) -> String {
        let mut sink = TextSink::new(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.out).unwrap()
    }

    #[test]
    fn pie_chart_prints_shares_of_the_total() {
        let chart = Chart {
            kind: ChartKind::Pie,
            title: "Distribution".to_string(),
            labels: vec!["A".to_string(), "B".to_string()],
            values: vec![75.0, 25.0],
        };
        let text = rendered(|sink| sink.chart(&chart).unwrap());
        assert!(text.contains("75.0%"));
        assert!(text.contains("25.0%"));
    }

    #[test]
    fn bar_chart_scales_to_the_largest_value() {
        let chart = Chart {
            kind: ChartKind::BarHorizontal,
            title: "Top".to_string(),
            labels: vec!["A".to_string(), "B".to_string()],
            values: vec![80.0, 40.0],
        };
        let text = rendered(|sink| sink.chart(&chart).unwrap());
        let line_a = text.lines().find(|l| l.starts_with("  A")).unwrap();
        let line_b = text.lines().find(|l| l.starts_with("  B")).unwrap();
        assert!(line_a.contains(&"#".repeat(BAR_WIDTH)));
        assert!(line_b.contains(&"#".repeat(BAR_WIDTH / 2)));
        assert!(!line_b.contains(&"#".repeat(BAR_WIDTH / 2 + 1)));
    }

    #[test]
    fn populations_print_as_whole_counts() {
        assert_eq!(format_population(129000.0), "129000");
        assert_eq!(format_population(0.5), "0.50");
    }
}
