//! Writes deterministic sample census CSVs (2010.csv, 2015.csv, 2020.csv and
//! total.csv) into the current directory so the explorer can be tried without
//! the real barangay tables.

/// Tiny seeded generator (xorshift*) so the sample tables are identical on
/// every run.
struct Rng(u64);

impl Rng {
    fn seeded(seed: u64) -> Self {
        // Avoid the all-zero state xorshift cannot leave.
        Rng(seed.wrapping_mul(0x9E3779B97F4A7C15) | 1)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform draw in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normal draw via Box-Muller.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.uniform().max(1e-15);
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const BARANGAY_COUNT: usize = 129;

fn write_year(path: &str, rows: &[(String, u64)]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create output file");
    writer
        .write_record(["Name", "Population"])
        .expect("Failed to write header");
    for (name, population) in rows {
        writer
            .write_record([name.clone(), population.to_string()])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");
}

fn main() {
    let mut rng = Rng::seeded(42);

    let names: Vec<String> = (1..=BARANGAY_COUNT)
        .map(|i| format!("Barangay {i}"))
        .collect();

    // 2010 baseline: skewed sizes, a handful of large barangays.
    let base: Vec<u64> = (0..BARANGAY_COUNT)
        .map(|_| rng.normal(2700.0, 1500.0).max(150.0).round() as u64)
        .collect();

    // Each census grows every barangay by ~6% plus per-barangay noise.
    let grow = |rng: &mut Rng, pops: &[u64]| -> Vec<u64> {
        pops.iter()
            .map(|&p| {
                let factor = 1.06 + rng.normal(0.0, 0.02);
                (p as f64 * factor.max(0.9)).round() as u64
            })
            .collect()
    };
    let pop_2015 = grow(&mut rng, &base);
    let pop_2020 = grow(&mut rng, &pop_2015);

    let zip = |pops: &[u64]| -> Vec<(String, u64)> {
        names.iter().cloned().zip(pops.iter().copied()).collect()
    };
    write_year("2010.csv", &zip(&base));
    write_year("2015.csv", &zip(&pop_2015));
    write_year("2020.csv", &zip(&pop_2020));

    // Totals: an older partial row first, then the authoritative full sums.
    // The explorer only reads the last row.
    let sum = |pops: &[u64]| pops.iter().sum::<u64>();
    let partial = |pops: &[u64]| pops.iter().take(100).sum::<u64>();

    let mut writer = csv::Writer::from_path("total.csv").expect("Failed to create output file");
    writer
        .write_record([
            "Population 2010 Census",
            "Population 2015 Census",
            "Population 2020 Census",
        ])
        .expect("Failed to write header");
    writer
        .write_record([
            partial(&base).to_string(),
            partial(&pop_2015).to_string(),
            partial(&pop_2020).to_string(),
        ])
        .expect("Failed to write row");
    writer
        .write_record([
            sum(&base).to_string(),
            sum(&pop_2015).to_string(),
            sum(&pop_2020).to_string(),
        ])
        .expect("Failed to write row");
    writer.flush().expect("Failed to flush writer");

    println!(
        "Wrote {BARANGAY_COUNT} barangays per census year (totals {} / {} / {})",
        sum(&base),
        sum(&pop_2015),
        sum(&pop_2020)
    );
}
