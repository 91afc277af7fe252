//! Consumers of the sweep result table: console report and CSV export.
//!
//! Everything here is strictly downstream of [`crate::sweep::run_sweep`];
//! nothing feeds back into the computation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::SimulationError;
use crate::sweep::SnrPointResult;

/// Column layout of the exported table, one row per sweep point.
pub const CSV_HEADER: &str = "SNR_dB,NOMA_UE1,NOMA_UE2,NOMA_Total,OFDMA,Outage_UE1,Outage_UE2";

/// Print the per-SNR result table.
pub fn print_table(results: &[SnrPointResult]) {
    println!("| SNR (dB) | NOMA UE1 | NOMA UE2 | NOMA Total | OFDMA  | Outage UE1 | Outage UE2 |");
    println!("|----------|----------|----------|------------|--------|------------|------------|");
    for point in results {
        println!(
            "| {:8.1} | {:8.4} | {:8.4} | {:10.4} | {:6.4} | {:10.4} | {:10.4} |",
            point.snr_db,
            point.throughput_ue1,
            point.throughput_ue2,
            point.throughput_noma_total,
            point.throughput_ofdma,
            point.outage_ue1,
            point.outage_ue2
        );
    }
}

/// Sweep-level summary of the result table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub max_noma_throughput: f64,
    pub max_noma_snr_db: f64,
    pub max_ofdma_throughput: f64,
    pub max_ofdma_snr_db: f64,
    /// Mean of `(NOMA_Total / OFDMA - 1)` across the sweep, in percent.
    pub mean_gain_pct: f64,
}

impl SummaryStats {
    pub fn from_results(results: &[SnrPointResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let best_noma = results
            .iter()
            .max_by(|a, b| a.throughput_noma_total.total_cmp(&b.throughput_noma_total))?;
        let best_ofdma = results
            .iter()
            .max_by(|a, b| a.throughput_ofdma.total_cmp(&b.throughput_ofdma))?;
        let mean_gain_pct = results
            .iter()
            .map(|p| (p.throughput_noma_total / p.throughput_ofdma - 1.0) * 100.0)
            .sum::<f64>()
            / results.len() as f64;

        Some(Self {
            max_noma_throughput: best_noma.throughput_noma_total,
            max_noma_snr_db: best_noma.snr_db,
            max_ofdma_throughput: best_ofdma.throughput_ofdma,
            max_ofdma_snr_db: best_ofdma.snr_db,
            mean_gain_pct,
        })
    }

    pub fn print(&self) {
        println!(
            "Maximum NOMA throughput:  {:.4} bits/s/Hz at {} dB",
            self.max_noma_throughput, self.max_noma_snr_db
        );
        println!(
            "Maximum OFDMA throughput: {:.4} bits/s/Hz at {} dB",
            self.max_ofdma_throughput, self.max_ofdma_snr_db
        );
        println!("Average throughput gain:  {:.2}%", self.mean_gain_pct);
    }
}

/// Write the result table as CSV, in sweep order.
pub fn write_csv<W: Write>(results: &[SnrPointResult], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for point in results {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            point.snr_db,
            point.throughput_ue1,
            point.throughput_ue2,
            point.throughput_noma_total,
            point.throughput_ofdma,
            point.outage_ue1,
            point.outage_ue2
        )?;
    }
    Ok(())
}

/// Save the result table as a CSV file.
pub fn save_csv(results: &[SnrPointResult], path: impl AsRef<Path>) -> Result<(), SimulationError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_csv(results, &mut writer)?;
    writer.flush()?;
    Ok(())
}
