use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::RunResult;

#[derive(Tabled)]
struct ResultsRow {
    workload: String,
    #[tabled(rename = "out")]
    outstanding: u32,
    size: String,
    #[tabled(rename = "p50(μs)")]
    p50_us: String,
    #[tabled(rename = "p95(μs)")]
    p95_us: String,
    #[tabled(rename = "p99(μs)")]
    p99_us: String,
}

impl From<&RunResult> for ResultsRow {
    fn from(result: &RunResult) -> Self {
        Self {
            workload: result.workload.to_string(),
            outstanding: result.outstanding,
            size: format!("{}B", result.req_bytes),
            p50_us: format!("{:.2}", result.p50_ns as f64 / 1000.0),
            p95_us: format!("{:.2}", result.p95_ns as f64 / 1000.0),
            p99_us: format!("{:.2}", result.p99_ns as f64 / 1000.0),
        }
    }
}

/// Print the per-run latency table shown after a manifest is built.
///
/// Percentiles are shown in microseconds here; the manifest keeps the raw
/// nanosecond values.
pub fn print_results_table(results: &[RunResult]) {
    println!("\nResults Summary:");

    let rows = results.iter().map(ResultsRow::from).collect::<Vec<_>>();
    let mut table = Table::new(&rows);
    table.with(Style::modern());

    println!("{}", table);
}
