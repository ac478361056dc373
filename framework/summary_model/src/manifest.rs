use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::RunResult;

/// Manifest column order. `elapsed_s` slots in before `out_dir` when the
/// generating mode knows the wall-clock duration (live runs do, rescans
/// do not).
const LEADING_COLUMNS: [&str; 13] = [
    "run_id",
    "workload",
    "outstanding",
    "req_bytes",
    "rsp_bytes",
    "linkRate",
    "linkDelay",
    "mtu",
    "qdisc",
    "p50_ns",
    "p95_ns",
    "p99_ns",
    "completed",
];

/// The header row for a manifest, with or without the elapsed column.
pub fn manifest_columns(with_elapsed: bool) -> Vec<&'static str> {
    let mut columns = LEADING_COLUMNS.to_vec();
    if with_elapsed {
        columns.push("elapsed_s");
    }
    columns.push("out_dir");
    columns
}

/// Write one header row and one row per result, preserving input order.
///
/// Row order is the processing order of the runs; nothing is sorted here. A
/// result without an elapsed time under the elapsed column writes an empty
/// field.
pub fn write_manifest<W: Write>(
    writer: W,
    results: &[RunResult],
    with_elapsed: bool,
) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(manifest_columns(with_elapsed))
        .context("Failed to write manifest header")?;

    for result in results {
        let mut record = vec![
            result.run_id.clone(),
            result.workload.to_string(),
            result.outstanding.to_string(),
            result.req_bytes.to_string(),
            result.rsp_bytes.to_string(),
            result.link_rate.clone(),
            result.link_delay.clone(),
            result.mtu.to_string(),
            result.qdisc.to_string(),
            result.p50_ns.to_string(),
            result.p95_ns.to_string(),
            result.p99_ns.to_string(),
            result.completed.to_string(),
        ];
        if with_elapsed {
            record.push(
                result
                    .elapsed_s
                    .map(|elapsed| format!("{elapsed:.1}"))
                    .unwrap_or_default(),
            );
        }
        record.push(result.out_dir.display().to_string());

        csv_writer
            .write_record(&record)
            .context(format!("Failed to write manifest row for {}", result.run_id))?;
    }

    csv_writer.flush().context("Failed to flush manifest")?;
    Ok(())
}

/// Write the manifest to a file, replacing any previous manifest there.
pub fn write_manifest_file(
    path: &Path,
    results: &[RunResult],
    with_elapsed: bool,
) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create manifest at {}", path.display()))?;
    write_manifest(file, results, with_elapsed)
}
