use std::path::Path;

/// Scalar fields extracted from a run's `summary.txt`.
///
/// Every field defaults to zero. A partially written summary yields zeros
/// for whatever had not been written yet rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub p50_ns: u64,
    pub p95_ns: u64,
    pub p99_ns: u64,
    pub completed: u64,
}

/// Which latency section the line scanner is currently inside.
///
/// The summary reports the same percentiles twice, in nanoseconds and in
/// microseconds. Only the nanosecond section is extracted. The headers may
/// appear in either order, or one section may be missing entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Nanoseconds,
}

impl SummaryStats {
    /// Extract the percentiles and completed count from summary text.
    ///
    /// Never fails: the engine may still be writing the file, so anything
    /// unrecognisable is left at its zero default.
    pub fn parse(text: &str) -> Self {
        let mut stats = Self::default();

        let mut section = Section::Outside;
        for line in text.lines() {
            if line.contains("Latency (ns):") {
                section = Section::Nanoseconds;
            } else if line.contains("Latency (μs):") {
                section = Section::Outside;
            } else if section == Section::Nanoseconds {
                if line.contains("p50:") {
                    stats.p50_ns = trailing_value(line);
                } else if line.contains("p95:") {
                    stats.p95_ns = trailing_value(line);
                } else if line.contains("p99:") {
                    stats.p99_ns = trailing_value(line);
                }
            }
        }

        // The completed count sits outside the latency sections, so it gets
        // its own pass rather than a third state.
        for line in text.lines() {
            if line.contains("Completed:") {
                stats.completed = completed_count(line);
            }
        }

        stats
    }
}

/// Parse the numeric value after the label, truncating any decimal part.
fn trailing_value(line: &str) -> u64 {
    line.split_once(':')
        .and_then(|(_, value)| value.trim().parse::<f64>().ok())
        .map(|value| value as u64)
        .unwrap_or(0)
}

/// Parse the completed count. The summary artifact writes a bare count, the
/// engine's stdout writes `n/total`; both forms parse.
fn completed_count(line: &str) -> u64 {
    line.split_once(':')
        .and_then(|(_, value)| value.trim().split('/').next())
        .and_then(|count| count.trim().parse().ok())
        .unwrap_or(0)
}

/// Read and parse a summary artifact.
///
/// An unreadable file is reported and degrades to the all-zero default.
pub fn load_summary_stats(path: &Path) -> SummaryStats {
    match std::fs::read_to_string(path) {
        Ok(text) => SummaryStats::parse(&text),
        Err(e) => {
            log::warn!("Could not read summary file {}: {}", path.display(), e);
            SummaryStats::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "\
Host Delay Experiment - Summary
======================================

Run ID: run-20260806-120000-abcd

Configuration:
--------------
Workload:        rpc
Outstanding:     8
Request size:    1024 bytes
Response size:   1024 bytes

Results:
--------
Total requests:  10000
Completed:       9000
Loss:            1000

Latency (ns):
  p50:           1234.0
  p95:           5678.0
  p99:           9999.0

Latency (μs):
  p50:           1.23
  p95:           5.68
  p99:           10.00
";

    #[test]
    fn parses_full_summary() {
        let stats = SummaryStats::parse(SUMMARY);
        assert_eq!(
            stats,
            SummaryStats {
                p50_ns: 1234,
                p95_ns: 5678,
                p99_ns: 9999,
                completed: 9000,
            }
        );
    }

    #[test]
    fn missing_p99_defaults_to_zero() {
        let text = SUMMARY
            .lines()
            .filter(|line| !(line.contains("p99:") && line.contains("9999")))
            .collect::<Vec<_>>()
            .join("\n");
        let stats = SummaryStats::parse(&text);
        assert_eq!(stats.p50_ns, 1234);
        assert_eq!(stats.p95_ns, 5678);
        assert_eq!(stats.p99_ns, 0);
        assert_eq!(stats.completed, 9000);
    }

    #[test]
    fn microsecond_section_never_overwrites() {
        // Values in the microsecond section must not clobber the nanosecond
        // ones, in either section order.
        let stats = SummaryStats::parse(SUMMARY);
        assert_eq!(stats.p50_ns, 1234);

        let reordered = "\
Latency (μs):
  p50:           1.23
  p95:           5.68
  p99:           10.00

Latency (ns):
  p50:           1234.0
  p95:           5678.0
  p99:           9999.0
";
        let stats = SummaryStats::parse(reordered);
        assert_eq!(stats.p50_ns, 1234);
        assert_eq!(stats.p95_ns, 5678);
        assert_eq!(stats.p99_ns, 9999);
    }

    #[test]
    fn missing_nanosecond_section_leaves_zeros() {
        let text = "\
Completed:       42

Latency (μs):
  p50:           1.23
";
        let stats = SummaryStats::parse(text);
        assert_eq!(stats.p50_ns, 0);
        assert_eq!(stats.p95_ns, 0);
        assert_eq!(stats.p99_ns, 0);
        assert_eq!(stats.completed, 42);
    }

    #[test]
    fn completed_with_total_separator() {
        let stats = SummaryStats::parse("Completed: 9000/10000\n");
        assert_eq!(stats.completed, 9000);
    }

    #[test]
    fn fractional_percentiles_truncate() {
        let text = "\
Latency (ns):
  p50:           1234.9
";
        assert_eq!(SummaryStats::parse(text).p50_ns, 1234);
    }

    #[test]
    fn empty_text_is_all_zeros() {
        assert_eq!(SummaryStats::parse(""), SummaryStats::default());
    }

    #[test]
    fn unreadable_file_is_all_zeros() {
        let dir = tempfile::TempDir::new().unwrap();
        let stats = load_summary_stats(&dir.path().join("does-not-exist.txt"));
        assert_eq!(stats, SummaryStats::default());
    }
}
