use crate::metrics::row::{MetricsRow, MetricsTable};
use anyhow::{Context, bail};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use tracing::{debug, warn};

/// Columns every metrics file must carry. Any other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "time",
    "read_ops",
    "write_ops",
    "read_ops_per_sec",
    "write_ops_per_sec",
    "memtable_size",
];

/// Load a metrics CSV file into a table.
///
/// The file handle is dropped as soon as parsing finishes.
pub fn load_metrics_file(path: &str) -> anyhow::Result<MetricsTable> {
    let file = File::open(path).with_context(|| format!("open metrics file {}", path))?;
    let table = parse_metrics(file).with_context(|| format!("load metrics file {}", path))?;
    debug!(path, rows = table.len(), "loaded metrics");
    Ok(table)
}

/// Parse a metrics table from any CSV source.
///
/// Expected header (order free, extra columns allowed, fields may be padded):
/// time,read_ops,read_ops_per_sec,avg_read_latency,write_ops,write_ops_per_sec,...,memtable_size
///
/// Example row:
/// 0.100412,812,8086.7,61,7301,72710.2, 53, 0, 0, 1048032
pub fn parse_metrics<R: Read>(input: R) -> anyhow::Result<MetricsTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers().context("read header row")?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        bail!("missing required column(s): {}", missing.join(", "));
    }

    let mut rows: Vec<MetricsRow> = Vec::new();
    for (idx, record) in reader.deserialize::<MetricsRow>().enumerate() {
        // Header is line 1.
        let lno = idx + 2;
        let row = record.with_context(|| format!("metrics parse error at line {}", lno))?;

        if let Some((name, value)) = row.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            bail!(
                "metrics parse error at line {}: {} is not a finite number: {}",
                lno,
                name,
                value
            );
        }

        if let Some(prev) = rows.last() {
            if row.time < prev.time {
                warn!(line = lno, time = row.time, previous = prev.time, "time goes backwards");
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        bail!("metrics file contains no data rows");
    }

    Ok(MetricsTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCENARIO: &str = "\
time,read_ops,write_ops,read_ops_per_sec,write_ops_per_sec,memtable_size
0,10,5,10,5,100
1,20,5,20,5,150
2,30,5,30,5,200
";

    fn err_chain(err: &anyhow::Error) -> String {
        format!("{:#}", err)
    }

    #[test]
    fn parses_rows_in_file_order() {
        let table = parse_metrics(SCENARIO.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.rows()[1],
            MetricsRow {
                time: 1.0,
                read_ops: 20.0,
                write_ops: 5.0,
                read_ops_per_sec: 20.0,
                write_ops_per_sec: 5.0,
                memtable_size: 150.0,
            }
        );
        let totals: Vec<f64> = table.rows().iter().map(MetricsRow::total_ops).collect();
        assert_eq!(totals, vec![15.0, 25.0, 35.0]);
    }

    #[test]
    fn accepts_load_generator_layout() {
        // Extra columns, different order and padded fields.
        let text = "\
time,read_ops,read_ops_per_sec,avg_read_latency,write_ops,write_ops_per_sec,avg_write_latency,read_errors,write_errors,memtable_size
0,0,0,0,0,0,0,0,0,0
0.100412,812,8086.7,61,7301,72710.2, 53, 0, 0, 1048032
";
        let table = parse_metrics(text.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let last = &table.rows()[1];
        assert_eq!(last.write_ops, 7301.0);
        assert_eq!(last.write_ops_per_sec, 72710.2);
        assert_eq!(last.memtable_size, 1048032.0);
    }

    #[test]
    fn missing_memtable_column_fails_before_rows() {
        let text = "\
time,read_ops,write_ops,read_ops_per_sec,write_ops_per_sec
0,10,5,10,5
";
        let err = parse_metrics(text.as_bytes()).unwrap_err();
        assert_eq!(
            err_chain(&err),
            "missing required column(s): memtable_size"
        );
    }

    #[test]
    fn reports_every_missing_column() {
        let err = parse_metrics("time,memtable_size\n0,1\n".as_bytes()).unwrap_err();
        assert_eq!(
            err_chain(&err),
            "missing required column(s): read_ops, write_ops, read_ops_per_sec, write_ops_per_sec"
        );
    }

    #[test]
    fn header_only_is_no_data() {
        let text = "time,read_ops,write_ops,read_ops_per_sec,write_ops_per_sec,memtable_size\n";
        let err = parse_metrics(text.as_bytes()).unwrap_err();
        assert_eq!(err_chain(&err), "metrics file contains no data rows");
    }

    #[test]
    fn empty_input_reports_missing_columns() {
        let err = parse_metrics("".as_bytes()).unwrap_err();
        assert!(err_chain(&err).starts_with("missing required column(s): time"));
    }

    #[test]
    fn unparsable_field_names_the_line() {
        let text = "\
time,read_ops,write_ops,read_ops_per_sec,write_ops_per_sec,memtable_size
0,10,5,10,5,100
1,twenty,5,20,5,150
";
        let err = parse_metrics(text.as_bytes()).unwrap_err();
        assert!(err_chain(&err).starts_with("metrics parse error at line 3"));
    }

    #[test]
    fn short_row_is_malformed() {
        let text = "\
time,read_ops,write_ops,read_ops_per_sec,write_ops_per_sec,memtable_size
0,10,5,10,5
";
        let err = parse_metrics(text.as_bytes()).unwrap_err();
        assert!(err_chain(&err).starts_with("metrics parse error at line 2"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let text = "\
time,read_ops,write_ops,read_ops_per_sec,write_ops_per_sec,memtable_size
0,10,5,NaN,5,100
";
        let err = parse_metrics(text.as_bytes()).unwrap_err();
        assert_eq!(
            err_chain(&err),
            "metrics parse error at line 2: read_ops_per_sec is not a finite number: NaN"
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_metrics_file("does/not/exist/metrics.csv").unwrap_err();
        assert!(err_chain(&err).starts_with("open metrics file does/not/exist/metrics.csv"));
    }
}
