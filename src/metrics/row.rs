use serde::Deserialize;

/// A single sampled time point from the metrics table.
///
/// Counters are read as `f64` so derived sums and plotted values share one
/// numeric type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsRow {
    pub time: f64,
    pub read_ops: f64,
    pub write_ops: f64,
    pub read_ops_per_sec: f64,
    pub write_ops_per_sec: f64,
    pub memtable_size: f64,
}

impl MetricsRow {
    pub fn total_ops(&self) -> f64 {
        self.read_ops + self.write_ops
    }

    pub fn total_ops_per_sec(&self) -> f64 {
        self.read_ops_per_sec + self.write_ops_per_sec
    }

    /// All numeric fields paired with their column names, in header order.
    pub(crate) fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("time", self.time),
            ("read_ops", self.read_ops),
            ("write_ops", self.write_ops),
            ("read_ops_per_sec", self.read_ops_per_sec),
            ("write_ops_per_sec", self.write_ops_per_sec),
            ("memtable_size", self.memtable_size),
        ]
    }
}

/// Rows in file order. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsTable {
    rows: Vec<MetricsRow>,
}

impl MetricsTable {
    pub fn new(rows: Vec<MetricsRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MetricsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Smallest and largest `time`, or None for an empty table.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let first = self.rows.first()?.time;
        Some(self.rows.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.time), hi.max(r.time))
        }))
    }
}
