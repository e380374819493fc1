//! Runtime status scanner.
//!
//! Picks two scalar counters out of the daemon status file:
//!
//! ```text
//! request-count: 42
//! response-count: 40
//! ```
//!
//! Each match overwrites the aggregate value, so the last occurrence wins.
//! The counter value is kept as the raw field text; a labeled line with no
//! value resets the counter to `"0"`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::fields::LineFields;
use crate::stats::DhcpStats;

/// Scan counter lines from `input` into the aggregate.
pub fn scan(input: impl BufRead, stats: &mut DhcpStats) {
    for line in input.lines() {
        let Ok(line) = line else { break };
        let fields = LineFields::new(&line, ' ');

        if fields.get(0) == "request-count:" {
            stats.requests = counter_value(fields.get(1));
        }
        if fields.get(0) == "response-count:" {
            stats.responses = counter_value(fields.get(1));
        }
    }
}

/// Scan the status file at `path`. An absent or unopenable file leaves the
/// counters at their defaults.
pub fn scan_file(path: &Path, stats: &mut DhcpStats) {
    let Ok(file) = File::open(path) else { return };
    scan(BufReader::new(file), stats);
}

fn counter_value(field: &str) -> String {
    if field.is_empty() {
        "0".to_string()
    } else {
        field.to_string()
    }
}
