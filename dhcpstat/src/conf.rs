//! Server configuration scanner.
//!
//! Extracts configured address ranges from `shared-network` blocks:
//!
//! ```text
//! shared-network lan {
//!   subnet 10.0.0.0 netmask 255.255.255.0 {
//!     range 10.0.0.10 10.0.0.99;
//!   }
//! }
//! ```
//!
//! Block membership is a single boolean: `shared-network` enters, the first
//! line starting with `}` leaves. Ranges found while inside a block attach
//! to the pool captured at block entry, and only when the lease scanner has
//! already created that pool; pools with no recorded lease never appear in
//! the report.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::fields::LineFields;
use crate::stats::DhcpStats;

/// Scan `shared-network` range declarations from `input`.
pub fn scan(input: impl BufRead, stats: &mut DhcpStats) {
    let mut pool = String::new();
    let mut in_block = false;

    for line in input.lines() {
        let Ok(line) = line else { break };
        let fields = LineFields::new(&line, ' ');

        if fields.get(0) == "shared-network" {
            in_block = true;
            pool = fields.get(1).to_string();
        }
        if fields.get(0) == "}" {
            in_block = false;
        }
        if in_block && fields.get(0) == "range" {
            if let Some(entry) = stats.pool_mut(&pool) {
                let start = fields.get(1).to_string();
                // The stop field always ends in the `;` terminator; drop it.
                let mut stop = fields.get(2).to_string();
                stop.pop();
                entry.ranges.push((start, stop));
            }
        }
    }
}

/// Scan the configuration file at `path`. An absent or unopenable file is an
/// empty contribution, not an error.
pub fn scan_file(path: &Path, stats: &mut DhcpStats) {
    let Ok(file) = File::open(path) else { return };
    scan(BufReader::new(file), stats);
}
