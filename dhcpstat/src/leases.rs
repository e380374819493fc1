//! Lease database scanner.
//!
//! A lease block opens with the address on its own line and carries a
//! marker comment tying it to a shared-network pool:
//!
//! ```text
//! lease 10.0.0.236 {
//!   starts 4 2006/02/23 18:34:48;
//!   ends 5 2006/02/24 18:34:48;
//!   #shared-network: lan
//!   binding state active;
//! }
//! ```
//!
//! The scanner remembers the most recently opened lease address and credits
//! it to whichever pool the next marker names. Blocks without a marker
//! contribute nothing; markers without a preceding block credit the empty
//! address. Input is never rejected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::fields::LineFields;
use crate::stats::DhcpStats;

/// Scan lease blocks from `input`, accumulating leased addresses per pool.
pub fn scan(input: impl BufRead, stats: &mut DhcpStats) {
    let mut current = String::new();

    for line in input.lines() {
        let Ok(line) = line else { break };
        let fields = LineFields::new(&line, ' ');

        if fields.get(2) == "{" {
            current = fields.get(1).to_string();
        }
        if fields.get(0) == "#shared-network:" {
            let pool = stats.pool_entry(fields.get(1));
            pool.leased.insert(current.clone());
        }
    }
}

/// Scan the lease database at `path`. An absent or unopenable file is an
/// empty contribution, not an error.
pub fn scan_file(path: &Path, stats: &mut DhcpStats) {
    let Ok(file) = File::open(path) else { return };
    scan(BufReader::new(file), stats);
}
