use std::collections::{BTreeMap, BTreeSet};
use std::net::Ipv4Addr;

/// Utilization state for one shared-network pool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Pool identifier from the lease/config files.
    pub name: String,
    /// Distinct leased addresses, deduplicated.
    pub leased: BTreeSet<String>,
    /// Configured `(start, stop)` address ranges; a pool may carry several
    /// disjoint ranges and duplicates are kept as configured.
    pub ranges: Vec<(String, String)>,
    /// Associated network interface. No data source populates this today;
    /// it stays in the model because the output schema carries the field.
    pub interface: String,
}

impl PoolStats {
    /// Total number of addresses across all configured ranges, counting
    /// ranges inclusively so a single-address range contributes 1.
    pub fn total_range(&self) -> u64 {
        self.ranges
            .iter()
            .map(|(start, stop)| {
                let start = addr_to_u32(start);
                let stop = addr_to_u32(stop);
                // A reversed range counts zero rather than wrapping.
                (u64::from(stop) + 1).saturating_sub(u64::from(start))
            })
            .sum()
    }

    /// Number of distinct leased addresses.
    pub fn total_leased(&self) -> u64 {
        self.leased.len() as u64
    }

    /// Addresses still available. Negative when more leases are recorded
    /// than the configured ranges cover.
    pub fn total_available(&self) -> i64 {
        self.total_range() as i64 - self.total_leased() as i64
    }
}

/// Aggregate populated by one pass of each scanner, keyed by pool name.
///
/// Pool entries are owned by the map and iterate in name order. The global
/// counters are carried as raw strings: the status file's value is reported
/// verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpStats {
    pools: BTreeMap<String, PoolStats>,
    /// Global request counter, `"0"` until the status file says otherwise.
    pub requests: String,
    /// Global response counter, `"0"` until the status file says otherwise.
    pub responses: String,
}

impl DhcpStats {
    pub fn new() -> Self {
        Self {
            pools: BTreeMap::new(),
            requests: "0".to_string(),
            responses: "0".to_string(),
        }
    }

    /// Pool entry for `name`, created empty on first reference.
    pub fn pool_entry(&mut self, name: &str) -> &mut PoolStats {
        self.pools.entry(name.to_string()).or_insert_with(|| PoolStats {
            name: name.to_string(),
            ..PoolStats::default()
        })
    }

    /// Existing pool entry for `name`, if any.
    pub fn pool_mut(&mut self, name: &str) -> Option<&mut PoolStats> {
        self.pools.get_mut(name)
    }

    /// Existing pool entry for `name`, if any.
    pub fn pool(&self, name: &str) -> Option<&PoolStats> {
        self.pools.get(name)
    }

    /// All pools in name order.
    pub fn pools(&self) -> impl Iterator<Item = &PoolStats> {
        self.pools.values()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl Default for DhcpStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Dotted quad to host-order u32. An unparseable quad converts to
/// `u32::MAX`, matching `inet_addr` handing back `INADDR_NONE`.
fn addr_to_u32(addr: &str) -> u32 {
    addr.parse::<Ipv4Addr>().map(u32::from).unwrap_or(u32::MAX)
}
