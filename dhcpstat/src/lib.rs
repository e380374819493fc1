//! DHCP pool utilization statistics for the op-mode CLI.
//!
//! This library correlates three loosely-structured text sources produced by
//! a running DHCP server into per-pool utilization figures:
//!
//! - the lease database (`dhcpd.leases`) — which addresses are handed out,
//!   and to which shared-network pool they belong,
//! - the runtime status file (`dhcpd.status`) — global request/response
//!   counters,
//! - the server configuration (`dhcpd.conf`) — the address ranges configured
//!   for each pool.
//!
//! All three formats are scanned line by line through the permissive
//! [`fields::LineFields`] tokenizer; lines that do not match a parser's
//! trigger tokens are skipped, never rejected. The parsers feed a shared
//! [`stats::DhcpStats`] aggregate keyed by pool name, from which
//! [`report::build_report`] derives total/leased/available address counts
//! and the final document.
//!
//! The pipeline entry point is [`collect::collect`]; the only failure it can
//! surface is the server-not-running precondition. Missing or unreadable
//! data files contribute nothing and are not errors.

pub mod collect;
pub mod conf;
pub mod fields;
pub mod leases;
pub mod paths;
pub mod report;
pub mod stats;
pub mod status;

pub use collect::{collect, CollectError};
pub use fields::LineFields;
pub use paths::ServerPaths;
pub use report::{build_report, PoolRow, StatReport};
pub use stats::{DhcpStats, PoolStats};
