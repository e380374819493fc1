use colored::Colorize;
use opxml::XmlNode;
use serde::Serialize;

use crate::stats::DhcpStats;

/// One pool's derived utilization figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolRow {
    pub pool: String,
    pub num_total_addr: u64,
    pub num_lease_addr: u64,
    pub num_avail_addr: i64,
    pub interface: String,
}

/// The rendered statistics report: global counters plus per-pool rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatReport {
    pub num_requests: String,
    pub num_responses: String,
    pub rows: Vec<PoolRow>,
}

/// Derive the report from the aggregate.
///
/// With a pool filter, the report holds exactly that pool's row when the
/// pool is known and no rows otherwise; without one it holds every pool in
/// name order.
pub fn build_report(stats: &DhcpStats, pool: Option<&str>) -> StatReport {
    let rows = match pool {
        Some(name) => stats.pool(name).map(pool_row).into_iter().collect(),
        None => stats.pools().map(pool_row).collect(),
    };

    StatReport {
        num_requests: stats.requests.clone(),
        num_responses: stats.responses.clone(),
        rows,
    }
}

fn pool_row(pool: &crate::stats::PoolStats) -> PoolRow {
    PoolRow {
        pool: pool.name.clone(),
        num_total_addr: pool.total_range(),
        num_lease_addr: pool.total_leased(),
        num_avail_addr: pool.total_available(),
        interface: pool.interface.clone(),
    }
}

/// Build the op-command XML document for the report.
///
/// Every pool's field run is concatenated inside one `<row>` element, and
/// the `<format type="row"><row>` wrapper is present even with no pools;
/// downstream transforms depend on this exact shape.
pub fn to_xml(report: &StatReport) -> XmlNode {
    let mut root = XmlNode::new("opcommand").with_attribute("name", "dhcpstat");
    root.push(XmlNode::text_element(
        "num_requests",
        report.num_requests.as_str(),
    ));
    root.push(XmlNode::text_element(
        "num_responses",
        report.num_responses.as_str(),
    ));

    let mut row = XmlNode::new("row");
    for entry in &report.rows {
        row.push(XmlNode::text_element("pool", entry.pool.as_str()));
        row.push(XmlNode::text_element(
            "num_total_addr",
            entry.num_total_addr.to_string(),
        ));
        row.push(XmlNode::text_element(
            "num_lease_addr",
            entry.num_lease_addr.to_string(),
        ));
        row.push(XmlNode::text_element(
            "num_avail_addr",
            entry.num_avail_addr.to_string(),
        ));
        row.push(XmlNode::text_element("interface", entry.interface.as_str()));
    }

    let mut format = XmlNode::new("format").with_attribute("type", "row");
    format.push(row);
    root.push(format);

    root
}

/// Render the report for terminal output.
///
/// `params` are `(name, value)` pairs forwarded from the command line;
/// `title` overrides the heading, anything else is accepted and ignored.
pub fn render_text(report: &StatReport, params: &[(String, String)]) -> String {
    let title = params
        .iter()
        .rev()
        .find(|(name, _)| name == "title")
        .map(|(_, value)| value.as_str())
        .unwrap_or("DHCP pool statistics");

    let mut out = Vec::new();
    out.push(title.cyan().to_string());
    out.push(format!(
        "requests={} responses={}",
        report.num_requests, report.num_responses
    ));

    for row in &report.rows {
        let available = if row.num_avail_addr < 0 {
            row.num_avail_addr.to_string().red().to_string()
        } else {
            row.num_avail_addr.to_string()
        };
        out.push(format!(
            "- {}: total={} leased={} available={} interface={}",
            row.pool, row.num_total_addr, row.num_lease_addr, available, row.interface
        ));
    }

    out.join("\n")
}
