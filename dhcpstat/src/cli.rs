use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "dhcpstat")]
#[command(about = "Show DHCP pool utilization statistics")]
pub struct Cli {
    /// Restrict the report to one pool.
    pub pool: Option<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Renderer parameter name; pair with a following --pval.
    #[arg(long)]
    pub pname: Vec<String>,
    /// Renderer parameter value; pairs with the preceding --pname.
    #[arg(long)]
    pub pval: Vec<String>,
    /// Echo resolved paths and the raw XML document to standard output.
    #[arg(long)]
    pub debug: bool,
    /// Also write the XML document to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Optional TOML file overriding the server data-source paths.
    #[arg(long)]
    pub paths_file: Option<PathBuf>,
    /// Override the daemon pid file path.
    #[arg(long)]
    pub pid_file: Option<PathBuf>,
    /// Override the lease database path.
    #[arg(long)]
    pub leases_file: Option<PathBuf>,
    /// Override the runtime status file path.
    #[arg(long)]
    pub status_file: Option<PathBuf>,
    /// Override the server configuration file path.
    #[arg(long)]
    pub config_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Xml,
    Json,
}
