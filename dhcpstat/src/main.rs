use anyhow::{Context, Result};
use clap::Parser;
use dhcpstat::paths::load_paths_file;
use dhcpstat::report::{build_report, render_text, to_xml};
use dhcpstat::{collect, CollectError, ServerPaths};

mod cli;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = resolve_paths(&cli)?;

    if cli.debug {
        println!(
            "paths: pid={} leases={} status={} conf={}",
            paths.pid_file.display(),
            paths.leases_file.display(),
            paths.status_file.display(),
            paths.conf_file.display()
        );
    }

    let stats = match collect(&paths) {
        Ok(stats) => stats,
        Err(reason @ CollectError::ServerNotRunning) => {
            // Reason goes to stdout and the exit status stays zero.
            println!("{reason}");
            return Ok(());
        }
    };

    let report = build_report(&stats, cli.pool.as_deref());
    let document = to_xml(&report);

    if cli.debug {
        println!("output xml: {}", opxml::write_string(&document)?);
    }

    if let Some(out_path) = &cli.output {
        opxml::write_file(&document, out_path)
            .with_context(|| format!("failed to write output XML {}", out_path.display()))?;
    }

    match cli.format {
        OutputFormat::Text => {
            let params = pair_params(&cli.pname, &cli.pval);
            println!("{}", render_text(&report, &params));
        }
        OutputFormat::Xml => println!("{}", opxml::write_string(&document)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn resolve_paths(cli: &Cli) -> Result<ServerPaths> {
    let mut paths = match &cli.paths_file {
        Some(file) => load_paths_file(file)
            .with_context(|| format!("failed to load paths file {}", file.display()))?,
        None => ServerPaths::default(),
    };

    if let Some(pid_file) = &cli.pid_file {
        paths.pid_file = pid_file.clone();
    }
    if let Some(leases_file) = &cli.leases_file {
        paths.leases_file = leases_file.clone();
    }
    if let Some(status_file) = &cli.status_file {
        paths.status_file = status_file.clone();
    }
    if let Some(config_file) = &cli.config_file {
        paths.conf_file = config_file.clone();
    }

    Ok(paths)
}

/// Pair repeated `--pname`/`--pval` occurrences in order. Unmatched names
/// or values are dropped, matching the permissive original surface.
fn pair_params(names: &[String], values: &[String]) -> Vec<(String, String)> {
    names
        .iter()
        .zip(values.iter())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
