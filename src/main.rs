//! dnsrbl CLI: check hosts against DNS blacklists.

use anyhow::Result;
use clap::Parser;
use dnsrbl::{Config, DnsrblService, ListingResult};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dnsrbl")]
#[command(about = "Check IP addresses and hostnames against DNSBL/SURBL blacklists")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// IP blacklist to query (repeatable, replaces configured dnsbl lists)
    #[arg(long = "dnsbl", value_name = "LIST")]
    dnsbl: Vec<String>,

    /// Domain blacklist to query (repeatable, replaces configured surbl lists)
    #[arg(long = "surbl", value_name = "LIST")]
    surbl: Vec<String>,

    /// Print per-list records as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Print example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// IP addresses or hostnames to check
    #[arg(value_name = "HOST", required_unless_present = "print_config")]
    hosts: Vec<String>,
}

const EXIT_CLEAN: u8 = 0;
const EXIT_LISTED: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Handle --print-config
    if args.print_config {
        println!("{}", Config::example());
        return ExitCode::SUCCESS;
    }

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let service = match build_service(&args) {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "Failed to load config");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let outcome = run(&args, &service).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Check failed");
    }
    ExitCode::from(exit_status(&outcome))
}

/// Process exit status for the outcome of [`run`].
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => EXIT_LISTED,
        Ok(false) => EXIT_CLEAN,
        Err(_) => EXIT_ERROR,
    }
}

fn build_service(args: &Args) -> Result<DnsrblService> {
    let mut config = match &args.config {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            Config::load(path)?
        }
        None => Config::default(),
    };

    if !args.dnsbl.is_empty() {
        config.blacklists.dnsbl = args.dnsbl.clone();
    }
    if !args.surbl.is_empty() {
        config.blacklists.surbl = args.surbl.clone();
    }
    config.validate()?;

    DnsrblService::from_config(&config)
}

/// Check every host; returns whether any of them is listed.
async fn run(args: &Args, service: &DnsrblService) -> Result<bool> {
    let mut any_listed = false;
    let mut report: BTreeMap<&str, ListingResult> = BTreeMap::new();

    for host in &args.hosts {
        let result = service.get_all(host).await;
        any_listed |= result.is_listed();

        if args.json {
            report.insert(host, result);
            continue;
        }

        if result.is_empty() {
            println!("{host}: no applicable blacklists");
        } else if result.is_listed() {
            println!("{host}: listed on {}", result.listing().join(", "));
            for (_, records) in result.iter() {
                for record in records {
                    println!("  {record}");
                }
            }
        } else {
            println!("{host}: not listed");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(any_listed)
}
