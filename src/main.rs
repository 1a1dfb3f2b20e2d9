use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sauce_agent::AppError;
use sauce_agent::app::commands::browsers::{self, CatalogSource};
use sauce_agent::app::commands::preview::{self, TunnelDecision};

#[derive(Parser)]
#[command(name = "sauce-agent")]
#[command(version)]
#[command(
    about = "Inspect Sauce OnDemand build-feature provisioning",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the session environment a sauce feature file would produce
    #[clap(visible_alias = "p")]
    Preview {
        /// TOML file with one or more [[feature]] parameter tables
        file: PathBuf,
    },
    /// List the browser catalog
    #[clap(visible_alias = "b")]
    Browsers {
        /// Fetch the live listing from the Sauce REST API
        #[arg(long)]
        remote: bool,
        /// Custom listing endpoint (implies --remote)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Preview { file } => run_preview(&file),
        Commands::Browsers { remote, endpoint } => run_browsers(remote, endpoint.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_preview(file: &Path) -> Result<(), AppError> {
    let report = preview::execute(file)?;

    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    for (key, value) in &report.environment {
        println!("{key}={value}");
    }
    for decision in &report.tunnels {
        match decision {
            TunnelDecision::Disabled => println!("Sauce Connect: disabled"),
            TunnelDecision::Start { username, port } => {
                println!("Sauce Connect: would start on port {port} (plan '{username}')");
            }
            TunnelDecision::Blocked { details } => {
                println!("Sauce Connect: blocked: {details}");
            }
        }
    }
    Ok(())
}

fn run_browsers(remote: bool, endpoint: Option<&str>) -> Result<(), AppError> {
    let source = if remote || endpoint.is_some() {
        CatalogSource::Remote { endpoint }
    } else {
        CatalogSource::Embedded
    };

    for row in browsers::execute(source)? {
        println!("{}\t{}\t{}\t{}", row.key, row.spec.os, row.spec.browser, row.spec.version);
    }
    Ok(())
}
