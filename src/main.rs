//! Lynceus - Website Security Checkup CLI

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

use lynceus::config;
use lynceus::models::{Report, ScanConfig};
use lynceus::probe::ProbeEngine;
use lynceus::report;
use lynceus::server::{self, AppState};

/// Lynceus - website security checkup with a local web front end
#[derive(Parser)]
#[command(name = "lynceus", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the checkup probes against a target and print a summary
    Scan {
        /// Target URL to check (https:// is assumed when no scheme is given)
        #[arg(short, long)]
        target: String,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Directory for persisted scan reports
        #[arg(long)]
        log_dir: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Enable the reserved advanced probe set (currently no-op)
        #[arg(long)]
        advanced: bool,

        /// Print the raw report JSON instead of a summary table
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Serve the browser front end on localhost
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory for persisted scan reports
        #[arg(long)]
        log_dir: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the registered probes
    Probes,
}

const DEFAULT_PORT: u16 = 8081;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "lynceus=debug"
    } else {
        "lynceus=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn print_banner() {
    let banner = r#"
    ╔═══════════════════════════════════════╗
    ║  LYNCEUS v0.1.0                       ║
    ║  Website Security Checkup             ║
    ╚═══════════════════════════════════════╝
    "#;
    println!("{}", banner.cyan());
}

fn load_settings(config_path: Option<&PathBuf>) -> Result<config::Settings, lynceus::error::LynceusError> {
    if let Some(path) = config_path {
        config::load_config(path)
    } else {
        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            config::load_config(default_path)
        } else {
            Ok(config::Settings {
                scan: ScanConfig::default(),
                server_port: None,
            })
        }
    }
}

fn print_summary(report: &Report) {
    println!("\n{}", "  Checkup Summary".bold());
    println!("  {}", "─".repeat(35));

    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Message"]);
    for (name, result) in &report.checks {
        builder.push_record([
            name.clone(),
            result.status.to_string(),
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");

    let issues = report.issue_count();
    if issues == 0 {
        println!("\n  {}", "No issues detected".green().bold());
    } else {
        println!(
            "\n  {}",
            format!("{issues} check(s) need attention").red().bold()
        );
    }
}

fn normalize_cli_target(target: &str) -> String {
    if target.starts_with("http") {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            target,
            timeout,
            log_dir,
            config: config_path,
            advanced,
            json,
            verbose,
        } => {
            init_tracing(verbose);
            if !json {
                print_banner();
            }

            let settings = load_settings(config_path.as_ref())?;
            let mut scan_config = settings.scan;
            config::merge_cli_args(
                &mut scan_config,
                normalize_cli_target(&target),
                timeout,
                log_dir,
                advanced,
            );

            if !json {
                println!("  {} {}\n", "Target:".bold(), scan_config.target.green());
            }

            let engine = ProbeEngine::with_defaults();
            let result = engine.run(&scan_config).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(&result);
            }

            match report::json::save(&result, &scan_config.log_dir) {
                Ok(path) => {
                    if !json {
                        println!(
                            "\n  {} {}",
                            "Report saved to:".bold(),
                            path.display().to_string().green()
                        );
                    }
                }
                Err(e) => {
                    eprintln!("  {} failed to persist report: {e}", "Warning:".yellow());
                }
            }
        }

        Commands::Serve {
            port,
            log_dir,
            config: config_path,
            verbose,
        } => {
            init_tracing(verbose);
            print_banner();

            let settings = load_settings(config_path.as_ref())?;
            let mut scan_config = settings.scan;
            if let Some(dir) = log_dir {
                scan_config.log_dir = dir;
            }
            let port = port.or(settings.server_port).unwrap_or(DEFAULT_PORT);

            println!(
                "  {} {}",
                "Front end:".bold(),
                format!("http://127.0.0.1:{port}/").green()
            );
            println!("  {}\n", "Press Ctrl+C to stop.".yellow());

            server::serve(port, AppState::new(scan_config)).await?;
        }

        Commands::Probes => {
            print_banner();
            let engine = ProbeEngine::with_defaults();

            println!("  {}\n", "Registered Probes:".bold());
            for (name, description) in engine.list_probes() {
                println!("    {} {}", format!("{name:20}").cyan().bold(), description);
            }
            println!();
        }
    }

    Ok(())
}
