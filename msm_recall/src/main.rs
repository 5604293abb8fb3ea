//! # MSM Recall Harness
//!
//! Loads a scenario file (signal buffer, safety state, motor setpoints),
//! runs one recall cycle, and reports the outcome.
//!
//! # Usage
//!
//! ```bash
//! # Run the bundled demo scenario
//! msm_recall config/recall.toml
//!
//! # Narrower debounce window, debug logging
//! msm_recall config/recall.toml --threshold-ms 120 -v
//!
//! # Machine-readable report
//! msm_recall config/recall.toml --report json
//! ```

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use msm_common::config::LogLevel;
use msm_common::consts::DEFAULT_CONFIG_PATH;
use msm_recall::config::{ScenarioConfig, load_scenario};
use msm_recall::cycle::{RecallCycle, RecallReport};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// MSM Recall: seat memory recall decision harness
#[derive(Parser, Debug)]
#[command(name = "msm_recall")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Debounce recall signals, check interlocks and derive seat motor commands")]
struct Args {
    /// Path to scenario TOML.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the debounce window [ms].
    #[arg(long, value_name = "MS")]
    threshold_ms: Option<u32>,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    let scenario = load_scenario(&args.config);
    let log_level = scenario
        .as_ref()
        .map(|s| s.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, log_level);

    info!("MSM Recall v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = scenario
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|s| run(&args, s));
    if let Err(e) = result {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, mut scenario: ScenarioConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Scenario '{}' loaded from {}",
        scenario.shared.service_name,
        args.config.display()
    );

    if let Some(threshold_ms) = args.threshold_ms {
        info!("Debounce window overridden: {threshold_ms} ms");
        scenario.debounce.threshold_ms = threshold_ms;
    }

    let cycle = RecallCycle::new(scenario.debounce);
    let report = cycle.evaluate(&scenario.snapshot());

    match args.report {
        ReportFormat::Text => print_report(&report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_report(report: &RecallReport) {
    let confirmed: Vec<&str> = report.confirmed.iter().map(String::as_str).collect();
    println!("Confirmed signals: [{}]", confirmed.join(", "));
    println!("System check: {}", report.decision);

    if !report.decision.allowed() {
        println!("Recall blocked");
        return;
    }

    for d in &report.directives {
        println!("{} command: {} (order {}, position {})", d.motor, d.command, d.order, d.position);
    }
    if let Some(seq) = &report.command_arm {
        println!("CommandArm sequence:");
        for (i, step) in seq.steps().iter().enumerate() {
            println!("  {}. CommandArm {} -> {}", i + 1, step.label(), step.command);
        }
    }
    if !report.executed() {
        println!("No recall requested");
    }
}

fn setup_tracing(args: &Args, log_level: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from(log_level)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr; stdout carries the report.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
