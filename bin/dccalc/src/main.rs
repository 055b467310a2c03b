//! ---
//! dcc_section: "05-networking-external-interfaces"
//! dcc_subsection: "binary"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Command-line front end for the DC circuit calculators."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use dcc_common::config::AppConfig;
use dcc_common::logging::init_tracing;
use tracing::{debug, info};

mod calc;
mod chart;
mod render;
mod serve;

use render::OutputFormat;

const DEFAULT_CONFIG_PATH: &str = "configs/dccalc.toml";

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "DC circuit formula calculator",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print version information and exit"
    )]
    version: bool,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file"
    )]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for results"
    )]
    format: OutputFormat,

    #[arg(long, global = true, help = "Write a JSON report for every evaluation")]
    export: bool,

    #[arg(
        long = "report-dir",
        global = true,
        value_name = "DIR",
        help = "Report directory (overrides the configured one; implies --export)"
    )]
    report_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(
        about = "Solve Ohm's law for voltage, current or resistance",
        allow_negative_numbers = true
    )]
    Ohm(calc::OhmArgs),
    #[command(about = "Total resistance of 2 to 5 resistors in series")]
    Series(calc::ResistorArgs),
    #[command(about = "Total resistance of 2 to 5 resistors in parallel")]
    Parallel(calc::ResistorArgs),
    #[command(
        about = "Terminal voltage, loss and efficiency of a real source",
        allow_negative_numbers = true
    )]
    Emf(calc::EmfArgs),
    #[command(
        about = "Power, energy and cost of a DC load",
        allow_negative_numbers = true
    )]
    Power(calc::PowerArgs),
    #[command(
        about = "Second outgoing current of a three-branch node",
        allow_negative_numbers = true
    )]
    Kcl(calc::KclArgs),
    #[command(
        about = "Single-loop current and voltage drops over three resistors",
        allow_negative_numbers = true
    )]
    Kvl(calc::KvlArgs),
    #[command(
        about = "Compare a DC level with a sinusoidal AC signal",
        allow_negative_numbers = true
    )]
    Signal(calc::SignalArgs),
    #[command(
        about = "Rate an operating point and suggest an action",
        allow_negative_numbers = true
    )]
    Advise(calc::AdvisoryArgs),
    #[command(about = "Evaluate tagged requests from a JSON, YAML or JSON Lines file")]
    Eval(calc::EvalArgs),
    #[command(
        about = "Generate the data series behind a chart",
        allow_negative_numbers = true
    )]
    Chart(chart::ChartArgs),
    #[command(about = "Serve the calculators over HTTP")]
    Serve(serve::ServeArgs),
}

/// Settings shared by every calculator invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub format: OutputFormat,
    pub precision: usize,
    pub report_dir: Option<PathBuf>,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<AppConfig> {
    match explicit {
        Some(path) => {
            let config = AppConfig::load(std::slice::from_ref(path))?;
            debug!(config_path = %path.display(), "configuration loaded");
            Ok(config)
        }
        None => {
            let loaded = AppConfig::load_with_source(&[PathBuf::from(DEFAULT_CONFIG_PATH)])?;
            debug!(config_path = ?loaded.source, "configuration loaded");
            Ok(loaded.config)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("dccalc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = load_config(cli.config.as_ref())?;
    init_tracing("dccalc", &config.logging)?;

    let report_dir = match (cli.report_dir, cli.export) {
        (Some(dir), _) => Some(dir),
        (None, true) => Some(config.reports.directory.clone()),
        (None, false) => None,
    };
    let session = Session {
        format: cli.format,
        precision: config.display.precision,
        report_dir,
    };

    match command {
        Commands::Ohm(args) => calc::run(args.request()?, &session)?,
        Commands::Series(args) => calc::run(args.series()?, &session)?,
        Commands::Parallel(args) => calc::run(args.parallel()?, &session)?,
        Commands::Emf(args) => calc::run(args.request(), &session)?,
        Commands::Power(args) => calc::run(args.request(), &session)?,
        Commands::Kcl(args) => calc::run(args.request(), &session)?,
        Commands::Kvl(args) => calc::run(args.request()?, &session)?,
        Commands::Signal(args) => calc::run(args.request(), &session)?,
        Commands::Advise(args) => calc::run(args.request(), &session)?,
        Commands::Eval(args) => calc::eval(&args, &session)?,
        Commands::Chart(args) => chart::run(&args, &session)?,
        Commands::Serve(args) => {
            let listen = args.listen.unwrap_or(config.api.listen);
            info!(address = %listen, "starting calculator api");
            serve::run(listen).await?
        }
    }
    Ok(())
}
