//! ---
//! dcc_section: "05-networking-external-interfaces"
//! dcc_subsection: "binary"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Calculator subcommands of the dccalc front end."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use dcc_calc_engine::{
    advisory::AdvisoryRequest,
    evaluate_record,
    io::{load_request_from_file, load_requests_from_jsonl},
    kirchhoff::{KclRequest, KvlRequest},
    ohm::{OhmRequest, SolveFor},
    power::PowerRequest,
    resistance::{ResistanceRequest, ResistorSet, Topology},
    signal::SignalRequest,
    source::SourceRequest,
    CalcRequest,
};
use tracing::info;

use crate::render;
use crate::Session;

/// Evaluate one request, export it when requested and print the result.
pub fn run(request: CalcRequest, session: &Session) -> Result<()> {
    let record = evaluate_record(request);
    if let Some(dir) = &session.report_dir {
        let path = record
            .exporter()
            .export(dir)
            .with_context(|| format!("failed to export report to {}", dir.display()))?;
        eprintln!("report written to {}", path.display());
    }
    render::print_response(&record.response, session)
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SolveForArg {
    Voltage,
    Current,
    Resistance,
}

impl From<SolveForArg> for SolveFor {
    fn from(value: SolveForArg) -> Self {
        match value {
            SolveForArg::Voltage => SolveFor::Voltage,
            SolveForArg::Current => SolveFor::Current,
            SolveForArg::Resistance => SolveFor::Resistance,
        }
    }
}

#[derive(Debug, Args)]
pub struct OhmArgs {
    /// Quantity to solve for; the other two must be supplied.
    #[arg(long = "solve-for", value_enum)]
    solve_for: SolveForArg,
    /// Voltage in volts.
    #[arg(long)]
    voltage: Option<f64>,
    /// Current in amperes.
    #[arg(long)]
    current: Option<f64>,
    /// Resistance in ohms.
    #[arg(long)]
    resistance: Option<f64>,
}

impl OhmArgs {
    pub fn request(&self) -> Result<CalcRequest> {
        let solve_for = SolveFor::from(self.solve_for);
        let need = |value: Option<f64>, flag: &str| {
            value.ok_or_else(|| anyhow!("--{flag} is required when solving for {solve_for}"))
        };
        let request = match solve_for {
            SolveFor::Voltage => OhmRequest::voltage(
                need(self.current, "current")?,
                need(self.resistance, "resistance")?,
            ),
            SolveFor::Current => OhmRequest::current(
                need(self.voltage, "voltage")?,
                need(self.resistance, "resistance")?,
            ),
            SolveFor::Resistance => OhmRequest::resistance(
                need(self.voltage, "voltage")?,
                need(self.current, "current")?,
            ),
        };
        Ok(CalcRequest::Ohm(request))
    }
}

#[derive(Debug, Args)]
pub struct ResistorArgs {
    /// Resistor values in ohms.
    #[arg(value_name = "OHMS", required = true, num_args = 2..=5)]
    resistors: Vec<f64>,
}

impl ResistorArgs {
    pub fn series(&self) -> Result<CalcRequest> {
        self.request(Topology::Series)
    }

    pub fn parallel(&self) -> Result<CalcRequest> {
        self.request(Topology::Parallel)
    }

    fn request(&self, topology: Topology) -> Result<CalcRequest> {
        let resistors = ResistorSet::new(self.resistors.clone())?;
        Ok(CalcRequest::Resistance(ResistanceRequest {
            topology,
            resistors,
        }))
    }
}

#[derive(Debug, Args)]
pub struct EmfArgs {
    /// Electromotive force in volts.
    #[arg(long)]
    emf: f64,
    /// Internal resistance in ohms.
    #[arg(long = "internal-resistance")]
    internal_resistance: f64,
    /// Load current in amperes.
    #[arg(long)]
    current: f64,
}

impl EmfArgs {
    pub fn request(&self) -> CalcRequest {
        CalcRequest::Emf(SourceRequest {
            emf: self.emf,
            internal_resistance: self.internal_resistance,
            current: self.current,
        })
    }
}

#[derive(Debug, Args)]
pub struct PowerArgs {
    #[arg(long)]
    voltage: f64,
    #[arg(long)]
    current: f64,
    #[arg(long)]
    resistance: f64,
    /// Operating time in hours.
    #[arg(long, default_value_t = 1.0)]
    hours: f64,
}

impl PowerArgs {
    pub fn request(&self) -> CalcRequest {
        CalcRequest::Power(PowerRequest {
            voltage: self.voltage,
            current: self.current,
            resistance: self.resistance,
            duration_hours: self.hours,
        })
    }
}

#[derive(Debug, Args)]
pub struct KclArgs {
    /// Current entering the node in amperes.
    #[arg(long)]
    incoming: f64,
    /// Known outgoing branch current in amperes.
    #[arg(long)]
    outgoing: f64,
}

impl KclArgs {
    pub fn request(&self) -> CalcRequest {
        CalcRequest::Kcl(KclRequest {
            incoming: self.incoming,
            outgoing_given: self.outgoing,
        })
    }
}

#[derive(Debug, Args)]
pub struct KvlArgs {
    /// Source voltage in volts.
    #[arg(long)]
    voltage: f64,
    /// The three series resistances in ohms.
    #[arg(value_name = "OHMS", required = true, num_args = 3)]
    resistances: Vec<f64>,
}

impl KvlArgs {
    pub fn request(&self) -> Result<CalcRequest> {
        let resistances: [f64; 3] = self
            .resistances
            .as_slice()
            .try_into()
            .map_err(|_| anyhow!("exactly three resistances are required"))?;
        Ok(CalcRequest::Kvl(KvlRequest {
            source_voltage: self.voltage,
            resistances,
        }))
    }
}

#[derive(Debug, Args)]
pub struct SignalArgs {
    /// AC frequency in hertz.
    #[arg(long, default_value_t = 50.0)]
    frequency: f64,
    /// AC peak amplitude in volts.
    #[arg(long, default_value_t = 12.0)]
    amplitude: f64,
    /// DC level in volts.
    #[arg(long, default_value_t = 12.0)]
    dc: f64,
}

impl SignalArgs {
    pub fn request(&self) -> CalcRequest {
        CalcRequest::Signal(self.signal())
    }

    pub fn signal(&self) -> SignalRequest {
        SignalRequest {
            frequency_hz: self.frequency,
            ac_amplitude: self.amplitude,
            dc_level: self.dc,
        }
    }
}

#[derive(Debug, Args)]
pub struct AdvisoryArgs {
    /// Power in watts.
    #[arg(long)]
    power: f64,
    /// Voltage in volts.
    #[arg(long)]
    voltage: f64,
    /// Current in amperes.
    #[arg(long)]
    current: f64,
}

impl AdvisoryArgs {
    pub fn request(&self) -> CalcRequest {
        CalcRequest::Advisory(AdvisoryRequest {
            power: self.power,
            voltage: self.voltage,
            current: self.current,
        })
    }
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Request document; `.jsonl` files hold one JSON request per line.
    #[arg(long, value_name = "FILE")]
    file: PathBuf,
}

pub fn eval(args: &EvalArgs, session: &Session) -> Result<()> {
    let is_batch = args
        .file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));
    let requests = if is_batch {
        load_requests_from_jsonl(&args.file)
    } else {
        load_request_from_file(&args.file).map(|request| vec![request])
    }
    .with_context(|| format!("failed to load requests from {}", args.file.display()))?;

    info!(file = %args.file.display(), count = requests.len(), "evaluating request file");
    for request in requests {
        run(request, session)?;
    }
    Ok(())
}
