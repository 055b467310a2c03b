//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Closed-form DC circuit calculators and their request dispatcher."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
//! Formula engine for elementary DC circuits.
//!
//! Every calculator is a pure function from a request struct to a result
//! struct. [`evaluate`] dispatches a tagged [`CalcRequest`] to the matching
//! calculator so that front ends can drive the engine from a single JSON or
//! YAML document.

pub mod advisory;
pub mod api;
pub mod charts;
pub mod constants;
pub mod errors;
pub mod io;
pub mod kirchhoff;
pub mod ohm;
pub mod power;
pub mod reports;
pub mod resistance;
pub mod signal;
pub mod source;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::info;

use crate::{
    advisory::{advise, Advisory, AdvisoryRequest},
    kirchhoff::{solve_kcl, solve_kvl, KclNode, KclRequest, KvlLoop, KvlRequest},
    ohm::{solve_ohm, OhmRequest, OhmResult},
    power::{evaluate_power, PowerEnergy, PowerRequest},
    reports::ReportExporter,
    resistance::{aggregate_resistance, ResistanceRequest, ResistanceResult, Topology},
    signal::{analyze_signals, SignalAnalysis, SignalRequest},
    source::{evaluate_source, SourceModel, SourceRequest},
};

pub use errors::{CalcEngineError, DivisionByZero, Result};

/// Every calculator the engine can evaluate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Calculator {
    Ohm,
    Series,
    Parallel,
    Emf,
    Power,
    Kcl,
    Kvl,
    Signal,
    Advisory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalcRequest {
    Ohm(OhmRequest),
    Resistance(ResistanceRequest),
    Emf(SourceRequest),
    Power(PowerRequest),
    Kcl(KclRequest),
    Kvl(KvlRequest),
    Signal(SignalRequest),
    Advisory(AdvisoryRequest),
}

impl CalcRequest {
    pub fn calculator(&self) -> Calculator {
        match self {
            CalcRequest::Ohm(_) => Calculator::Ohm,
            CalcRequest::Resistance(req) => match req.topology {
                Topology::Series => Calculator::Series,
                Topology::Parallel => Calculator::Parallel,
            },
            CalcRequest::Emf(_) => Calculator::Emf,
            CalcRequest::Power(_) => Calculator::Power,
            CalcRequest::Kcl(_) => Calculator::Kcl,
            CalcRequest::Kvl(_) => Calculator::Kvl,
            CalcRequest::Signal(_) => Calculator::Signal,
            CalcRequest::Advisory(_) => Calculator::Advisory,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalcResponse {
    Ohm(OhmResult),
    Resistance(ResistanceResult),
    Emf(SourceModel),
    Power(PowerEnergy),
    Kcl(KclNode),
    Kvl(KvlLoop),
    Signal(SignalAnalysis),
    Advisory(Advisory),
}

pub fn evaluate(request: &CalcRequest) -> CalcResponse {
    info!(calculator = %request.calculator(), "evaluating calculator");
    match request {
        CalcRequest::Ohm(req) => CalcResponse::Ohm(solve_ohm(req)),
        CalcRequest::Resistance(req) => CalcResponse::Resistance(aggregate_resistance(req)),
        CalcRequest::Emf(req) => CalcResponse::Emf(evaluate_source(req)),
        CalcRequest::Power(req) => CalcResponse::Power(evaluate_power(req)),
        CalcRequest::Kcl(req) => CalcResponse::Kcl(solve_kcl(req)),
        CalcRequest::Kvl(req) => CalcResponse::Kvl(solve_kvl(req)),
        CalcRequest::Signal(req) => CalcResponse::Signal(analyze_signals(req)),
        CalcRequest::Advisory(req) => CalcResponse::Advisory(advise(req)),
    }
}

/// One evaluation together with its inputs, as written to report files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcRecord {
    pub timestamp: DateTime<Utc>,
    pub calculator: Calculator,
    pub request: CalcRequest,
    pub response: CalcResponse,
}

impl CalcRecord {
    pub fn exporter(&self) -> ReportExporter<'_> {
        ReportExporter::new(self)
    }
}

pub fn evaluate_record(request: CalcRequest) -> CalcRecord {
    let response = evaluate(&request);
    CalcRecord {
        timestamp: Utc::now(),
        calculator: request.calculator(),
        request,
        response,
    }
}

/// Evaluates `request` and, when `output_dir` is given, writes the record there.
pub fn evaluate_with_options(
    request: CalcRequest,
    output_dir: Option<&Path>,
) -> Result<CalcRecord> {
    let record = evaluate_record(request);
    if let Some(dir) = output_dir {
        record.exporter().export(dir)?;
    }
    Ok(record)
}
