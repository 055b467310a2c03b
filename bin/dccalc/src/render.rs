//! ---
//! dcc_section: "05-networking-external-interfaces"
//! dcc_subsection: "binary"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Text and JSON rendering of calculator results."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use anyhow::Result;
use clap::ValueEnum;
use dcc_calc_engine::{
    advisory::{Advisory, Severity},
    constants::BALANCE_TOLERANCE,
    kirchhoff::{KclNode, KvlLoop},
    ohm::OhmResult,
    power::PowerEnergy,
    resistance::ResistanceResult,
    signal::SignalAnalysis,
    source::SourceModel,
    CalcResponse,
};

use crate::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

type Rows = Vec<(String, String)>;

pub fn print_response(response: &CalcResponse, session: &Session) -> Result<()> {
    match session.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Text => print!("{}", text(response, session.precision)),
    }
    Ok(())
}

/// Aligned `label  value` lines for one response.
pub fn text(response: &CalcResponse, precision: usize) -> String {
    let f = Fmt { precision };
    let rows = match response {
        CalcResponse::Ohm(result) => ohm_rows(result, f),
        CalcResponse::Resistance(result) => resistance_rows(result, f),
        CalcResponse::Emf(model) => source_rows(model, f),
        CalcResponse::Power(result) => power_rows(result, f),
        CalcResponse::Kcl(node) => kcl_rows(node, f),
        CalcResponse::Kvl(loop_) => kvl_rows(loop_, f),
        CalcResponse::Signal(analysis) => signal_rows(analysis, f),
        CalcResponse::Advisory(advisory) => advisory_rows(advisory),
    };
    table(&rows)
}

pub fn table(rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}\n"))
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Fmt {
    pub precision: usize,
}

impl Fmt {
    pub fn num(self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    pub fn qty(self, value: f64, unit: &str) -> String {
        format!("{} {unit}", self.num(value))
    }
}

fn row(label: &str, value: impl Into<String>) -> (String, String) {
    (label.to_owned(), value.into())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn ohm_rows(result: &OhmResult, f: Fmt) -> Rows {
    vec![
        row("solved for", result.solved_for.to_string()),
        row("voltage", f.qty(result.voltage, "V")),
        row("current", f.qty(result.current, "A")),
        row("resistance", f.qty(result.resistance, "Ω")),
    ]
}

fn resistance_rows(result: &ResistanceResult, f: Fmt) -> Rows {
    let resistors = result
        .resistors
        .iter()
        .map(|&r| f.num(r))
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        row("topology", result.topology.to_string()),
        row("resistors", format!("{resistors} Ω")),
        row("total", f.qty(result.total, "Ω")),
    ]
}

fn source_rows(model: &SourceModel, f: Fmt) -> Rows {
    vec![
        row("emf", f.qty(model.emf, "V")),
        row("internal resistance", f.qty(model.internal_resistance, "Ω")),
        row("current", f.qty(model.current, "A")),
        row("terminal voltage", f.qty(model.terminal_voltage, "V")),
        row("power loss", f.qty(model.power_loss, "W")),
        row("efficiency", f.qty(model.efficiency_percent, "%")),
    ]
}

fn power_rows(result: &PowerEnergy, f: Fmt) -> Rows {
    vec![
        row("P = V·I", f.qty(result.power_vi, "W")),
        row("P = I²·R", f.qty(result.power_i2r, "W")),
        row("P = V²/R", f.qty(result.power_v2r, "W")),
        row("energy", f.qty(result.energy_joules, "J")),
        row("energy (kWh)", f.qty(result.energy_kwh, "kWh")),
        row("cost", format!("Rp {}", f.num(result.cost))),
        row("tier", result.tier.label()),
    ]
}

fn kcl_rows(node: &KclNode, f: Fmt) -> Rows {
    vec![
        row("incoming", f.qty(node.incoming, "A")),
        row("outgoing (given)", f.qty(node.outgoing_given, "A")),
        row("outgoing (derived)", f.qty(node.outgoing_derived, "A")),
        row("balanced", yes_no(node.balanced)),
    ]
}

fn kvl_rows(loop_: &KvlLoop, f: Fmt) -> Rows {
    let mut rows = vec![
        row("source voltage", f.qty(loop_.source_voltage, "V")),
        row("total resistance", f.qty(loop_.total_resistance, "Ω")),
        row("loop current", f.qty(loop_.loop_current, "A")),
    ];
    for (index, drop) in loop_.element_voltages.iter().enumerate() {
        rows.push(row(&format!("drop R{}", index + 1), f.qty(*drop, "V")));
    }
    rows.push(row("closure residual", format!("{:e} V", loop_.closure_residual)));
    rows.push(row("loop closes", yes_no(loop_.closes(BALANCE_TOLERANCE))));
    rows
}

fn signal_rows(analysis: &SignalAnalysis, f: Fmt) -> Rows {
    let samples = &analysis.samples;
    let power = &analysis.power;
    let mut rows = vec![
        row("frequency", f.qty(samples.frequency_hz, "Hz")),
        row(
            "window",
            format!("{} s ({} samples)", f.num(samples.window_s), samples.time.len()),
        ),
        row("rms voltage", f.qty(power.rms_voltage, "V")),
        row("dc power", f.qty(power.dc_power_w, "W")),
        row("ac rms power", f.qty(power.ac_rms_power_w, "W")),
        row("ac peak power", f.qty(power.ac_peak_power_w, "W")),
    ];
    for line in &power.spectrum {
        rows.push(row(
            &format!("spectrum {} Hz", f.num(line.frequency_hz)),
            format!(
                "dc {} / ac {}",
                f.qty(line.dc_amplitude, "V"),
                f.qty(line.ac_amplitude, "V")
            ),
        ));
    }
    rows
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Green => "green",
        Severity::Orange => "orange",
        Severity::Red => "red",
    }
}

fn advisory_rows(advisory: &Advisory) -> Rows {
    vec![
        row("rating", advisory.rating.label()),
        row("severity", severity_label(advisory.severity)),
        row("recommendation", advisory.recommendation.clone()),
        row("warning", advisory.warning.clone().unwrap_or_else(|| "-".into())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcc_calc_engine::{evaluate, kirchhoff::KvlRequest, power::PowerRequest, CalcRequest};

    #[test]
    fn kvl_text_uses_precision() {
        let response = evaluate(&CalcRequest::Kvl(KvlRequest {
            source_voltage: 12.0,
            resistances: [4.0, 6.0, 2.0],
        }));
        let out = text(&response, 3);
        assert!(out.contains("1.000 A"));
        assert!(out.contains("drop R2"));
        assert!(out.contains("loop closes"));
    }

    #[test]
    fn power_text_reports_tier_label() {
        let response = evaluate(&CalcRequest::Power(PowerRequest {
            voltage: 220.0,
            current: 5.0,
            resistance: 44.0,
            duration_hours: 1.0,
        }));
        let out = text(&response, 2);
        assert!(out.contains("Rp 1650.00"));
        assert!(out.contains("Tinggi"));
    }

    #[test]
    fn table_aligns_labels() {
        let out = table(&[row("a", "1"), row("long label", "2")]);
        assert_eq!(out, "a           1\nlong label  2\n");
    }
}
