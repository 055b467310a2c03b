//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Plot-ready data series derived from the calculator formulas."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
//! Data series for the calculator charts.
//!
//! Only the numbers are produced here; drawing them is left to whichever
//! front end consumes the JSON.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    errors::ratio_or_zero,
    power::{energy_cost, energy_kwh},
    signal::{analyze_signals, linspace, SignalRequest},
    source::terminal_voltage,
};

/// Points per parametric curve.
pub const CURVE_POINTS: usize = 100;
/// Upper end of the current axis on the V–I chart, in amperes.
pub const VI_MAX_CURRENT_A: f64 = 5.0;
/// Horizon of the energy and cost projection, in hours.
pub const PROJECTION_HOURS: f64 = 24.0;
/// Sample index marked as the operating point on the EMF characteristic.
pub const OPERATING_POINT_INDEX: usize = 50;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ChartKind {
    VoltageCurrent,
    EmfCharacteristic,
    EnergyCost,
    DcAcComparison,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub name: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<Point>,
}

impl Series {
    fn new(name: impl Into<String>, x_label: &str, y_label: &str, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            points,
        }
    }

    fn from_fn(
        name: impl Into<String>,
        x_label: &str,
        y_label: &str,
        xs: &[f64],
        f: impl Fn(f64) -> f64,
    ) -> Self {
        let points = xs.iter().map(|&x| Point { x, y: f(x) }).collect();
        Self::new(name, x_label, y_label, points)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<Series>,
    /// Highlighted point, when the chart has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Point>,
}

/// V = I·R for I from 0 to 5 A.
pub fn voltage_current_chart(resistance: f64) -> Chart {
    let currents = linspace(0.0, VI_MAX_CURRENT_A, CURVE_POINTS);
    Chart {
        kind: ChartKind::VoltageCurrent,
        title: "Voltage vs current".into(),
        series: vec![Series::from_fn(
            format!("V = I × {resistance}Ω"),
            "Current (A)",
            "Voltage (V)",
            &currents,
            |i| i * resistance,
        )],
        marker: None,
    }
}

/// Terminal voltage from open circuit up to the short-circuit current ε/r.
///
/// With no internal resistance the short-circuit current is undefined and the
/// current axis collapses to zero.
pub fn emf_characteristic_chart(emf: f64, internal_resistance: f64) -> Chart {
    let max_current = ratio_or_zero("chart.short_circuit_current", emf, internal_resistance);
    let currents = linspace(0.0, max_current, CURVE_POINTS);
    let series = Series::from_fn(
        format!("V = {emf} - {internal_resistance}×I"),
        "Current (A)",
        "Voltage (V)",
        &currents,
        |i| terminal_voltage(emf, internal_resistance, i),
    );
    let marker = series.points.get(OPERATING_POINT_INDEX).copied();
    Chart {
        kind: ChartKind::EmfCharacteristic,
        title: "EMF vs terminal voltage".into(),
        series: vec![series],
        marker,
    }
}

/// Cumulative energy and cost for a constant load over one day.
pub fn energy_cost_chart(power_w: f64) -> Chart {
    let hours = linspace(0.0, PROJECTION_HOURS, CURVE_POINTS);
    Chart {
        kind: ChartKind::EnergyCost,
        title: "Energy consumption and cost".into(),
        series: vec![
            Series::from_fn("Energy (kWh)", "Time (h)", "Energy (kWh)", &hours, |t| {
                energy_kwh(power_w, t)
            }),
            Series::from_fn("Cost (Rp)", "Time (h)", "Cost (Rp)", &hours, |t| {
                energy_cost(energy_kwh(power_w, t))
            }),
        ],
        marker: None,
    }
}

/// DC and AC waveforms plus their two-line spectrum.
pub fn dc_ac_chart(request: &SignalRequest) -> Chart {
    let analysis = analyze_signals(request);
    let samples = &analysis.samples;
    let waveform = |name: &str, values: &[f64]| {
        let points = samples
            .time
            .iter()
            .zip(values)
            .map(|(&x, &y)| Point { x, y })
            .collect();
        Series::new(name, "Time (s)", "Voltage (V)", points)
    };
    let lines = &analysis.power.spectrum;
    let dc_spectrum = lines
        .iter()
        .map(|line| Point {
            x: line.frequency_hz,
            y: line.dc_amplitude,
        })
        .collect();
    let ac_spectrum = lines
        .iter()
        .map(|line| Point {
            x: line.frequency_hz,
            y: line.ac_amplitude,
        })
        .collect();

    Chart {
        kind: ChartKind::DcAcComparison,
        title: "DC vs AC characteristics".into(),
        series: vec![
            waveform("DC signal", &samples.dc),
            waveform("AC signal", &samples.ac),
            Series::new("DC spectrum", "Frequency (Hz)", "Amplitude (V)", dc_spectrum),
            Series::new("AC spectrum", "Frequency (Hz)", "Amplitude (V)", ac_spectrum),
        ],
        marker: None,
    }
}
