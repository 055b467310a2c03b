//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "DC versus AC signal sampling and power comparison."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::f64::consts::{PI, SQRT_2};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{ASSUMED_LOAD_RESISTANCE_OHM, SIGNAL_SAMPLE_COUNT, SIGNAL_WINDOW_PERIODS},
    errors::ratio_or_zero,
};

/// `count` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SignalRequest {
    pub frequency_hz: f64,
    pub ac_amplitude: f64,
    pub dc_level: f64,
}

impl Default for SignalRequest {
    fn default() -> Self {
        Self {
            frequency_hz: 50.0,
            ac_amplitude: 12.0,
            dc_level: 12.0,
        }
    }
}

/// One frequency-domain line of the simplified spectrum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpectrumLine {
    pub frequency_hz: f64,
    pub dc_amplitude: f64,
    pub ac_amplitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalSample {
    pub frequency_hz: f64,
    pub ac_amplitude: f64,
    pub dc_level: f64,
    /// Length of the sampled window, four periods of the AC signal.
    pub window_s: f64,
    pub time: Vec<f64>,
    pub dc: Vec<f64>,
    pub ac: Vec<f64>,
}

/// Samples a constant DC level and `A·sin(2πft)` over four AC periods.
///
/// A zero frequency has no period, so the window collapses to zero length and
/// every sample sits at `t = 0`.
pub fn sample_signals(request: &SignalRequest) -> SignalSample {
    sample_signals_with(request, SIGNAL_SAMPLE_COUNT)
}

pub fn sample_signals_with(request: &SignalRequest, samples: usize) -> SignalSample {
    let window_s = ratio_or_zero(
        "signal.window",
        SIGNAL_WINDOW_PERIODS,
        request.frequency_hz,
    );
    let time = linspace(0.0, window_s, samples);
    let omega = 2.0 * PI * request.frequency_hz;
    let dc = vec![request.dc_level; time.len()];
    let ac = time
        .iter()
        .map(|t| request.ac_amplitude * (omega * t).sin())
        .collect();

    SignalSample {
        frequency_hz: request.frequency_hz,
        ac_amplitude: request.ac_amplitude,
        dc_level: request.dc_level,
        window_s,
        time,
        dc,
        ac,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerComparison {
    pub load_resistance_ohm: f64,
    pub rms_voltage: f64,
    pub dc_power_w: f64,
    pub ac_rms_power_w: f64,
    pub ac_peak_power_w: f64,
    pub spectrum: Vec<SpectrumLine>,
}

pub fn rms_voltage(amplitude: f64) -> f64 {
    amplitude / SQRT_2
}

/// Powers dissipated by each signal in the fixed assumed load.
pub fn compare_power(request: &SignalRequest) -> PowerComparison {
    let rms_voltage = rms_voltage(request.ac_amplitude);
    let load = ASSUMED_LOAD_RESISTANCE_OHM;
    PowerComparison {
        load_resistance_ohm: load,
        rms_voltage,
        dc_power_w: request.dc_level.powi(2) / load,
        ac_rms_power_w: rms_voltage.powi(2) / load,
        ac_peak_power_w: request.ac_amplitude.powi(2) / load,
        spectrum: vec![
            SpectrumLine {
                frequency_hz: 0.0,
                dc_amplitude: request.dc_level,
                ac_amplitude: 0.0,
            },
            SpectrumLine {
                frequency_hz: request.frequency_hz,
                dc_amplitude: 0.0,
                ac_amplitude: request.ac_amplitude / 2.0,
            },
        ],
    }
}

/// Samples together with the power comparison, as returned by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalAnalysis {
    pub samples: SignalSample,
    pub power: PowerComparison,
}

pub fn analyze_signals(request: &SignalRequest) -> SignalAnalysis {
    SignalAnalysis {
        samples: sample_signals(request),
        power: compare_power(request),
    }
}
