//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Ohm's law resolver."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::ratio_or_zero;

/// Quantity the resolver solves for.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SolveFor {
    Voltage,
    Current,
    Resistance,
}

/// Inputs for one Ohm's law solve. The field named by `solve_for` is ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OhmRequest {
    pub solve_for: SolveFor,
    #[serde(default)]
    pub voltage: f64,
    #[serde(default)]
    pub current: f64,
    #[serde(default)]
    pub resistance: f64,
}

impl OhmRequest {
    pub fn voltage(current: f64, resistance: f64) -> Self {
        Self {
            solve_for: SolveFor::Voltage,
            voltage: 0.0,
            current,
            resistance,
        }
    }

    pub fn current(voltage: f64, resistance: f64) -> Self {
        Self {
            solve_for: SolveFor::Current,
            voltage,
            current: 0.0,
            resistance,
        }
    }

    pub fn resistance(voltage: f64, current: f64) -> Self {
        Self {
            solve_for: SolveFor::Resistance,
            voltage,
            current,
            resistance: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OhmResult {
    pub solved_for: SolveFor,
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
}

impl OhmResult {
    /// The value that was solved for.
    pub fn solved_value(&self) -> f64 {
        match self.solved_for {
            SolveFor::Voltage => self.voltage,
            SolveFor::Current => self.current,
            SolveFor::Resistance => self.resistance,
        }
    }
}

/// V = I·R, I = V/R or R = V/I. A zero divisor yields 0 for the solved quantity.
pub fn solve_ohm(request: &OhmRequest) -> OhmResult {
    let OhmRequest {
        solve_for,
        voltage,
        current,
        resistance,
    } = *request;

    let (voltage, current, resistance) = match solve_for {
        SolveFor::Voltage => (current * resistance, current, resistance),
        SolveFor::Current => (
            voltage,
            ratio_or_zero("ohm.current", voltage, resistance),
            resistance,
        ),
        SolveFor::Resistance => (
            voltage,
            current,
            ratio_or_zero("ohm.resistance", voltage, current),
        ),
    };

    OhmResult {
        solved_for: solve_for,
        voltage,
        current,
        resistance,
    }
}
