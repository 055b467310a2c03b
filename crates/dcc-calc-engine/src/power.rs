//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Electrical power, energy and tariff cost."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::{
    constants::{SECONDS_PER_HOUR, TARIFF_PER_KWH, WATTS_PER_KILOWATT},
    errors::ratio_or_zero,
};

/// Qualitative consumption tier assigned from the V·I power.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PowerTier {
    /// Below 100 W.
    #[serde(rename = "Efisien")]
    Efficient,
    /// Below 500 W.
    #[serde(rename = "Sedang")]
    Moderate,
    #[serde(rename = "Tinggi")]
    High,
}

impl PowerTier {
    pub fn classify(power_w: f64) -> Self {
        if power_w < 100.0 {
            PowerTier::Efficient
        } else if power_w < 500.0 {
            PowerTier::Moderate
        } else {
            PowerTier::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PowerTier::Efficient => "Efisien",
            PowerTier::Moderate => "Sedang",
            PowerTier::High => "Tinggi",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PowerRequest {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PowerEnergy {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub duration_hours: f64,
    /// P = V·I, the figure energy and cost are derived from.
    pub power_vi: f64,
    /// P = I²·R
    pub power_i2r: f64,
    /// P = V²/R, 0 when R is 0.
    pub power_v2r: f64,
    pub energy_joules: f64,
    pub energy_kwh: f64,
    pub cost: f64,
    pub tier: PowerTier,
}

impl PowerEnergy {
    /// Largest absolute disagreement between the three power expressions.
    pub fn power_spread(&self) -> f64 {
        let values = [self.power_vi, self.power_i2r, self.power_v2r];
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        let min = values.iter().copied().fold(f64::MAX, f64::min);
        max - min
    }
}

pub fn energy_kwh(power_w: f64, hours: f64) -> f64 {
    power_w * hours / WATTS_PER_KILOWATT
}

pub fn energy_cost(energy_kwh: f64) -> f64 {
    energy_kwh * TARIFF_PER_KWH
}

pub fn evaluate_power(request: &PowerRequest) -> PowerEnergy {
    let PowerRequest {
        voltage,
        current,
        resistance,
        duration_hours,
    } = *request;

    let power_vi = voltage * current;
    let power_i2r = current.powi(2) * resistance;
    let power_v2r = ratio_or_zero("power.v_squared_over_r", voltage.powi(2), resistance);

    let energy_joules = power_vi * duration_hours * SECONDS_PER_HOUR;
    let energy_kwh = energy_kwh(power_vi, duration_hours);

    PowerEnergy {
        voltage,
        current,
        resistance,
        duration_hours,
        power_vi,
        power_i2r,
        power_v2r,
        energy_joules,
        energy_kwh,
        cost: energy_cost(energy_kwh),
        tier: PowerTier::classify(power_vi),
    }
}
