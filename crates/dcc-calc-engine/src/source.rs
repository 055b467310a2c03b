//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "EMF source with internal resistance."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::errors::ratio_or_zero;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SourceRequest {
    pub emf: f64,
    pub internal_resistance: f64,
    pub current: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SourceModel {
    pub emf: f64,
    pub internal_resistance: f64,
    pub current: f64,
    pub terminal_voltage: f64,
    pub power_loss: f64,
    /// Percentage of the EMF available at the terminals; 0 when the EMF is 0.
    pub efficiency_percent: f64,
}

pub fn terminal_voltage(emf: f64, internal_resistance: f64, current: f64) -> f64 {
    emf - current * internal_resistance
}

pub fn evaluate_source(request: &SourceRequest) -> SourceModel {
    let SourceRequest {
        emf,
        internal_resistance,
        current,
    } = *request;
    let terminal_voltage = terminal_voltage(emf, internal_resistance, current);
    let power_loss = current.powi(2) * internal_resistance;
    let efficiency_percent = ratio_or_zero("source.efficiency", terminal_voltage, emf) * 100.0;

    SourceModel {
        emf,
        internal_resistance,
        current,
        terminal_voltage,
        power_loss,
        efficiency_percent,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn loaded_battery() {
        let model = evaluate_source(&SourceRequest {
            emf: 12.0,
            internal_resistance: 0.5,
            current: 2.0,
        });
        assert_relative_eq!(model.terminal_voltage, 11.0);
        assert_relative_eq!(model.power_loss, 2.0);
        assert_relative_eq!(model.efficiency_percent, 91.666_666_666, max_relative = 1e-6);
    }

    #[test]
    fn zero_emf_reports_zero_efficiency() {
        let model = evaluate_source(&SourceRequest {
            emf: 0.0,
            internal_resistance: 1.0,
            current: 3.0,
        });
        assert_eq!(model.efficiency_percent, 0.0);
        assert_eq!(model.terminal_voltage, -3.0);
    }

    #[test]
    fn open_circuit_delivers_full_emf() {
        let model = evaluate_source(&SourceRequest {
            emf: 9.0,
            internal_resistance: 0.2,
            current: 0.0,
        });
        assert_eq!(model.terminal_voltage, 9.0);
        assert_eq!(model.power_loss, 0.0);
        assert_relative_eq!(model.efficiency_percent, 100.0);
    }
}
