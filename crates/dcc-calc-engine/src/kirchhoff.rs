//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Kirchhoff current and voltage law solvers."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
//! Single-node KCL and single-loop KVL.
//!
//! Both solvers are one-step substitutions for the classroom circuits: one node
//! with one incoming and two outgoing branches, and one loop with a source and
//! three series resistors. Neither generalizes to arbitrary networks.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{constants::BALANCE_TOLERANCE, errors::ratio_or_zero};

/// `|residual| <= tolerance · max(|scale|, 1)`.
fn within_tolerance(residual: f64, scale: f64, tolerance: f64) -> bool {
    residual.abs() <= tolerance * scale.abs().max(1.0)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KclRequest {
    pub incoming: f64,
    pub outgoing_given: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KclNode {
    pub incoming: f64,
    pub outgoing_given: f64,
    pub outgoing_derived: f64,
    /// Whether incoming ≈ given + derived after the solve.
    pub balanced: bool,
}

pub fn solve_kcl(request: &KclRequest) -> KclNode {
    let outgoing_derived = request.incoming - request.outgoing_given;
    let residual = request.incoming - (request.outgoing_given + outgoing_derived);
    let scale = request.incoming.abs().max(request.outgoing_given.abs());
    let balanced = within_tolerance(residual, scale, BALANCE_TOLERANCE);
    KclNode {
        incoming: request.incoming,
        outgoing_given: request.outgoing_given,
        outgoing_derived,
        balanced,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KvlRequest {
    pub source_voltage: f64,
    pub resistances: [f64; 3],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KvlLoop {
    pub source_voltage: f64,
    pub resistances: [f64; 3],
    pub total_resistance: f64,
    pub loop_current: f64,
    pub element_voltages: [f64; 3],
    /// Source voltage minus the sum of drops; reported, never corrected.
    pub closure_residual: f64,
}

impl KvlLoop {
    /// Whether the residual is within `tolerance` relative to the source voltage.
    pub fn closes(&self, tolerance: f64) -> bool {
        within_tolerance(self.closure_residual, self.source_voltage, tolerance)
    }
}

pub fn solve_kvl(request: &KvlRequest) -> KvlLoop {
    let KvlRequest {
        source_voltage,
        resistances,
    } = *request;

    let total_resistance: f64 = resistances.iter().sum();
    let loop_current = ratio_or_zero("kvl.loop_current", source_voltage, total_resistance);
    let element_voltages = resistances.map(|r| loop_current * r);
    let closure_residual = source_voltage - element_voltages.iter().sum::<f64>();

    let solved = KvlLoop {
        source_voltage,
        resistances,
        total_resistance,
        loop_current,
        element_voltages,
        closure_residual,
    };
    if !solved.closes(BALANCE_TOLERANCE) {
        warn!(
            residual = closure_residual,
            source_voltage, "KVL loop does not close"
        );
    }
    solved
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn kcl_derives_second_branch() {
        let node = solve_kcl(&KclRequest {
            incoming: 5.0,
            outgoing_given: 2.0,
        });
        assert_eq!(node.outgoing_derived, 3.0);
        assert!(node.balanced);
    }

    #[test]
    fn kcl_allows_negative_branch() {
        let node = solve_kcl(&KclRequest {
            incoming: 1.0,
            outgoing_given: 4.0,
        });
        assert_eq!(node.outgoing_derived, -3.0);
    }

    #[test]
    fn kvl_textbook_loop() {
        let solved = solve_kvl(&KvlRequest {
            source_voltage: 12.0,
            resistances: [4.0, 6.0, 2.0],
        });
        assert_eq!(solved.total_resistance, 12.0);
        assert_abs_diff_eq!(solved.loop_current, 1.0);
        assert_abs_diff_eq!(solved.element_voltages[0], 4.0);
        assert_abs_diff_eq!(solved.element_voltages[1], 6.0);
        assert_abs_diff_eq!(solved.element_voltages[2], 2.0);
        assert_abs_diff_eq!(solved.closure_residual, 0.0, epsilon = 1e-12);
        assert!(solved.closes(1e-9));
    }

    #[test]
    fn kvl_zero_resistance_loop_has_no_current() {
        let solved = solve_kvl(&KvlRequest {
            source_voltage: 12.0,
            resistances: [0.0, 0.0, 0.0],
        });
        assert_eq!(solved.loop_current, 0.0);
        assert_eq!(solved.element_voltages, [0.0; 3]);
        assert_eq!(solved.closure_residual, 12.0);
        assert!(!solved.closes(1e-9));
    }

    #[test]
    fn kvl_high_voltage_loop_closes_despite_rounding() {
        let solved = solve_kvl(&KvlRequest {
            source_voltage: 3.0e8,
            resistances: [0.1, 0.2, 0.7],
        });
        assert!(solved.closure_residual.abs() < 1e-6);
        assert!(solved.closes(BALANCE_TOLERANCE));
    }

    #[test]
    fn kcl_large_currents_stay_balanced() {
        let node = solve_kcl(&KclRequest {
            incoming: 3.0e8 + 0.1,
            outgoing_given: 0.3,
        });
        assert!(node.balanced);
    }

    #[test]
    fn kvl_requires_exactly_three_resistances() {
        let json = r#"{"source_voltage": 12.0, "resistances": [4.0, 6.0]}"#;
        assert!(serde_json::from_str::<KvlRequest>(json).is_err());
    }
}
