//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Series and parallel resistance aggregation."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::{ratio_or_zero, CalcEngineError, Result};

/// Number of resistors a set may hold.
pub const RESISTOR_COUNT: RangeInclusive<usize> = 2..=5;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Topology {
    Series,
    Parallel,
}

/// Ordered set of 2 to 5 non-negative resistances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ResistorSet {
    values: Vec<f64>,
}

impl ResistorSet {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if !RESISTOR_COUNT.contains(&values.len()) {
            return Err(CalcEngineError::InvalidResistorCount(values.len()));
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0.0) {
            return Err(CalcEngineError::NegativeResistance { index, value });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn series_total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// 1 / Σ(1/Rᵢ) over the non-zero resistors; 0 when none contribute.
    pub fn parallel_total(&self) -> f64 {
        let reciprocal_sum: f64 = self
            .values
            .iter()
            .filter(|r| **r != 0.0)
            .map(|r| 1.0 / r)
            .sum();
        ratio_or_zero("resistance.parallel", 1.0, reciprocal_sum)
    }

    pub fn total(&self, topology: Topology) -> f64 {
        match topology {
            Topology::Series => self.series_total(),
            Topology::Parallel => self.parallel_total(),
        }
    }
}

impl TryFrom<Vec<f64>> for ResistorSet {
    type Error = CalcEngineError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<ResistorSet> for Vec<f64> {
    fn from(set: ResistorSet) -> Self {
        set.values
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResistanceRequest {
    pub topology: Topology,
    pub resistors: ResistorSet,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResistanceResult {
    pub topology: Topology,
    pub resistors: Vec<f64>,
    pub total: f64,
}

pub fn aggregate_resistance(request: &ResistanceRequest) -> ResistanceResult {
    ResistanceResult {
        topology: request.topology,
        resistors: request.resistors.values().to_vec(),
        total: request.resistors.total(request.topology),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn set(values: &[f64]) -> ResistorSet {
        ResistorSet::new(values.to_vec()).unwrap()
    }

    #[test]
    fn series_sums_values() {
        assert_eq!(set(&[10.0, 20.0, 30.0]).series_total(), 60.0);
    }

    #[test]
    fn parallel_of_equal_pair_halves() {
        assert_relative_eq!(set(&[10.0, 10.0]).parallel_total(), 5.0);
    }

    #[test]
    fn parallel_skips_zero_resistors() {
        assert_relative_eq!(set(&[0.0, 10.0]).parallel_total(), 10.0);
    }

    #[test]
    fn parallel_of_all_zero_is_zero() {
        assert_eq!(set(&[0.0, 0.0, 0.0]).parallel_total(), 0.0);
    }

    #[test]
    fn count_outside_range_is_rejected() {
        assert!(matches!(
            ResistorSet::new(vec![1.0]),
            Err(CalcEngineError::InvalidResistorCount(1))
        ));
        assert!(matches!(
            ResistorSet::new(vec![1.0; 6]),
            Err(CalcEngineError::InvalidResistorCount(6))
        ));
    }

    #[test]
    fn negative_value_is_rejected() {
        let err = ResistorSet::new(vec![1.0, -2.0]).unwrap_err();
        assert!(matches!(
            err,
            CalcEngineError::NegativeResistance { index: 1, .. }
        ));
    }

    #[test]
    fn deserialization_validates() {
        let ok: ResistorSet = serde_json::from_str("[10.0, 20.0]").unwrap();
        assert_eq!(ok.values().len(), 2);
        assert!(serde_json::from_str::<ResistorSet>("[10.0]").is_err());
    }

    #[test]
    fn aggregate_reports_topology_and_inputs() {
        let result = aggregate_resistance(&ResistanceRequest {
            topology: Topology::Parallel,
            resistors: set(&[10.0, 20.0, 30.0]),
        });
        assert_eq!(result.resistors, vec![10.0, 20.0, 30.0]);
        assert_relative_eq!(result.total, 60.0 / 11.0, max_relative = 1e-12);
    }
}
