//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Threshold cascade producing an efficiency rating and recommendation."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
//! Rule-based circuit advisory.
//!
//! The rules in [`ADVISORY_RULES`] are applied in order and every matching rule
//! overwrites the whole advisory. When several thresholds are exceeded at once
//! the last matching rule wins, so a voltage overload takes precedence over high
//! power and high current.

use serde::{Deserialize, Serialize};

pub const POWER_LIMIT_W: f64 = 1000.0;
pub const CURRENT_LIMIT_A: f64 = 10.0;
pub const VOLTAGE_LIMIT_V: f64 = 240.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rating {
    #[serde(rename = "Optimal")]
    Optimal,
    #[serde(rename = "Tinggi")]
    HighPower,
    #[serde(rename = "Arus Tinggi")]
    HighCurrent,
    #[serde(rename = "Overload")]
    Overload,
}

impl Rating {
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Optimal => "Optimal",
            Rating::HighPower => "Tinggi",
            Rating::HighCurrent => "Arus Tinggi",
            Rating::Overload => "Overload",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AdvisoryRequest {
    pub power: f64,
    pub voltage: f64,
    pub current: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advisory {
    pub rating: Rating,
    pub recommendation: String,
    pub warning: Option<String>,
    pub severity: Severity,
}

impl Default for Advisory {
    fn default() -> Self {
        BASELINE.to_advisory()
    }
}

/// Record written by a matching rule.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryEffect {
    pub rating: Rating,
    pub recommendation: &'static str,
    pub warning: Option<&'static str>,
    pub severity: Severity,
}

impl AdvisoryEffect {
    fn to_advisory(self) -> Advisory {
        Advisory {
            rating: self.rating,
            recommendation: self.recommendation.to_owned(),
            warning: self.warning.map(str::to_owned),
            severity: self.severity,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdvisoryRule {
    pub name: &'static str,
    pub applies: fn(&AdvisoryRequest) -> bool,
    pub effect: AdvisoryEffect,
}

const BASELINE: AdvisoryEffect = AdvisoryEffect {
    rating: Rating::Optimal,
    recommendation: "Rangkaian bekerja dengan baik",
    warning: None,
    severity: Severity::Green,
};

fn exceeds_power(request: &AdvisoryRequest) -> bool {
    request.power > POWER_LIMIT_W
}

fn exceeds_current(request: &AdvisoryRequest) -> bool {
    request.current > CURRENT_LIMIT_A
}

fn exceeds_voltage(request: &AdvisoryRequest) -> bool {
    request.voltage > VOLTAGE_LIMIT_V
}

/// Evaluation order is part of the contract: later entries override earlier ones.
pub const ADVISORY_RULES: [AdvisoryRule; 3] = [
    AdvisoryRule {
        name: "high-power",
        applies: exceeds_power,
        effect: AdvisoryEffect {
            rating: Rating::HighPower,
            recommendation: "Pertimbangkan penggunaan komponen dengan rating daya lebih tinggi",
            warning: Some("⚠️ Konsumsi daya tinggi"),
            severity: Severity::Orange,
        },
    },
    AdvisoryRule {
        name: "high-current",
        applies: exceeds_current,
        effect: AdvisoryEffect {
            rating: Rating::HighCurrent,
            recommendation: "Gunakan kabel dengan diameter lebih besar",
            warning: Some("⚠️ Arus tinggi - risiko panas berlebih"),
            severity: Severity::Orange,
        },
    },
    AdvisoryRule {
        name: "voltage-overload",
        applies: exceeds_voltage,
        effect: AdvisoryEffect {
            rating: Rating::Overload,
            recommendation: "Periksa spesifikasi tegangan maksimum komponen",
            warning: Some("🚨 Tegangan melebihi batas normal"),
            severity: Severity::Red,
        },
    },
];

pub fn advise(request: &AdvisoryRequest) -> Advisory {
    ADVISORY_RULES
        .iter()
        .filter(|rule| (rule.applies)(request))
        .fold(BASELINE, |_, rule| rule.effect)
        .to_advisory()
}

/// Names of the rules that matched, in evaluation order.
pub fn matching_rules(request: &AdvisoryRequest) -> Vec<&'static str> {
    ADVISORY_RULES
        .iter()
        .filter(|rule| (rule.applies)(request))
        .map(|rule| rule.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(power: f64, voltage: f64, current: f64) -> AdvisoryRequest {
        AdvisoryRequest {
            power,
            voltage,
            current,
        }
    }

    #[test]
    fn nominal_circuit_is_optimal() {
        let advisory = advise(&request(500.0, 220.0, 2.3));
        assert_eq!(advisory, Advisory::default());
        assert_eq!(advisory.severity, Severity::Green);
        assert!(advisory.warning.is_none());
    }

    #[test]
    fn last_matching_rule_wins() {
        let advisory = advise(&request(1500.0, 250.0, 15.0));
        assert_eq!(advisory.rating, Rating::Overload);
        assert_eq!(advisory.severity, Severity::Red);
        assert_eq!(
            matching_rules(&request(1500.0, 250.0, 15.0)),
            vec!["high-power", "high-current", "voltage-overload"]
        );
    }

    #[test]
    fn current_overrides_power() {
        let advisory = advise(&request(1500.0, 220.0, 15.0));
        assert_eq!(advisory.rating, Rating::HighCurrent);
        assert_eq!(
            advisory.recommendation,
            "Gunakan kabel dengan diameter lebih besar"
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let advisory = advise(&request(1000.0, 240.0, 10.0));
        assert_eq!(advisory.rating, Rating::Optimal);
    }

    #[test]
    fn power_only() {
        let advisory = advise(&request(1000.5, 0.0, 0.0));
        assert_eq!(advisory.rating, Rating::HighPower);
        assert_eq!(advisory.rating.label(), "Tinggi");
        assert_eq!(advisory.severity, Severity::Orange);
    }

    #[test]
    fn rating_serializes_as_label() {
        let json = serde_json::to_value(advise(&request(0.0, 0.0, 11.0))).unwrap();
        assert_eq!(json["rating"], "Arus Tinggi");
        assert_eq!(json["severity"], "orange");
    }
}
