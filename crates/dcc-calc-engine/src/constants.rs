//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Fixed constants baked into the classroom formulas."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
//! Fixed constants used by the calculators.
//!
//! These are simplifications of the teaching material rather than physical
//! constants, and the outputs of the calculators depend on them verbatim.

/// Electricity tariff in rupiah per kilowatt-hour used for cost estimates.
pub const TARIFF_PER_KWH: f64 = 1500.0;

/// Load resistance in ohms assumed by the DC/AC power comparison.
pub const ASSUMED_LOAD_RESISTANCE_OHM: f64 = 10.0;

/// Number of samples produced for each DC/AC signal sequence.
pub const SIGNAL_SAMPLE_COUNT: usize = 1000;

/// Number of AC periods covered by the sampled time window.
pub const SIGNAL_WINDOW_PERIODS: f64 = 4.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Tolerance for KCL balance and KVL closure, relative to the largest current or
/// voltage involved (never below an absolute floor of the same size).
pub const BALANCE_TOLERANCE: f64 = 1e-9;
