//! ---
//! dcc_section: "05-networking-external-interfaces"
//! dcc_subsection: "binary"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Chart data subcommand of the dccalc front end."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use anyhow::Result;
use clap::Args;
use dcc_calc_engine::charts::{
    dc_ac_chart, emf_characteristic_chart, energy_cost_chart, voltage_current_chart, Chart,
    ChartKind, Point,
};
use dcc_calc_engine::signal::SignalRequest;

use crate::render::{table, Fmt, OutputFormat};
use crate::Session;

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// voltage-current, emf-characteristic, energy-cost or dc-ac-comparison.
    #[arg(value_name = "KIND")]
    kind: ChartKind,
    /// Load resistance for the V–I line, in ohms.
    #[arg(long, default_value_t = 10.0)]
    resistance: f64,
    /// Source EMF for the characteristic curve, in volts.
    #[arg(long, default_value_t = 12.0)]
    emf: f64,
    /// Internal resistance for the characteristic curve, in ohms.
    #[arg(long = "internal-resistance", default_value_t = 0.5)]
    internal_resistance: f64,
    /// Constant load power for the energy projection, in watts.
    #[arg(long, default_value_t = 100.0)]
    power: f64,
    #[arg(long, default_value_t = 50.0)]
    frequency: f64,
    #[arg(long, default_value_t = 12.0)]
    amplitude: f64,
    #[arg(long, default_value_t = 12.0)]
    dc: f64,
}

impl ChartArgs {
    pub fn build(&self) -> Chart {
        match self.kind {
            ChartKind::VoltageCurrent => voltage_current_chart(self.resistance),
            ChartKind::EmfCharacteristic => {
                emf_characteristic_chart(self.emf, self.internal_resistance)
            }
            ChartKind::EnergyCost => energy_cost_chart(self.power),
            ChartKind::DcAcComparison => dc_ac_chart(&SignalRequest {
                frequency_hz: self.frequency,
                ac_amplitude: self.amplitude,
                dc_level: self.dc,
            }),
        }
    }
}

pub fn run(args: &ChartArgs, session: &Session) -> Result<()> {
    let chart = args.build();
    match session.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
        OutputFormat::Text => print!("{}", summary(&chart, session.precision)),
    }
    Ok(())
}

fn summary(chart: &Chart, precision: usize) -> String {
    let f = Fmt { precision };
    let point = |p: &Point| format!("({}, {})", f.num(p.x), f.num(p.y));
    let mut rows = vec![("chart".to_owned(), chart.title.clone())];
    for series in &chart.series {
        let span = match (series.points.first(), series.points.last()) {
            (Some(first), Some(last)) => format!("{} .. {}", point(first), point(last)),
            _ => "empty".to_owned(),
        };
        rows.push((
            series.name.clone(),
            format!(
                "{} points, {} vs {}, {span}",
                series.points.len(),
                series.y_label,
                series.x_label
            ),
        ));
    }
    if let Some(marker) = &chart.marker {
        rows.push(("operating point".to_owned(), point(marker)));
    }
    table(&rows)
}
