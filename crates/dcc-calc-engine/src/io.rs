//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Loading calculator requests from JSON, YAML and JSON Lines files."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::{fs, io::BufRead, path::Path};

use crate::{errors::Result, CalcRequest};

/// Parses a request document, treating text that opens with `{` as JSON and anything else as YAML.
pub fn parse_request(data: &str) -> Result<CalcRequest> {
    let request = if data.trim_start().starts_with('{') {
        serde_json::from_str(data)?
    } else {
        serde_yaml::from_str(data)?
    };
    Ok(request)
}

pub fn load_request_from_file(path: impl AsRef<Path>) -> Result<CalcRequest> {
    let data = fs::read_to_string(path)?;
    parse_request(&data)
}

/// Reads one JSON request per line, skipping blank lines.
pub fn load_requests_from_jsonl(path: impl AsRef<Path>) -> Result<Vec<CalcRequest>> {
    let file = fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let mut requests = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        requests.push(serde_json::from_str(&line)?);
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalcEngineError, Calculator};

    #[test]
    fn yaml_request_is_detected() {
        let yaml = "calculator: emf\nemf: 12.0\ninternal_resistance: 0.5\ncurrent: 2.0\n";
        assert_eq!(parse_request(yaml).unwrap().calculator(), Calculator::Emf);
    }

    #[test]
    fn invalid_resistor_set_surfaces_as_yaml_error() {
        let yaml = "calculator: resistance\ntopology: series\nresistors: [1.0]\n";
        assert!(matches!(
            parse_request(yaml),
            Err(CalcEngineError::YamlSerializationFailed(_))
        ));
    }
}
