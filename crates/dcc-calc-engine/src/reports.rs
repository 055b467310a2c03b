//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "JSON report export for evaluated calculators."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{errors::Result, CalcRecord};

#[derive(Debug)]
pub struct ReportExporter<'a> {
    record: &'a CalcRecord,
}

impl<'a> ReportExporter<'a> {
    pub fn new(record: &'a CalcRecord) -> Self {
        Self { record }
    }

    /// File name of the report, e.g. `kvl-20240501T120000.000Z.json`.
    pub fn file_name(&self) -> String {
        self.numbered_file_name(0)
    }

    /// `file_name` with a `-{sequence}` suffix for every sequence above zero.
    fn numbered_file_name(&self, sequence: usize) -> String {
        let stem = format!(
            "{}-{}",
            self.record.calculator,
            self.record.timestamp.format("%Y%m%dT%H%M%S%.3fZ")
        );
        match sequence {
            0 => format!("{stem}.json"),
            n => format!("{stem}-{n}.json"),
        }
    }

    /// Writes the record into `output_dir`, creating it when missing.
    ///
    /// Existing reports are never overwritten: when the name is taken the next
    /// free sequence suffix is used.
    pub fn export(&self, output_dir: &Path) -> Result<PathBuf> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let serialized = serde_json::to_string_pretty(self.record)?;
        let mut sequence = 0;
        let (path, mut file) = loop {
            let path = output_dir.join(self.numbered_file_name(sequence));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break (path, file),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => sequence += 1,
                Err(err) => return Err(err.into()),
            }
        };
        file.write_all(serialized.as_bytes())?;

        info!(
            calculator = %self.record.calculator,
            path = %path.display(),
            "report exported"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate_record, kirchhoff::KclRequest, CalcRequest};

    #[test]
    fn same_timestamp_reports_get_distinct_names() {
        let dir = tempfile::tempdir().unwrap();
        let record = evaluate_record(CalcRequest::Kcl(KclRequest {
            incoming: 5.0,
            outgoing_given: 2.0,
        }));
        let exporter = record.exporter();
        let first = exporter.export(dir.path()).unwrap();
        let second = exporter.export(dir.path()).unwrap();
        let third = exporter.export(dir.path()).unwrap();

        assert_eq!(first, dir.path().join(exporter.file_name()));
        assert_ne!(first, second);
        assert!(second.to_string_lossy().ends_with("-1.json"));
        assert!(third.to_string_lossy().ends_with("-2.json"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }
}
