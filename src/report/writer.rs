use std::path::{Path, PathBuf};
use anyhow::Result;
use log::{info, debug};

use crate::assembly::types::{AggregatedCount, CountReport};
use crate::utils::file_utils;

pub const CLASS_REPORT: &str = "class.txt";
pub const INTERFACE_REPORT: &str = "interface.txt";
pub const PROPERTY_REPORT: &str = "property.txt";
pub const METHOD_REPORT: &str = "method.txt";

/// Paths of the four reports written by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub classes: PathBuf,
    pub interfaces: PathBuf,
    pub properties: PathBuf,
    pub methods: PathBuf,
}

/// Writes report files into an output directory
#[derive(Debug)]
pub struct ReportWriter {
    /// Directory the reports are written to
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a new report writer for the given directory
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Paths the reports are written to
    pub fn paths(&self) -> ReportPaths {
        ReportPaths {
            classes: self.output_dir.join(CLASS_REPORT),
            interfaces: self.output_dir.join(INTERFACE_REPORT),
            properties: self.output_dir.join(PROPERTY_REPORT),
            methods: self.output_dir.join(METHOD_REPORT),
        }
    }

    /// Write all four reports, replacing any previous contents
    pub fn write_all(&self, report: &CountReport) -> Result<ReportPaths> {
        let paths = self.paths();
        debug!("Writing reports to {}", self.output_dir.display());

        file_utils::write_lines_to_file(&paths.classes, &report.classes)?;
        file_utils::write_lines_to_file(&paths.interfaces, &report.interfaces)?;
        file_utils::write_lines_to_file(&paths.properties, &format_counts(&report.properties))?;
        file_utils::write_lines_to_file(&paths.methods, &format_counts(&report.methods))?;

        info!("Wrote 4 reports to {}", self.output_dir.display());
        Ok(paths)
    }
}

/// `name: count` lines in the given order
pub fn format_counts(counts: &[AggregatedCount]) -> Vec<String> {
    counts
        .iter()
        .map(|c| format!("{}: {}", c.name, c.count))
        .collect()
}
