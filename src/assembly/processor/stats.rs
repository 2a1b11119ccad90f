use std::fmt;

use crate::assembly::scanner::LoadFailure;

/// Summary counts of a counting run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// Candidate files examined
    pub candidate_files: usize,

    /// Modules that loaded
    pub loaded_modules: usize,

    /// Modules skipped because they failed to load
    pub load_failures: Vec<LoadFailure>,

    /// Distinct classes
    pub classes: usize,

    /// Distinct interfaces
    pub interfaces: usize,

    /// Property names collected, before aggregation
    pub properties: usize,

    /// Method names collected, before aggregation
    pub methods: usize,

    /// Distinct property names
    pub aggregated_properties: usize,

    /// Distinct method names
    pub aggregated_methods: usize,
}

impl ScanStats {
    /// Percentage of candidate files that loaded
    pub fn load_rate(&self) -> f64 {
        if self.candidate_files == 0 {
            return 0.0;
        }

        (self.loaded_modules as f64 / self.candidate_files as f64) * 100.0
    }

    /// The summary lines shown to the operator, in order
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("class: {}", self.classes),
            format!("interface: {}", self.interfaces),
            format!("property: {}", self.properties),
            format!("method: {}", self.methods),
            format!("aggregated property: {}", self.aggregated_properties),
            format!("aggregated method: {}", self.aggregated_methods),
        ]
    }
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.summary_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
