use std::io::{self, Write};
use anyhow::{Result, Context};
use log::info;

use crate::assembly::processor::{MemberProcessor, ScanStats, TypeProcessor};
use crate::assembly::scanner::ModuleScanner;
use crate::assembly::types::{CounterOptions, CountReport, TypeCategory};
use crate::report::{self, ReportWriter};

/// Runs a full count: load modules, enumerate types and members,
/// aggregate, write reports
#[derive(Debug)]
pub struct AssemblyProcessor {
    /// Configuration options for the run
    options: CounterOptions,

    /// Scanner for locating and loading modules
    scanner: ModuleScanner,

    /// Enumerates classes and interfaces of a module
    type_processor: TypeProcessor,

    /// Collects member names of types
    member_processor: MemberProcessor,

    /// Writes the four reports
    writer: ReportWriter,
}

impl AssemblyProcessor {
    /// Create a new processor with the given options
    pub fn new(options: CounterOptions) -> Self {
        Self {
            scanner: ModuleScanner::new(options.name_filter.clone()),
            type_processor: TypeProcessor::new(),
            member_processor: MemberProcessor::new(),
            writer: ReportWriter::new(&options.output_dir),
            options,
        }
    }

    /// Run and print console output to stdout
    pub fn run(&self) -> Result<CountReport> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        self.run_with_console(&mut console)
    }

    /// Run, printing load failures and the summary to `console`
    pub fn run_with_console<W: Write>(&self, console: &mut W) -> Result<CountReport> {
        let report = self.count(console)?;
        self.writer.write_all(&report)?;
        Ok(report)
    }

    /// Build the report without writing any files
    pub fn count<W: Write>(&self, console: &mut W) -> Result<CountReport> {
        let module_set = self.scanner.scan_directory(&self.options.source_dir)?;

        for failure in &module_set.failures {
            writeln!(console, "{}", failure.message)
                .context("Failed to write to console")?;
        }

        let classes = report::distinct_sorted(
            self.type_processor.enumerate_all(&module_set.modules, TypeCategory::Class),
        );
        let interfaces = report::distinct_sorted(
            self.type_processor.enumerate_all(&module_set.modules, TypeCategory::Interface),
        );

        let properties = self
            .member_processor
            .collect_properties(classes.iter().chain(interfaces.iter()));
        let methods = self
            .member_processor
            .collect_methods(classes.iter().chain(interfaces.iter()));

        let aggregated_properties = report::count_by_name(&properties);
        let aggregated_methods = report::count_by_name(&methods);

        let stats = ScanStats {
            candidate_files: module_set.candidates,
            loaded_modules: module_set.modules.len(),
            load_failures: module_set.failures,
            classes: classes.len(),
            interfaces: interfaces.len(),
            properties: properties.len(),
            methods: methods.len(),
            aggregated_properties: aggregated_properties.len(),
            aggregated_methods: aggregated_methods.len(),
        };

        write!(console, "{}", stats).context("Failed to write to console")?;
        info!(
            "Counted {} classes and {} interfaces from {} modules ({:.1}% loaded)",
            stats.classes,
            stats.interfaces,
            stats.loaded_modules,
            stats.load_rate()
        );

        Ok(CountReport {
            classes: classes.into_iter().map(|t| t.name).collect(),
            interfaces: interfaces.into_iter().map(|t| t.name).collect(),
            properties: aggregated_properties,
            methods: aggregated_methods,
            stats,
        })
    }
}
