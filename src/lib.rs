pub mod assembly;
pub mod error;
pub mod report;
pub mod utils;


// Re-export main types and functions for easier access
pub use assembly::types::{TypeDescriptor, TypeKind, Visibility, CounterOptions, CountReport, AggregatedCount};
pub use assembly::scanner::{ModuleScanner, ModuleLoader, FileCollector};
pub use assembly::processor::{AssemblyProcessor, ScanStats};
pub use error::{MetadataError, ForwardError};

pub use report::{ReportWriter, ReportPaths};

// Re-export utility functions
pub use utils::file_utils;
