mod assembly_processor;
mod member_processor;
mod stats;
mod type_processor;

// Re-export from submodules
pub use assembly_processor::AssemblyProcessor;
pub use member_processor::MemberProcessor;
pub use stats::ScanStats;
pub use type_processor::TypeProcessor;
