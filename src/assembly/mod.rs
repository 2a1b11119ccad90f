pub mod types;
pub mod scanner;
pub mod processor;

// Re-export the main API for easier access
pub use types::{TypeDescriptor, CounterOptions, CountReport};
pub use scanner::ModuleScanner;
pub use processor::AssemblyProcessor;
