use log::trace;

use crate::assembly::types::TypeDescriptor;

/// Member processor for collecting property and method names of types
#[derive(Debug, Default)]
pub struct MemberProcessor {}

impl MemberProcessor {
    /// Create a new member processor
    pub fn new() -> Self {
        Self {}
    }

    /// Declared property names of a type, duplicates kept
    pub fn properties(&self, descriptor: &TypeDescriptor) -> Vec<String> {
        descriptor.properties.clone()
    }

    /// Declared method names of a type, without special-name members
    pub fn methods(&self, descriptor: &TypeDescriptor) -> Vec<String> {
        descriptor
            .methods
            .iter()
            .filter(|method| {
                if method.is_special_name() {
                    trace!("Skipping special member {}.{}", descriptor.name, method.name());
                    return false;
                }
                true
            })
            .map(|method| method.name().to_string())
            .collect()
    }

    /// Property names across all given types
    pub fn collect_properties<'a>(&self, types: impl IntoIterator<Item = &'a TypeDescriptor>) -> Vec<String> {
        types.into_iter().flat_map(|t| self.properties(t)).collect()
    }

    /// Method names across all given types
    pub fn collect_methods<'a>(&self, types: impl IntoIterator<Item = &'a TypeDescriptor>) -> Vec<String> {
        types.into_iter().flat_map(|t| self.methods(t)).collect()
    }
}
