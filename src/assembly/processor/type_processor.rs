use log::debug;

use crate::assembly::scanner::ScannedModule;
use crate::assembly::types::{TypeCategory, TypeDescriptor};

/// Type processor for enumerating the classes or interfaces of a module
#[derive(Debug, Default)]
pub struct TypeProcessor {}

impl TypeProcessor {
    /// Create a new type processor
    pub fn new() -> Self {
        Self {}
    }

    /// Public types of `category` defined directly in the module, followed
    /// by those it forwards
    pub fn enumerate(&self, scanned: &ScannedModule, category: TypeCategory) -> Vec<TypeDescriptor> {
        let module_name = scanned.module.metadata.name.as_str();

        let direct = scanned
            .module
            .metadata
            .types
            .iter()
            .filter(|t| category.accepts(t))
            .map(|t| TypeDescriptor::from_def(t, category, module_name, false));
        let forwarded = scanned
            .forwarded
            .iter()
            .filter(|t| category.accepts(t))
            .map(|t| TypeDescriptor::from_def(t, category, module_name, true));

        let descriptors: Vec<TypeDescriptor> = direct.chain(forwarded).collect();

        debug!(
            "Module {}: {} public {} types",
            module_name,
            descriptors.len(),
            category.label()
        );
        descriptors
    }

    /// Enumerate across a set of modules, preserving module order
    pub fn enumerate_all(&self, modules: &[ScannedModule], category: TypeCategory) -> Vec<TypeDescriptor> {
        modules
            .iter()
            .flat_map(|scanned| self.enumerate(scanned, category))
            .collect()
    }
}
