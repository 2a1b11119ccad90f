mod file_collector;
mod loader;

use std::path::{Path, PathBuf};
use anyhow::Result;
use log::{info, trace, warn};

use crate::assembly::types::{LoadedModule, TypeDef};

// Re-export from submodules
pub use file_collector::FileCollector;
pub use loader::{ModuleLoader, METADATA_EXTENSION, MAX_FORWARD_DEPTH};

/// A module file that was skipped because it failed to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub message: String,
}

/// A loaded module together with its resolved forwarded types
#[derive(Debug, Clone)]
pub struct ScannedModule {
    pub module: LoadedModule,

    /// Forwarded types, empty when they could not be resolved
    pub forwarded: Vec<TypeDef>,
}

/// Outcome of loading every candidate module in a directory
#[derive(Debug, Default)]
pub struct ModuleSet {
    /// Candidate files examined
    pub candidates: usize,

    /// Modules that loaded, in file-name order
    pub modules: Vec<ScannedModule>,

    /// Modules that did not load, in file-name order
    pub failures: Vec<LoadFailure>,
}

/// Module scanner responsible for locating and loading module files
#[derive(Debug)]
pub struct ModuleScanner {
    /// File collector for finding module files
    file_collector: FileCollector,

    /// Loader for reading module metadata
    loader: ModuleLoader,
}

impl ModuleScanner {
    /// Create a new module scanner filtering file names by `name_filter`
    pub fn new(name_filter: impl Into<String>) -> Self {
        Self {
            file_collector: FileCollector::with_name_filter(name_filter),
            loader: ModuleLoader::new(),
        }
    }

    /// Load every candidate module in `input_dir`.
    ///
    /// A module that fails to load is recorded and skipped. Only a failure
    /// to enumerate the directory itself is returned as an error.
    pub fn scan_directory(&self, input_dir: impl AsRef<Path>) -> Result<ModuleSet> {
        let input_dir = input_dir.as_ref();
        info!("Scanning directory: {}", input_dir.display());

        let files = self.file_collector.collect_files(input_dir)?;
        let mut set = ModuleSet {
            candidates: files.len(),
            ..ModuleSet::default()
        };

        for file in files {
            match self.loader.load(&file) {
                Ok(module) => {
                    let forwarded = self.forwarded_types(&module);
                    set.modules.push(ScannedModule { module, forwarded });
                }
                Err(e) => {
                    warn!("Skipping module {}: {}", file.display(), e);
                    set.failures.push(LoadFailure {
                        path: file,
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Loaded {} of {} modules ({} failed)",
            set.modules.len(),
            set.candidates,
            set.failures.len()
        );

        Ok(set)
    }

    /// Forwarded types of a module, or none when they cannot be resolved
    pub fn forwarded_types(&self, module: &LoadedModule) -> Vec<TypeDef> {
        if module.metadata.forwarded_types.is_empty() {
            return Vec::new();
        }

        match self.loader.forwarded_types(module) {
            Ok(types) => types,
            Err(e) => {
                trace!("No forwarded types for {}: {}", module.metadata.name, e);
                Vec::new()
            }
        }
    }
}
