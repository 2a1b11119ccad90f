use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, trace};

use crate::assembly::types::{LoadedModule, ModuleMetadata, TypeDef, ForwardedTypeRef, SUPPORTED_FORMAT_VERSION};
use crate::error::{MetadataError, ForwardError};

/// Extension of a module's metadata file when resolved by module name
pub const METADATA_EXTENSION: &str = "json";

/// Maximum number of modules followed for one forwarded type
pub const MAX_FORWARD_DEPTH: usize = 8;

/// Loads module metadata files and resolves forwarded types
#[derive(Debug, Default)]
pub struct ModuleLoader {}

impl ModuleLoader {
    /// Create a new module loader
    pub fn new() -> Self {
        Self {}
    }

    /// Load a single module from disk
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedModule, MetadataError> {
        let path = path.as_ref();
        trace!("Loading module {}", path.display());

        // The handle is closed before parsing starts
        let bytes = fs::read(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata: ModuleMetadata = serde_json::from_slice(&bytes).map_err(|source| MetadataError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(MetadataError::UnsupportedVersion {
                path: path.to_path_buf(),
                version: metadata.format_version,
            });
        }

        debug!(
            "Loaded module {} ({} types, {} forwarded)",
            metadata.name,
            metadata.types.len(),
            metadata.forwarded_types.len()
        );

        Ok(LoadedModule {
            path: path.to_path_buf(),
            metadata,
        })
    }

    /// Path a module named `module` is expected at, next to `dir`'s other modules
    pub fn module_path(dir: &Path, module: &str) -> PathBuf {
        dir.join(format!("{}.{}", module, METADATA_EXTENSION))
    }

    /// Resolve every forwarded type of a module to its defining declaration.
    ///
    /// All-or-nothing: one unresolvable reference fails the whole module.
    pub fn forwarded_types(&self, module: &LoadedModule) -> Result<Vec<TypeDef>, ForwardError> {
        let dir = module.directory();
        let mut cache: HashMap<String, LoadedModule> = HashMap::new();

        module
            .metadata
            .forwarded_types
            .iter()
            .map(|forward| self.resolve(dir, forward, &mut cache))
            .collect()
    }

    fn resolve(
        &self,
        dir: &Path,
        forward: &ForwardedTypeRef,
        cache: &mut HashMap<String, LoadedModule>,
    ) -> Result<TypeDef, ForwardError> {
        let mut target = forward.module.clone();

        for _ in 0..MAX_FORWARD_DEPTH {
            let defining = self.cached_module(dir, &target, &forward.name, cache)?;

            if let Some(type_def) = defining
                .metadata
                .types
                .iter()
                .find(|t| t.matches(&forward.name, forward.namespace.as_deref()))
            {
                return Ok(type_def.clone());
            }

            // The target may itself forward the type further
            match defining
                .metadata
                .forwarded_types
                .iter()
                .find(|f| forward.refers_to_same(f))
            {
                Some(next) => {
                    trace!("Following forward of {} from {} to {}", forward.name, target, next.module);
                    target = next.module.clone();
                }
                None => {
                    return Err(ForwardError::TypeNotFound {
                        module: target,
                        type_name: forward.name.clone(),
                    });
                }
            }
        }

        Err(ForwardError::ChainTooDeep {
            type_name: forward.name.clone(),
            depth: MAX_FORWARD_DEPTH,
        })
    }

    fn cached_module<'a>(
        &self,
        dir: &Path,
        module: &str,
        type_name: &str,
        cache: &'a mut HashMap<String, LoadedModule>,
    ) -> Result<&'a LoadedModule, ForwardError> {
        if !cache.contains_key(module) {
            let path = Self::module_path(dir, module);
            if !path.is_file() {
                return Err(ForwardError::ModuleNotFound {
                    module: module.to_string(),
                    type_name: type_name.to_string(),
                    path,
                });
            }

            let loaded = self.load(&path).map_err(|source| ForwardError::ModuleUnloadable {
                module: module.to_string(),
                type_name: type_name.to_string(),
                source,
            })?;
            cache.insert(module.to_string(), loaded);
        }

        cache.get(module).ok_or_else(|| ForwardError::ModuleNotFound {
            module: module.to_string(),
            type_name: type_name.to_string(),
            path: Self::module_path(dir, module),
        })
    }
}
