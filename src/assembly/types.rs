use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};
use serde::{Serialize, Deserialize};

/// Directory scanned when no other source directory is configured
pub const DEFAULT_SOURCE_DIR: &str = "/usr/share/dotnet/metadata/Microsoft.NETCore.App/2.1.5";

/// Substring a file name must contain to be considered a module
pub const DEFAULT_NAME_FILTER: &str = "System";

/// Metadata format version understood by the loader
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// Declaration kind of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Reference types other than interfaces. Delegates count as classes.
    pub fn is_class_shaped(self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Delegate)
    }

    pub fn is_interface_shaped(self) -> bool {
        self == TypeKind::Interface
    }
}

/// Visibility of a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Internal,
    NestedPublic,
    NestedPrivate,
}

impl Visibility {
    /// Only top-level public types are publicly visible
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// Which of the two type reports a descriptor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Class,
    Interface,
}

impl TypeCategory {
    /// Visibility and kind predicate shared by direct and forwarded types
    pub fn accepts(self, type_def: &TypeDef) -> bool {
        if !type_def.visibility.is_public() {
            return false;
        }

        match self {
            TypeCategory::Class => type_def.kind.is_class_shaped(),
            TypeCategory::Interface => type_def.kind.is_interface_shaped(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeCategory::Class => "class",
            TypeCategory::Interface => "interface",
        }
    }
}

/// A method entry, either a bare name or a name with flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MethodDef {
    Plain(String),
    Detailed {
        name: String,

        /// Compiler-synthesized member (operator, accessor, event plumbing)
        #[serde(default)]
        special_name: bool,
    },
}

impl MethodDef {
    pub fn name(&self) -> &str {
        match self {
            MethodDef::Plain(name) => name,
            MethodDef::Detailed { name, .. } => name,
        }
    }

    pub fn is_special_name(&self) -> bool {
        match self {
            MethodDef::Plain(_) => false,
            MethodDef::Detailed { special_name, .. } => *special_name,
        }
    }
}

/// A type declaration as recorded in a module's metadata table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Simple (unqualified) name
    pub name: String,

    #[serde(default)]
    pub namespace: Option<String>,

    pub kind: TypeKind,

    pub visibility: Visibility,

    /// Declared property names, in declaration order
    #[serde(default)]
    pub properties: Vec<String>,

    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

impl TypeDef {
    /// Whether this declaration is the target of a forwarded reference.
    /// A reference without a namespace matches any namespace.
    pub fn matches(&self, name: &str, namespace: Option<&str>) -> bool {
        self.name == name && (namespace.is_none() || self.namespace.as_deref() == namespace)
    }
}

/// A type re-exported by a module but defined in another module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardedTypeRef {
    pub name: String,

    #[serde(default)]
    pub namespace: Option<String>,

    /// Name of the module physically defining the type
    pub module: String,
}

impl ForwardedTypeRef {
    /// Whether another forward entry re-exports the same type
    pub fn refers_to_same(&self, other: &ForwardedTypeRef) -> bool {
        self.name == other.name && (self.namespace.is_none() || self.namespace == other.namespace)
    }
}

fn default_format_version() -> u32 {
    SUPPORTED_FORMAT_VERSION
}

/// Metadata table of one compiled library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    #[serde(default = "default_format_version")]
    pub format_version: u32,

    pub name: String,

    #[serde(default)]
    pub types: Vec<TypeDef>,

    #[serde(default)]
    pub forwarded_types: Vec<ForwardedTypeRef>,
}

/// A successfully loaded module
#[derive(Debug, Clone)]
pub struct LoadedModule {
    /// File the metadata was read from
    pub path: PathBuf,

    pub metadata: ModuleMetadata,
}

impl LoadedModule {
    /// Directory searched when resolving forwarded types
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// A class or interface discovered during enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,

    pub category: TypeCategory,

    /// Name of the module the type was enumerated from
    pub module: String,

    /// Whether the type was reached through a forwarded reference
    pub forwarded: bool,

    pub properties: Vec<String>,

    pub methods: Vec<MethodDef>,
}

impl TypeDescriptor {
    pub fn from_def(type_def: &TypeDef, category: TypeCategory, module: &str, forwarded: bool) -> Self {
        Self {
            name: type_def.name.clone(),
            category,
            module: module.to_string(),
            forwarded,
            properties: type_def.properties.clone(),
            methods: type_def.methods.clone(),
        }
    }
}

/// Configuration options for a counting run
#[derive(Debug, Clone)]
pub struct CounterOptions {
    /// Directory holding module metadata files
    pub source_dir: PathBuf,

    /// Case-sensitive substring required in candidate file names
    pub name_filter: String,

    /// Directory the four reports are written to
    pub output_dir: PathBuf,
}

impl CounterOptions {
    pub fn new(source_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            name_filter: DEFAULT_NAME_FILTER.to_string(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Fixed source directory, reports on the user's desktop
    pub fn default_locations() -> Result<Self> {
        let output_dir = dirs::desktop_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow!("Could not determine the desktop or home directory"))?;

        Ok(Self::new(DEFAULT_SOURCE_DIR, output_dir))
    }

    pub fn with_name_filter(mut self, name_filter: impl Into<String>) -> Self {
        self.name_filter = name_filter.into();
        self
    }
}

/// A name and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedCount {
    pub name: String,
    pub count: usize,
}

/// Everything produced by one counting run
#[derive(Debug, Clone, Default)]
pub struct CountReport {
    /// Distinct class names, sorted
    pub classes: Vec<String>,

    /// Distinct interface names, sorted
    pub interfaces: Vec<String>,

    /// Property names by descending count
    pub properties: Vec<AggregatedCount>,

    /// Method names by descending count
    pub methods: Vec<AggregatedCount>,

    pub stats: crate::assembly::processor::ScanStats,
}
