use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::preserve_module_name::MODULE_NAME_KEY;

/// Index of a module in its `ModuleGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleKey(pub(crate) usize);

impl ModuleKey {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Marker left by an earlier convention pass on modules that must keep a
/// stable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreserveTag {
    /// Keep a stable name, computed from the module's location.
    Flag,
    /// Keep this exact name.
    Name(String),
}

/// Build-scoped metadata bag attached to a successfully built module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildMeta {
    entries: IndexMap<String, Value>,
}

impl BuildMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn entries(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Id stored by the naming pass, if any.
    pub fn module_name(&self) -> Option<&str> {
        self.get(MODULE_NAME_KEY).and_then(Value::as_str)
    }
}

/// Link from a merge root to the modules it absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedGroup {
    /// The original module the group was built around.
    pub root: ModuleKey,
    /// Every absorbed module, root included, in merge order.
    pub modules: Vec<ModuleKey>,
}

/// One compiled unit of the graph.
#[derive(Debug, Clone, Default)]
pub struct Module {
    /// Host identifier, used for diagnostics and reports.
    pub identifier: String,
    /// Import specifier this module was first requested with.
    pub raw_request: Option<String>,
    /// Absolute path of the source file.
    pub resource: Option<String>,
    /// `None` when the module failed to build.
    pub build_meta: Option<BuildMeta>,
    pub preserve: Option<PreserveTag>,
    /// Set when this module is a merge root.
    pub merged: Option<MergedGroup>,
    /// Set when this module was absorbed into a merge root.
    pub merged_into: Option<ModuleKey>,
}

impl Module {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            build_meta: Some(BuildMeta::new()),
            ..Default::default()
        }
    }

    pub fn with_request(mut self, raw_request: impl Into<String>) -> Self {
        self.raw_request = Some(raw_request.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_preserve(mut self, tag: PreserveTag) -> Self {
        self.preserve = Some(tag);
        self
    }

    /// Drop the metadata bag, as the host does for modules with build errors.
    pub fn without_build_meta(mut self) -> Self {
        self.build_meta = None;
        self
    }

    pub fn is_merge_root(&self) -> bool {
        self.merged.is_some()
    }
}
