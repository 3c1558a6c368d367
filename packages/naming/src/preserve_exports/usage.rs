// Export usage
//
// The question optimization passes ask about every export: is it used, and
// under which name does it survive.

use indexmap::IndexMap;

use crate::graph::ModuleKey;

/// Answer of usage analysis for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsedName {
    /// Can be dropped.
    Unused,
    /// Kept, under this (possibly mangled) name.
    Used(String),
}

impl UsedName {
    pub fn is_used(&self) -> bool {
        matches!(self, UsedName::Used(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            UsedName::Used(name) => Some(name),
            UsedName::Unused => None,
        }
    }
}

/// Usage analysis capability.
pub trait ExportUsage {
    fn used_name(&self, module: ModuleKey, name: &str) -> UsedName;
}

impl<F> ExportUsage for F
where
    F: Fn(ModuleKey, &str) -> UsedName,
{
    fn used_name(&self, module: ModuleKey, name: &str) -> UsedName {
        self(module, name)
    }
}

/// Precomputed usage analysis results. Exports not listed are unused.
#[derive(Debug, Clone, Default)]
pub struct UsageTable {
    modules: IndexMap<ModuleKey, IndexMap<String, UsedName>>,
}

impl UsageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, module: ModuleKey, name: impl Into<String>, used: UsedName) {
        self.modules.entry(module).or_default().insert(name.into(), used);
    }

    /// Export names known for `module`, in insertion order.
    pub fn names(&self, module: ModuleKey) -> impl Iterator<Item = &str> + '_ {
        self.modules
            .get(&module)
            .into_iter()
            .flat_map(|names| names.keys().map(String::as_str))
    }

    pub fn modules(&self) -> impl Iterator<Item = ModuleKey> + '_ {
        self.modules.keys().copied()
    }
}

impl ExportUsage for UsageTable {
    fn used_name(&self, module: ModuleKey, name: &str) -> UsedName {
        self.modules
            .get(&module)
            .and_then(|names| names.get(name))
            .cloned()
            .unwrap_or(UsedName::Unused)
    }
}
