// Export Override Registry
//
// Per-module sets of export names that must survive under their own name,
// and the usage layer that enforces them.

use indexmap::{IndexMap, IndexSet};

use crate::graph::ModuleKey;

use super::usage::{ExportUsage, UsedName};

/// Session-wide side table of forced exports.
///
/// A module's set is created on first use and only ever grows.
#[derive(Debug, Clone, Default)]
pub struct ExportOverrideRegistry {
    sets: IndexMap<ModuleKey, IndexSet<String>>,
}

impl ExportOverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The override set of `module`, created empty if needed.
    pub fn override_set_mut(&mut self, module: ModuleKey) -> &mut IndexSet<String> {
        self.sets.entry(module).or_default()
    }

    /// Force every name in `names` to be kept for `module`.
    pub fn add_names<I, S>(&mut self, module: ModuleKey, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.override_set_mut(module)
            .extend(names.into_iter().map(Into::into));
    }

    pub fn override_set(&self, module: ModuleKey) -> Option<&IndexSet<String>> {
        self.sets.get(&module)
    }

    pub fn is_overridden(&self, module: ModuleKey, name: &str) -> bool {
        self.sets
            .get(&module)
            .is_some_and(|set| set.contains(name))
    }

    pub fn modules(&self) -> impl Iterator<Item = ModuleKey> + '_ {
        self.sets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Layer the registry over a usage analysis.
    pub fn layer<'a, U: ExportUsage + ?Sized>(&'a self, default: &'a U) -> OverriddenUsage<'a, U> {
        OverriddenUsage {
            registry: self,
            default,
        }
    }
}

/// Usage analysis with forced exports: a forced name is used and keeps its
/// name, anything else gets exactly the default answer.
pub struct OverriddenUsage<'a, U: ExportUsage + ?Sized> {
    registry: &'a ExportOverrideRegistry,
    default: &'a U,
}

impl<U: ExportUsage + ?Sized> ExportUsage for OverriddenUsage<'_, U> {
    fn used_name(&self, module: ModuleKey, name: &str) -> UsedName {
        if self.registry.is_overridden(module, name) {
            UsedName::Used(name.to_string())
        } else {
            self.default.used_name(module, name)
        }
    }
}
