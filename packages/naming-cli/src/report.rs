// Naming report
//
// What the build ends up with once both phases ran, keyed by module
// identifier so it can be compared across builds.

use indexmap::IndexMap;
use serde::Serialize;

use module_naming::{Compilation, ExportUsage, UsageTable};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Registered output ids.
    pub ids: IndexMap<String, String>,
    /// Ids stored in module metadata, registered or not.
    pub build_meta: IndexMap<String, String>,
    /// Exports forced to stay, per module.
    pub exports: IndexMap<String, Vec<String>>,
    /// Usage analysis after overrides, for every export the build knows of.
    pub used_names: IndexMap<String, IndexMap<String, Option<String>>>,
}

impl Report {
    pub fn collect(compilation: &Compilation, table: &UsageTable) -> Self {
        let graph = &compilation.graph;
        let identifier = |key| graph.module(key).identifier.clone();
        let mut report = Report::default();

        for (key, id) in graph.module_ids() {
            report.ids.insert(identifier(*key), id.clone());
        }

        for (_, module) in graph.modules() {
            if let Some(name) = module.build_meta.as_ref().and_then(|meta| meta.module_name()) {
                report.build_meta.insert(module.identifier.clone(), name.to_string());
            }
        }

        let overrides = &compilation.export_overrides;
        for key in overrides.modules() {
            if let Some(names) = overrides.override_set(key) {
                report
                    .exports
                    .insert(identifier(key), names.iter().cloned().collect());
            }
        }

        let usage = compilation.export_usage(table);
        let mut modules: Vec<_> = table.modules().collect();
        for key in overrides.modules() {
            if !modules.contains(&key) {
                modules.push(key);
            }
        }
        for key in modules {
            let mut names: Vec<&str> = table.names(key).collect();
            for name in overrides.override_set(key).into_iter().flatten() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            let used = names
                .into_iter()
                .map(|name| {
                    let used = usage.used_name(key, name);
                    (name.to_string(), used.name().map(str::to_string))
                })
                .collect();
            report.used_names.insert(identifier(key), used);
        }

        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
