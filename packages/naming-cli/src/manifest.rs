// Build manifest
//
// JSON description of a build as the host saw it: modules, dependencies,
// merge groups, resolve options and the usage analysis results.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use indexmap::IndexMap;
use serde::Deserialize;

use module_naming::{
    DependencyEdge, Module, ModuleGraph, ModuleKey, PreserveTag, ResolveOptions, RunMode,
    UsageTable, UsedName,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    #[serde(default)]
    pub resolve: ResolveOptions,
    /// Link-library build.
    #[serde(default)]
    pub dll: bool,
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
    /// Merge groups, applied after modules are finished.
    #[serde(default)]
    pub merged: Vec<MergeEntry>,
    /// Usage analysis per module identifier: export name to surviving name,
    /// `null` for unused exports.
    #[serde(default)]
    pub used_exports: IndexMap<String, IndexMap<String, Option<String>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEntry {
    pub identifier: String,
    pub raw_request: Option<String>,
    pub resource: Option<String>,
    /// `false` for modules that failed to build; they carry no metadata.
    #[serde(default = "default_built")]
    pub built: bool,
    pub preserve: Option<PreserveEntry>,
}

fn default_built() -> bool {
    true
}

/// `true` to preserve, or the exact name to preserve the module under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PreserveEntry {
    Flag(bool),
    Name(String),
}

impl PreserveEntry {
    fn tag(&self) -> Option<PreserveTag> {
        match self {
            PreserveEntry::Flag(true) => Some(PreserveTag::Flag),
            PreserveEntry::Flag(false) => None,
            PreserveEntry::Name(name) => Some(PreserveTag::Name(name.clone())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEntry {
    /// Consumer identifier, absent for entry dependencies.
    pub from: Option<String>,
    pub to: String,
    pub request: String,
    #[serde(default)]
    pub preserve: bool,
    /// Exports accessed by name only.
    pub imports: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeEntry {
    pub identifier: String,
    pub root: String,
    pub modules: Vec<String>,
}

impl BuildManifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid manifest {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let manifest: BuildManifest = serde_json::from_str(content)?;
        Ok(manifest)
    }

    pub fn run_mode(&self) -> RunMode {
        if self.dll {
            RunMode::Dll
        } else {
            RunMode::Normal
        }
    }

    /// The module graph before merging.
    pub fn graph(&self) -> anyhow::Result<ModuleGraph> {
        let mut graph = ModuleGraph::new();
        for entry in &self.modules {
            if graph.find(&entry.identifier).is_some() {
                bail!("duplicate module {}", entry.identifier);
            }
            let mut module = Module::new(entry.identifier.clone());
            module.raw_request = entry.raw_request.clone();
            module.resource = entry.resource.clone();
            module.preserve = entry.preserve.as_ref().and_then(PreserveEntry::tag);
            if !entry.built {
                module = module.without_build_meta();
            }
            graph.add_module(module);
        }

        for dep in &self.dependencies {
            let origin = dep
                .from
                .as_deref()
                .map(|from| lookup(&graph, from))
                .transpose()?;
            let mut edge = DependencyEdge::new(origin, lookup(&graph, &dep.to)?, dep.request.clone());
            edge.preserve = dep.preserve;
            if let Some(imports) = &dep.imports {
                edge = edge.with_imported_names(imports.iter().cloned());
            }
            graph.add_dependency(edge);
        }

        Ok(graph)
    }

    /// Apply the merge groups, in manifest order.
    pub fn apply_merges(&self, graph: &mut ModuleGraph) -> anyhow::Result<()> {
        for group in &self.merged {
            let root = lookup(graph, &group.root)?;
            let modules = group
                .modules
                .iter()
                .map(|id| lookup(graph, id))
                .collect::<anyhow::Result<Vec<_>>>()?;
            if !modules.contains(&root) {
                bail!("merge group {} does not contain its root {}", group.identifier, group.root);
            }
            graph.merge_modules(group.identifier.clone(), root, modules);
        }
        Ok(())
    }

    /// Usage analysis results keyed by module.
    pub fn usage_table(&self, graph: &ModuleGraph) -> anyhow::Result<UsageTable> {
        let mut table = UsageTable::new();
        for (identifier, exports) in &self.used_exports {
            let key = lookup(graph, identifier)?;
            for (name, used) in exports {
                let used = match used {
                    Some(name) => UsedName::Used(name.clone()),
                    None => UsedName::Unused,
                };
                table.set(key, name.clone(), used);
            }
        }
        Ok(table)
    }
}

fn lookup(graph: &ModuleGraph, identifier: &str) -> anyhow::Result<ModuleKey> {
    graph
        .find(identifier)
        .ok_or_else(|| anyhow!("unknown module {}", identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_minimal_manifest() {
        let manifest = BuildManifest::parse("{}").unwrap();
        assert!(manifest.modules.is_empty());
        assert_eq!(manifest.run_mode(), RunMode::Normal);
    }

    #[test]
    fn should_build_graph_with_tags() {
        let manifest = BuildManifest::parse(
            r#"{
                "dll": true,
                "modules": [
                    { "identifier": "a", "preserve": true },
                    { "identifier": "b", "preserve": "named-b", "built": false },
                    { "identifier": "c", "preserve": false }
                ],
                "dependencies": [
                    { "to": "a", "request": "./a" },
                    { "from": "a", "to": "b", "request": "./b", "preserve": true, "imports": ["x"] }
                ]
            }"#,
        )
        .unwrap();
        let graph = manifest.graph().unwrap();

        assert_eq!(manifest.run_mode(), RunMode::Dll);
        let a = graph.find("a").unwrap();
        let b = graph.find("b").unwrap();
        let c = graph.find("c").unwrap();
        assert_eq!(graph.module(a).preserve, Some(PreserveTag::Flag));
        assert_eq!(graph.module(b).preserve, Some(PreserveTag::Name("named-b".into())));
        assert_eq!(graph.module(c).preserve, None);
        assert!(graph.module(b).build_meta.is_none());

        let edge = graph.incoming_edges(b).next().unwrap();
        assert_eq!(edge.origin, Some(a));
        assert!(edge.preserve);
        assert!(edge.imported_names.as_ref().unwrap().contains("x"));
        assert_eq!(graph.incoming_edges(a).next().unwrap().origin, None);
    }

    #[test]
    fn should_reject_unknown_modules() {
        let manifest = BuildManifest::parse(
            r#"{ "modules": [{ "identifier": "a" }], "dependencies": [{ "to": "z", "request": "z" }] }"#,
        )
        .unwrap();
        let err = manifest.graph().unwrap_err();
        assert_eq!(err.to_string(), "unknown module z");
    }

    #[test]
    fn should_reject_merge_without_root() {
        let manifest = BuildManifest::parse(
            r#"{
                "modules": [{ "identifier": "a" }, { "identifier": "b" }],
                "merged": [{ "identifier": "a + 1", "root": "a", "modules": ["b"] }]
            }"#,
        )
        .unwrap();
        let mut graph = manifest.graph().unwrap();
        assert!(manifest.apply_merges(&mut graph).is_err());
    }
}
