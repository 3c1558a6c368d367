use indexmap::IndexMap;
use smallvec::SmallVec;

use super::dependency::DependencyEdge;
use super::module::{MergedGroup, Module, ModuleKey};

/// Ordered module arena with an incoming-edge index and the output id table.
///
/// Iteration order is insertion order everywhere; naming relies on it being
/// stable for a given build.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    modules: Vec<Module>,
    edges: Vec<DependencyEdge>,
    /// Edge indices per target module.
    incoming: Vec<SmallVec<[usize; 4]>>,
    ids: IndexMap<ModuleKey, String>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, module: Module) -> ModuleKey {
        let key = ModuleKey(self.modules.len());
        self.modules.push(module);
        self.incoming.push(SmallVec::new());
        key
    }

    /// Register an edge. Both ends must be keys of this graph.
    pub fn add_dependency(&mut self, edge: DependencyEdge) -> usize {
        let index = self.edges.len();
        self.incoming[edge.module.0].push(index);
        self.edges.push(edge);
        index
    }

    pub fn module(&self, key: ModuleKey) -> &Module {
        &self.modules[key.0]
    }

    pub fn module_mut(&mut self, key: ModuleKey) -> &mut Module {
        &mut self.modules[key.0]
    }

    pub fn get(&self, key: ModuleKey) -> Option<&Module> {
        self.modules.get(key.0)
    }

    /// Look a module up by its host identifier.
    pub fn find(&self, identifier: &str) -> Option<ModuleKey> {
        self.modules
            .iter()
            .position(|m| m.identifier == identifier)
            .map(ModuleKey)
    }

    /// Modules currently in the build, i.e. not absorbed by a merge.
    pub fn modules(&self) -> impl Iterator<Item = (ModuleKey, &Module)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, m)| m.merged_into.is_none())
            .map(|(i, m)| (ModuleKey(i), m))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn incoming_edges(&self, key: ModuleKey) -> impl Iterator<Item = &DependencyEdge> + '_ {
        self.incoming[key.0].iter().map(move |&i| &self.edges[i])
    }

    /// Replace `modules` by a single merge root built around `root`.
    ///
    /// Edges into `root` from outside the group now point at the new module;
    /// edges between members stay internal.
    pub fn merge_modules(
        &mut self,
        identifier: impl Into<String>,
        root: ModuleKey,
        modules: Vec<ModuleKey>,
    ) -> ModuleKey {
        let mut outer = Module::new(identifier);
        outer.build_meta = self.module(root).build_meta.clone();
        outer.merged = Some(MergedGroup {
            root,
            modules: modules.clone(),
        });
        let key = self.add_module(outer);

        for &member in &modules {
            self.modules[member.0].merged_into = Some(key);
        }

        let retargeted: Vec<usize> = self.incoming[root.0]
            .iter()
            .copied()
            .filter(|&i| match self.edges[i].origin {
                Some(origin) => !modules.contains(&origin),
                None => true,
            })
            .collect();
        for i in retargeted {
            self.edges[i].module = key;
            self.incoming[root.0].retain(|e| *e != i);
            self.incoming[key.0].push(i);
        }

        key
    }

    /// The module whose source drives naming: the original root for a merge
    /// root, the module itself otherwise.
    pub fn real_module(&self, key: ModuleKey) -> ModuleKey {
        let mut current = key;
        while let Some(group) = &self.module(current).merged {
            if group.root == current {
                break;
            }
            current = group.root;
        }
        current
    }

    /// The flat module list as it was before merging: every merge root is
    /// replaced in place by the modules it absorbed.
    pub fn modules_before_merge(&self) -> Vec<ModuleKey> {
        let mut flat = Vec::with_capacity(self.modules.len());
        for (key, _) in self.modules() {
            self.flatten_into(key, &mut flat);
        }
        flat
    }

    fn flatten_into(&self, key: ModuleKey, out: &mut Vec<ModuleKey>) {
        match &self.module(key).merged {
            Some(group) => {
                for &member in &group.modules {
                    if member != key {
                        self.flatten_into(member, out);
                    }
                }
            }
            None => out.push(key),
        }
    }

    /// Register the output id of a module.
    pub fn set_module_id(&mut self, key: ModuleKey, id: impl Into<String>) {
        self.ids.insert(key, id.into());
    }

    pub fn module_id(&self, key: ModuleKey) -> Option<&str> {
        self.ids.get(&key).map(String::as_str)
    }

    pub fn module_ids(&self) -> &IndexMap<ModuleKey, String> {
        &self.ids
    }
}
