// Preserved modules
//
// Modules that must stay addressable by name, with the explicit name hint
// found for each of them.

use indexmap::IndexMap;

use crate::graph::{ModuleGraph, ModuleKey, PreserveTag};
use crate::path::remove_loaders;

/// Side table of preserved modules, in graph order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreserveState {
    hints: IndexMap<ModuleKey, Option<String>>,
}

impl PreserveState {
    /// Collect every live module that carries a preserve tag, either on
    /// itself or on the original module of its merge group, or that is the
    /// target of at least one preserving edge.
    ///
    /// The first preserving edge whose request (loaders stripped) is not
    /// relative becomes the module's hint. Without one, a tag naming the
    /// module explicitly is used.
    pub fn collect(graph: &ModuleGraph) -> Self {
        let mut hints = IndexMap::new();

        for (key, module) in graph.modules() {
            let real = graph.module(graph.real_module(key));
            let tag = module.preserve.as_ref().or(real.preserve.as_ref());

            let mut preserved = tag.is_some();
            let mut hint = None;
            for edge in graph.incoming_edges(key).filter(|e| e.preserve) {
                preserved = true;
                if hint.is_some() {
                    continue;
                }
                let request = remove_loaders(&edge.request);
                if !request.is_empty() && !request.starts_with('.') {
                    hint = Some(request.to_string());
                }
            }

            if !preserved {
                continue;
            }

            let hint = hint.or_else(|| match tag {
                Some(PreserveTag::Name(name)) if !name.is_empty() => Some(name.clone()),
                _ => None,
            });
            hints.insert(key, hint);
        }

        Self { hints }
    }

    pub fn contains(&self, key: ModuleKey) -> bool {
        self.hints.contains_key(&key)
    }

    pub fn hint(&self, key: ModuleKey) -> Option<&str> {
        self.hints.get(&key).and_then(|h| h.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModuleKey, Option<&str>)> + '_ {
        self.hints.iter().map(|(key, hint)| (*key, hint.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}
