// Module Graph
//
// The host's view of the build: modules, dependency edges between them, and
// the output id table.

pub mod dependency;
pub mod module;
pub mod module_graph;

pub use dependency::DependencyEdge;
pub use module::{BuildMeta, MergedGroup, Module, ModuleKey, PreserveTag};
pub use module_graph::ModuleGraph;

#[cfg(test)]
mod test;
