#![deny(clippy::all)]

/**
 * Module Naming - stable module ids and preserved exports for bundled builds
 *
 * Keeps modules addressable by a logical name after bundling, so a runtime
 * loader can still `require` them by string, and keeps dynamically imported
 * exports alive through tree-shaking and mangling.
 */
pub mod compilation;
pub mod config;
pub mod graph;
pub mod logging;
pub mod path;
pub mod preserve_exports;
pub mod preserve_module_name;

pub use compilation::{Compilation, CompilationError, CompilationPlugin, Compiler};
pub use config::{AliasOption, AliasTarget, ResolveOptions, RunMode};
pub use graph::{BuildMeta, DependencyEdge, Module, ModuleGraph, ModuleKey, PreserveTag};
pub use preserve_exports::{
    ExportOverrideRegistry, ExportUsage, OverriddenUsage, PreserveExportsPlugin, UsageTable,
    UsedName,
};
pub use preserve_module_name::{
    IdentityError, ModuleIdResolver, PhaseError, PreserveModuleNamePlugin, MODULE_NAME_KEY,
};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
