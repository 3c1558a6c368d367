// Compilation
//
// One build session: the module graph, the resolve options and the state the
// plugins keep for the session, plus the two hook points they run at.

use std::rc::Rc;

use crate::config::ResolveOptions;
use crate::graph::ModuleGraph;
use crate::logging::{Logger, NullLogger};
use crate::preserve_exports::{ExportOverrideRegistry, ExportUsage, OverriddenUsage};
use crate::preserve_module_name::{ConfigError, PhaseError};

/// Error that aborts a compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompilationError {
    #[error(transparent)]
    ModuleNames(#[from] PhaseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A single build session.
pub struct Compilation {
    pub graph: ModuleGraph,
    pub options: ResolveOptions,
    /// Exports kept alive because they are only reached by name.
    pub export_overrides: ExportOverrideRegistry,
    pub logger: Rc<dyn Logger>,
}

impl Compilation {
    pub fn new(graph: ModuleGraph, options: ResolveOptions) -> Self {
        Self {
            graph,
            options,
            export_overrides: ExportOverrideRegistry::new(),
            logger: Rc::new(NullLogger::new()),
        }
    }

    pub fn with_logger(mut self, logger: Rc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Usage analysis as later optimization passes see it: overridden names
    /// first, `default` for everything else.
    pub fn export_usage<'a, U: ExportUsage + ?Sized>(
        &'a self,
        default: &'a U,
    ) -> OverriddenUsage<'a, U> {
        self.export_overrides.layer(default)
    }
}

/// A plugin hooked into the compilation phases naming cares about.
pub trait CompilationPlugin {
    fn name(&self) -> &str;

    /// All modules are built; optimization has not consulted usage yet.
    fn finish_modules(&self, _compilation: &mut Compilation) -> Result<(), CompilationError> {
        Ok(())
    }

    /// Module ids are about to be assigned.
    fn before_module_ids(&self, _compilation: &mut Compilation) -> Result<(), CompilationError> {
        Ok(())
    }
}

/// Runs registered plugins at each phase, in registration order.
#[derive(Default)]
pub struct Compiler {
    plugins: Vec<Box<dyn CompilationPlugin>>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugin(mut self, plugin: Box<dyn CompilationPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn finish_modules(&self, compilation: &mut Compilation) -> Result<(), CompilationError> {
        for plugin in &self.plugins {
            compilation
                .logger()
                .debug(&format!("{}: finish modules", plugin.name()));
            plugin.finish_modules(compilation)?;
        }
        Ok(())
    }

    pub fn before_module_ids(&self, compilation: &mut Compilation) -> Result<(), CompilationError> {
        for plugin in &self.plugins {
            compilation
                .logger()
                .debug(&format!("{}: before module ids", plugin.name()));
            plugin.before_module_ids(compilation)?;
        }
        Ok(())
    }

    /// Both phases, in build order. Hosts that merge modules do so between
    /// the two calls instead.
    pub fn seal(&self, compilation: &mut Compilation) -> Result<(), CompilationError> {
        self.finish_modules(compilation)?;
        self.before_module_ids(compilation)
    }
}
