// Preserve Module Name Plugin
//
// Gives modules that are loaded by name at runtime an id the loader can
// request, instead of the bundler's numeric id.

use crate::compilation::{Compilation, CompilationError, CompilationPlugin};
use crate::config::RunMode;

use super::resolver::{commit_module_ids, find_duplicate_ids, resolve_module_ids, ModuleIdResolver};

/// Names preserved modules right before the bundler assigns module ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveModuleNamePlugin {
    run_mode: RunMode,
}

impl PreserveModuleNamePlugin {
    pub fn new(run_mode: RunMode) -> Self {
        Self { run_mode }
    }

    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }
}

impl CompilationPlugin for PreserveModuleNamePlugin {
    fn name(&self) -> &str {
        "PreserveModuleNamePlugin"
    }

    fn before_module_ids(&self, compilation: &mut Compilation) -> Result<(), CompilationError> {
        let resolver = ModuleIdResolver::new(&compilation.options)?;
        let logger = compilation.logger.as_ref();

        let outcomes = resolve_module_ids(&compilation.graph, &resolver, logger);
        let committed = commit_module_ids(&mut compilation.graph, outcomes, self.run_mode, logger)?;
        logger.info(&format!("named {} preserved modules", committed));

        for (id, modules) in find_duplicate_ids(&compilation.graph) {
            let identifiers: Vec<&str> = modules
                .iter()
                .map(|&key| compilation.graph.module(key).identifier.as_str())
                .collect();
            logger.warn(&format!(
                "id {} is shared by {} modules: {}",
                id,
                modules.len(),
                identifiers.join(", ")
            ));
        }
        Ok(())
    }
}
