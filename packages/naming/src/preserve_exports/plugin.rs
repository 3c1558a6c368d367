// Preserve Exports Plugin
//
// Exports that are only reached through string lookups are invisible to
// usage analysis; dependencies carrying `imported_names` force them.

use crate::compilation::{Compilation, CompilationError, CompilationPlugin};
use crate::graph::ModuleGraph;
use crate::logging::Logger;

use super::registry::ExportOverrideRegistry;

/// Record every dynamically imported name on the module it is imported from.
///
/// Returns the number of modules with an override set afterwards.
pub fn collect_export_overrides(
    graph: &ModuleGraph,
    registry: &mut ExportOverrideRegistry,
    logger: &dyn Logger,
) -> usize {
    for (key, module) in graph.modules() {
        for edge in graph.incoming_edges(key) {
            let Some(names) = edge.imported_names.as_ref().filter(|n| !n.is_empty()) else {
                continue;
            };
            registry.add_names(key, names.iter().cloned());
            logger.debug(&format!(
                "{} keeps {} for {}",
                module.identifier,
                names.iter().cloned().collect::<Vec<_>>().join(", "),
                edge.request
            ));
        }
    }
    registry.len()
}

/// Forces dynamically imported exports to stay, once all modules are built.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveExportsPlugin;

impl PreserveExportsPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl CompilationPlugin for PreserveExportsPlugin {
    fn name(&self) -> &str {
        "PreserveExportsPlugin"
    }

    fn finish_modules(&self, compilation: &mut Compilation) -> Result<(), CompilationError> {
        let logger = compilation.logger.as_ref();
        let count =
            collect_export_overrides(&compilation.graph, &mut compilation.export_overrides, logger);
        logger.info(&format!("{} modules have preserved exports", count));
        Ok(())
    }
}
