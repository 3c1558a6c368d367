// Module Id Resolver
//
// Runs the naming strategies for each preserved module, normalizes the
// result and commits it to the graph.

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::config::{ResolveOptions, RunMode};
use crate::graph::{BuildMeta, Module, ModuleGraph, ModuleKey};
use crate::logging::Logger;
use crate::path::{has_async_marker, normalize_separators};

use super::error::{ConfigError, IdentityError, ModuleFailure, PhaseError};
use super::preserved::PreserveState;
use super::strategies::{
    AliasRelativeStrategy, ExplicitHintStrategy, IdStrategy, NamingContext,
    PackageBoundaryStrategy, RootRelativeStrategy,
};

/// Key under which the id is stored in a module's build metadata.
pub const MODULE_NAME_KEY: &str = "module-name";

/// Prefix kept on code-split proxies so the loader can tell them apart.
const ASYNC_PREFIX: &str = "async!";

/// Derives normalized ids from an ordered list of strategies.
pub struct ModuleIdResolver {
    strategies: Vec<Box<dyn IdStrategy>>,
    extensions: Vec<Regex>,
}

impl ModuleIdResolver {
    /// Default chain: explicit hint, package boundary, configured roots,
    /// then aliases.
    pub fn new(options: &ResolveOptions) -> Result<Self, ConfigError> {
        let strategies: Vec<Box<dyn IdStrategy>> = vec![
            Box::new(ExplicitHintStrategy),
            Box::new(PackageBoundaryStrategy),
            Box::new(RootRelativeStrategy::new(&options.modules)),
            Box::new(AliasRelativeStrategy::new(&options.path_aliases())),
        ];
        Self::with_strategies(strategies, &options.extensions)
    }

    pub fn with_strategies<S: AsRef<str>>(
        strategies: Vec<Box<dyn IdStrategy>>,
        extensions: &[S],
    ) -> Result<Self, ConfigError> {
        let extensions = extensions
            .iter()
            .map(|ext| {
                let ext = ext.as_ref();
                RegexBuilder::new(&format!("{}$", regex::escape(ext)))
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ConfigError::InvalidExtension {
                        extension: ext.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            strategies,
            extensions,
        })
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Normalized id for one module. Empty results count as no result.
    pub fn compute(&self, ctx: &NamingContext<'_>) -> Result<String, IdentityError> {
        for strategy in &self.strategies {
            let Some(id) = strategy.compute(ctx)?.filter(|id| !id.is_empty()) else {
                continue;
            };
            let id = self.normalize(id, ctx.module.raw_request.as_deref());
            if id.is_empty() {
                break;
            }
            ctx.logger
                .debug(&format!("{} named {} by {}", ctx.display_request(), id, strategy.name()));
            return Ok(id);
        }

        Err(IdentityError::UnresolvableIdentity {
            request: ctx.display_request(),
        })
    }

    /// Strip configured extensions (each at most once, in order), keep the
    /// `async!` marker of code-split proxies and use `/` separators only.
    pub fn normalize(&self, mut id: String, raw_request: Option<&str>) -> String {
        for extension in &self.extensions {
            id = extension.replace(&id, "").into_owned();
        }
        if raw_request.is_some_and(has_async_marker) {
            id = format!("{}{}", ASYNC_PREFIX, id);
        }
        normalize_separators(&id)
    }
}

/// Result of naming one preserved module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIdOutcome {
    pub module: ModuleKey,
    pub result: Result<String, IdentityError>,
}

/// Name every preserved module of the graph. Nothing is written.
pub fn resolve_module_ids(
    graph: &ModuleGraph,
    resolver: &ModuleIdResolver,
    logger: &dyn Logger,
) -> Vec<ModuleIdOutcome> {
    let state = PreserveState::collect(graph);
    let before_merge: Vec<&Module> = graph
        .modules_before_merge()
        .into_iter()
        .map(|key| graph.module(key))
        .collect();

    state
        .iter()
        .map(|(key, hint)| {
            let ctx = NamingContext {
                module: graph.module(graph.real_module(key)),
                hint,
                modules_before_merge: &before_merge,
                logger,
            };
            ModuleIdOutcome {
                module: key,
                result: resolver.compute(&ctx),
            }
        })
        .collect()
}

/// Write ids to the graph in module order, stopping at the first failure.
///
/// Returns the number of modules named. The computed id replaces any id the
/// host assigned earlier.
pub fn commit_module_ids(
    graph: &mut ModuleGraph,
    outcomes: Vec<ModuleIdOutcome>,
    run_mode: RunMode,
    logger: &dyn Logger,
) -> Result<usize, PhaseError> {
    let mut committed = 0;
    let mut failures = Vec::new();

    for outcome in outcomes {
        let id = match outcome.result {
            Ok(id) => id,
            Err(error) => {
                failures.push(ModuleFailure {
                    module: outcome.module,
                    identifier: graph.module(outcome.module).identifier.clone(),
                    error,
                });
                continue;
            }
        };
        if !failures.is_empty() {
            continue;
        }
        commit_module_id(graph, outcome.module, id, run_mode, logger);
        committed += 1;
    }

    if failures.is_empty() {
        Ok(committed)
    } else {
        Err(PhaseError {
            failures,
            committed,
        })
    }
}

fn commit_module_id(
    graph: &mut ModuleGraph,
    key: ModuleKey,
    id: String,
    run_mode: RunMode,
    logger: &dyn Logger,
) {
    let module = graph.module_mut(key);
    match module.build_meta.as_mut() {
        Some(meta) => meta.insert(MODULE_NAME_KEY, Value::String(id.clone())),
        // meta is missing when the module failed to build
        None => logger.debug(&format!("{} has no build meta", module.identifier)),
    }

    if run_mode != RunMode::Dll {
        if let Some(previous) = graph.module_id(key).filter(|previous| *previous != id) {
            logger.debug(&format!(
                "{} renamed from {} to {}",
                graph.module(key).identifier,
                previous,
                id
            ));
        }
        graph.set_module_id(key, id);
    }
}

/// Ids stored on more than one live module, with the modules sharing them.
///
/// Ids are not required to be unique; this only reports collisions.
pub fn find_duplicate_ids(graph: &ModuleGraph) -> Vec<(String, Vec<ModuleKey>)> {
    let mut by_id: IndexMap<&str, Vec<ModuleKey>> = IndexMap::new();
    for (key, module) in graph.modules() {
        let name = module
            .build_meta
            .as_ref()
            .and_then(BuildMeta::module_name)
            .or_else(|| graph.module_id(key));
        if let Some(name) = name {
            by_id.entry(name).or_default().push(key);
        }
    }
    by_id
        .into_iter()
        .filter(|(_, keys)| keys.len() > 1)
        .map(|(id, keys)| (id.to_string(), keys))
        .collect()
}
