#![deny(clippy::all)]

/**
 * Module Naming CLI - replays a build manifest through the naming plugins
 */
pub mod manifest;
pub mod report;

use std::rc::Rc;

use module_naming::logging::Logger;
use module_naming::{Compilation, Compiler, PreserveExportsPlugin, PreserveModuleNamePlugin, RunMode};

pub use manifest::BuildManifest;
pub use report::Report;

/// Run both naming phases over the build a manifest describes.
///
/// `run_mode` overrides the manifest's own `dll` flag when given. Merge
/// groups are applied between the two phases, as a bundler concatenating
/// modules would.
pub fn run(
    manifest: &BuildManifest,
    run_mode: Option<RunMode>,
    logger: Rc<dyn Logger>,
) -> anyhow::Result<Report> {
    let run_mode = run_mode.unwrap_or_else(|| manifest.run_mode());
    let compiler = Compiler::new()
        .with_plugin(Box::new(PreserveExportsPlugin::new()))
        .with_plugin(Box::new(PreserveModuleNamePlugin::new(run_mode)));

    let mut compilation =
        Compilation::new(manifest.graph()?, manifest.resolve.clone()).with_logger(logger);
    let table = manifest.usage_table(&compilation.graph)?;

    compiler.finish_modules(&mut compilation)?;
    manifest.apply_merges(&mut compilation.graph)?;
    compiler.before_module_ids(&mut compilation)?;

    Ok(Report::collect(&compilation, &table))
}

/// Same as [`run`], reading and writing JSON.
pub fn run_json(
    manifest_json: &str,
    run_mode: Option<RunMode>,
    logger: Rc<dyn Logger>,
) -> anyhow::Result<String> {
    let manifest = BuildManifest::parse(manifest_json)?;
    let report = run(&manifest, run_mode, logger)?;
    Ok(report.to_json()?)
}
