// Preserve Module Name
//
// Stable, human-readable ids for modules that a runtime loader requests by
// name.

pub mod error;
pub mod plugin;
pub mod preserved;
pub mod resolver;
pub mod strategies;

pub use error::{ConfigError, IdentityError, ModuleFailure, PhaseError};
pub use plugin::PreserveModuleNamePlugin;
pub use preserved::PreserveState;
pub use resolver::{
    commit_module_ids, find_duplicate_ids, resolve_module_ids, ModuleIdOutcome,
    ModuleIdResolver, MODULE_NAME_KEY,
};
pub use strategies::{
    AliasRelativeStrategy, ExplicitHintStrategy, IdStrategy, NamingContext,
    PackageBoundaryStrategy, RootRelativeStrategy,
};
