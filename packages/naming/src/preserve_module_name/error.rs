//! Module naming errors

use std::fmt;

use crate::graph::ModuleKey;

/// Why a preserved module could not be named.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// No strategy produced an id.
    #[error("Can't figure out a normalized module name for {request}, please mark it explicitly with a module name")]
    UnresolvableIdentity { request: String },

    /// The module is inside a package folder but no package name follows the
    /// folder. Logged at warn; naming falls through to the next strategy.
    #[error("Unable to extract a package name from {resource}, naming it without its package")]
    UnextractablePackageName { resource: String },

    /// The module is inside a package folder but the package entry could not
    /// be located among the built modules.
    #[error("Unable to find root of package {package} (while naming {request})")]
    PackageRootNotFound { package: String, request: String },
}

/// Invalid naming configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid extension {extension:?}: {source}")]
    InvalidExtension {
        extension: String,
        #[source]
        source: regex::Error,
    },
}

/// A single module that failed to be named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFailure {
    pub module: ModuleKey,
    pub identifier: String,
    pub error: IdentityError,
}

/// Failure of the naming phase.
///
/// Every preserved module is resolved before anything is committed; ids are
/// then committed in module order up to the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseError {
    /// All failures, in module order. Never empty.
    pub failures: Vec<ModuleFailure>,
    /// Modules named before the first failure.
    pub committed: usize,
}

impl PhaseError {
    pub fn first(&self) -> &ModuleFailure {
        &self.failures[0]
    }
}

impl fmt::Display for PhaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first().error)?;
        if self.failures.len() > 1 {
            write!(f, " (and {} more unnamed modules)", self.failures.len() - 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for PhaseError {}
