// Naming strategies
//
// Each strategy tries to derive an id for one module. The resolver runs
// them in order and keeps the first id produced.

use crate::graph::Module;
use crate::logging::Logger;
use crate::path::{
    dirname, extract_package_name, is_in_package_folder, is_upward, normalize_separators,
    relative, remove_loaders, resolve,
};

use super::error::IdentityError;

/// Everything a strategy may look at for one module.
pub struct NamingContext<'a> {
    /// The module whose source drives naming (the original root of a merge
    /// group, or the module itself).
    pub module: &'a Module,
    /// Explicit name found by the preserve pass.
    pub hint: Option<&'a str>,
    /// Flat module list as it was before merging.
    pub modules_before_merge: &'a [&'a Module],
    pub logger: &'a dyn Logger,
}

impl NamingContext<'_> {
    /// Request for error messages: the raw request, or the identifier when
    /// the module has none.
    pub fn display_request(&self) -> String {
        self.module
            .raw_request
            .clone()
            .unwrap_or_else(|| self.module.identifier.clone())
    }
}

/// Strategy for deriving a module id.
pub trait IdStrategy {
    fn name(&self) -> &'static str;

    /// `Ok(None)` lets the next strategy try; an error aborts naming of this
    /// module.
    fn compute(&self, ctx: &NamingContext<'_>) -> Result<Option<String>, IdentityError>;
}

/// Strategy: the name hint from the preserve pass, verbatim.
#[derive(Debug, Default)]
pub struct ExplicitHintStrategy;

impl IdStrategy for ExplicitHintStrategy {
    fn name(&self) -> &'static str {
        "explicit"
    }

    fn compute(&self, ctx: &NamingContext<'_>) -> Result<Option<String>, IdentityError> {
        Ok(ctx.hint.map(str::to_string))
    }
}

/// Strategy: name modules installed as packages after the package, plus
/// their path inside it.
///
/// The package root is not necessarily `node_modules/<name>` (entry fields
/// and aliases can move it), so it is inferred from the module that was
/// requested by the bare package name.
#[derive(Debug, Default)]
pub struct PackageBoundaryStrategy;

impl PackageBoundaryStrategy {
    fn package_id(name: &str, root: &str, resource: &str) -> Option<String> {
        relative(root, resource).map(|rel| format!("{}/{}", name, rel))
    }

    fn request_of(module: &Module) -> Option<&str> {
        module.raw_request.as_deref().map(remove_loaders)
    }
}

impl IdStrategy for PackageBoundaryStrategy {
    fn name(&self) -> &'static str {
        "package"
    }

    fn compute(&self, ctx: &NamingContext<'_>) -> Result<Option<String>, IdentityError> {
        let Some(resource) = ctx.module.resource.as_deref() else {
            return Ok(None);
        };
        if !is_in_package_folder(resource) {
            return Ok(None);
        }

        // A bare request already is the best name.
        if let Some(request) = Self::request_of(ctx.module) {
            if !request.is_empty() && !request.starts_with('.') {
                return Ok(Some(request.to_string()));
            }
        }

        let Some(name) = extract_package_name(resource) else {
            let diagnostic = IdentityError::UnextractablePackageName {
                resource: resource.to_string(),
            };
            ctx.logger.warn(&diagnostic.to_string());
            return Ok(None);
        };

        // The package entry, requested by its bare name.
        let entry = ctx.modules_before_merge.iter().find_map(|m| {
            let entry_resource = m.resource.as_deref()?;
            (Self::request_of(m)? == name).then_some(entry_resource)
        });
        if let Some(entry_resource) = entry {
            if let Some(id) = Self::package_id(&name, &dirname(entry_resource), resource) {
                return Ok(Some(id));
            }
        }

        // A deep request into the package (`name/sub/file`): its tail lines
        // up with the end of its resource, what precedes is the root.
        for m in ctx.modules_before_merge {
            let (Some(request), Some(other)) = (Self::request_of(m), m.resource.as_deref()) else {
                continue;
            };
            if request.is_empty() || !request.starts_with(name.as_str()) {
                continue;
            }
            let tail = &request[name.len()..];
            let Some(i) = normalize_separators(other).rfind(tail) else {
                continue;
            };
            if let Some(id) = Self::package_id(&name, &other[..i], resource) {
                return Ok(Some(id));
            }
        }

        Err(IdentityError::PackageRootNotFound {
            package: name,
            request: ctx.display_request(),
        })
    }
}

/// Strategy: path relative to the first configured root containing the
/// module.
#[derive(Debug, Default)]
pub struct RootRelativeStrategy {
    roots: Vec<String>,
}

impl RootRelativeStrategy {
    pub fn new<S: AsRef<str>>(roots: &[S]) -> Self {
        Self {
            roots: roots.iter().map(|r| resolve(r.as_ref())).collect(),
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }
}

impl IdStrategy for RootRelativeStrategy {
    fn name(&self) -> &'static str {
        "root"
    }

    fn compute(&self, ctx: &NamingContext<'_>) -> Result<Option<String>, IdentityError> {
        let Some(resource) = ctx.module.resource.as_deref() else {
            return Ok(None);
        };
        Ok(self
            .roots
            .iter()
            .filter_map(|root| relative(root, resource))
            .find(|rel| !is_upward(rel)))
    }
}

/// Strategy: alias name plus the path relative to the first alias target
/// containing the module.
///
/// Only folder aliases map back cleanly; `"mod$": "src/index.js"` next to
/// `"mod": "src"` names the folder's default file `mod`.
#[derive(Debug, Default)]
pub struct AliasRelativeStrategy {
    aliases: Vec<(String, String)>,
}

impl AliasRelativeStrategy {
    /// `aliases` are `(name, target)` pairs with plain path targets.
    pub fn new<N: AsRef<str>, T: AsRef<str>>(aliases: &[(N, T)]) -> Self {
        Self {
            aliases: aliases
                .iter()
                .map(|(name, target)| (name.as_ref().to_string(), resolve(target.as_ref())))
                .collect(),
        }
    }
}

impl IdStrategy for AliasRelativeStrategy {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn compute(&self, ctx: &NamingContext<'_>) -> Result<Option<String>, IdentityError> {
        let Some(resource) = ctx.module.resource.as_deref() else {
            return Ok(None);
        };
        for (name, target) in &self.aliases {
            let Some(rel) = relative(target, resource) else {
                continue;
            };
            if is_upward(&rel) {
                continue;
            }
            // trailing `$` marks an exact-match alias
            let name = name.strip_suffix('$').unwrap_or(name);
            return Ok(Some(if rel.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", name, rel)
            }));
        }
        Ok(None)
    }
}
