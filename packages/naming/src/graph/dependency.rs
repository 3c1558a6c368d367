use indexmap::IndexSet;

use super::module::ModuleKey;

/// A reference from a consumer module to one of its dependencies.
///
/// `preserve` and `imported_names` are annotations set by the convention
/// pass that created the dependency; the naming plugins only read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Consumer. `None` for entry dependencies.
    pub origin: Option<ModuleKey>,
    pub module: ModuleKey,
    /// Request as written, loader prefixes included.
    pub request: String,
    /// The dependency must be reachable at runtime by name.
    pub preserve: bool,
    /// Exports accessed only through dynamic lookup.
    pub imported_names: Option<IndexSet<String>>,
}

impl DependencyEdge {
    pub fn new(origin: Option<ModuleKey>, module: ModuleKey, request: impl Into<String>) -> Self {
        Self {
            origin,
            module,
            request: request.into(),
            preserve: false,
            imported_names: None,
        }
    }

    pub fn preserved(mut self) -> Self {
        self.preserve = true;
        self
    }

    pub fn with_imported_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imported_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}
