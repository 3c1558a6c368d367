use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `resolve` block of the build configuration, as far as module naming
/// is concerned. Field names follow the bundler's camelCase options.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Resolution roots, tried in order.
    #[serde(default)]
    pub modules: Vec<String>,
    /// Extensions stripped from computed ids.
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub alias: Option<AliasOption>,
}

/// Alias table. Only the object form maps to module names; the array form
/// is accepted and ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AliasOption {
    Map(IndexMap<String, AliasTarget>),
    List(Vec<serde_json::Value>),
}

/// Target of a single alias. Anything other than a plain path (arrays of
/// fallbacks, `false` to ignore a module) is not a simple folder mapping.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AliasTarget {
    Path(String),
    Other(serde_json::Value),
}

impl AliasTarget {
    pub fn as_path(&self) -> Option<&str> {
        match self {
            AliasTarget::Path(path) => Some(path),
            AliasTarget::Other(_) => None,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Append an alias, switching the table to object form if needed.
    pub fn with_alias(mut self, name: impl Into<String>, target: AliasTarget) -> Self {
        match &mut self.alias {
            Some(AliasOption::Map(map)) => {
                map.insert(name.into(), target);
            }
            _ => {
                let mut map = IndexMap::new();
                map.insert(name.into(), target);
                self.alias = Some(AliasOption::Map(map));
            }
        }
        self
    }

    /// Aliases with a plain path target, in configured order.
    pub fn path_aliases(&self) -> Vec<(&str, &str)> {
        match &self.alias {
            Some(AliasOption::Map(map)) => map
                .iter()
                .filter_map(|(name, target)| target.as_path().map(|path| (name.as_str(), path)))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// How the build output is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RunMode {
    #[default]
    Normal,
    /// Link-library build: ids are computed and stored on the module but not
    /// registered as the module's output id.
    Dll,
}
