//! Generation options.

use serde::Deserialize;

/// Caller-supplied configuration for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Namespace wrapping every emitted declaration.
    pub namespace: Option<String>,
    /// Extra import emitted in interface files.
    pub using: Option<String>,
}

impl GenerateOptions {
    /// Creates options with no namespace and no extra import.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the extra interface import.
    #[must_use]
    pub fn with_using(mut self, using: impl Into<String>) -> Self {
        self.using = Some(using.into());
        self
    }

    /// Returns the namespace, treating an empty string as absent.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// Returns the extra import, treating an empty string as absent.
    #[must_use]
    pub fn using(&self) -> Option<&str> {
        self.using.as_deref().filter(|u| !u.is_empty())
    }

    /// Returns the indentation prefix for declarations.
    #[must_use]
    pub fn indent(&self) -> &'static str {
        if self.namespace().is_some() { "\t" } else { "" }
    }
}
