// Plugin version token and the schema shape it selects

use serde::{Deserialize, Serialize};

pub const DEFAULT_PLUGIN_VERSION: &str = "7";
const MODERN_SCHEMA_THRESHOLD: &str = "7";

/// Which of the two panel layouts a version token selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// `options.fieldOptions` with nested `defaults`, no `fieldConfig`.
    Legacy,
    /// `options.reduceOptions` plus top-level `fieldConfig.defaults`.
    Modern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginVersion(String);

impl PluginVersion {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares the raw token against "7" as a string, not as a semver.
    /// "10" sorts before "7" and therefore selects the legacy layout.
    pub fn schema(&self) -> SchemaKind {
        if self.0.as_str() >= MODERN_SCHEMA_THRESHOLD {
            SchemaKind::Modern
        } else {
            SchemaKind::Legacy
        }
    }
}

impl Default for PluginVersion {
    fn default() -> Self {
        Self::new(DEFAULT_PLUGIN_VERSION)
    }
}

impl From<&str> for PluginVersion {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for PluginVersion {
    fn from(token: String) -> Self {
        Self(token)
    }
}
