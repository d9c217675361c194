//! The resolved build configuration handed to the external bundler.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::dev::DevServerSpec;
use crate::entry::EntryGroup;
use crate::error::Result;
use crate::mode::BuildMode;
use crate::output::{OutputSpec, ResolveSpec};
use crate::plugin::{PluginDescriptor, PluginKind};
use crate::rules::{AssetCategory, AssetRule};

/// Source-map generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceMapStrategy {
    /// No source maps
    #[serde(rename = "none")]
    None,
    /// Full, separate source maps
    #[serde(rename = "source-map")]
    SourceMap,
}

impl SourceMapStrategy {
    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Production => Self::None,
            BuildMode::Development => Self::SourceMap,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SourceMap => "source-map",
        }
    }
}

impl fmt::Display for SourceMapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved, mode-specific build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: BuildMode,

    /// Base directory entry sources are resolved against
    pub context: PathBuf,

    pub entries: Vec<EntryGroup>,

    pub output: OutputSpec,

    /// Asset rules in precedence order
    pub rules: Vec<AssetRule>,

    /// Plugins active in `mode`, in application order
    pub plugins: Vec<PluginDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSpec>,

    #[serde(rename = "devtool")]
    pub source_maps: SourceMapStrategy,

    pub resolve: ResolveSpec,
}

impl BuildConfig {
    pub fn entry(&self, name: &str) -> Option<&EntryGroup> {
        self.entries.iter().find(|group| group.name == name)
    }

    pub fn rule(&self, category: AssetCategory) -> Option<&AssetRule> {
        self.rules.iter().find(|rule| rule.category == category)
    }

    /// First rule that claims `path`; later rules never see a claimed file.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::{assemble, AssetCategory, BuildMode};
    ///
    /// let config = assemble(BuildMode::Production, "/repo");
    /// let rule = config.rule_for("icons/logo.svg").unwrap();
    /// assert_eq!(rule.category, AssetCategory::Fonts);
    /// ```
    pub fn rule_for(&self, path: &str) -> Option<&AssetRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn plugin(&self, kind: PluginKind) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|plugin| plugin.kind() == kind)
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugin(kind).is_some()
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
