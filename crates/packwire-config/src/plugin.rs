//! Post-processing plugin descriptors and the mode-filtered catalog.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::overrides::Overrides;
use crate::rules::parse_options;

/// Emitted stylesheet naming template.
pub const STYLE_FILENAME_TEMPLATE: &str = "styles/[name].css";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PluginKind {
    #[serde(rename = "mini-css-extract-plugin")]
    ExtractCss,
    #[serde(rename = "html-webpack-plugin")]
    Html,
    #[serde(rename = "webpackbar")]
    Progress,
    #[serde(rename = "clean-webpack-plugin")]
    Clean,
    #[serde(rename = "copy-webpack-plugin")]
    Copy,
    #[serde(rename = "browser-sync-webpack-plugin")]
    LiveReload,
}

impl PluginKind {
    pub const ALL: [PluginKind; 6] = [
        PluginKind::ExtractCss,
        PluginKind::Html,
        PluginKind::Progress,
        PluginKind::Clean,
        PluginKind::Copy,
        PluginKind::LiveReload,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ExtractCss => "mini-css-extract-plugin",
            Self::Html => "html-webpack-plugin",
            Self::Progress => "webpackbar",
            Self::Clean => "clean-webpack-plugin",
            Self::Copy => "copy-webpack-plugin",
            Self::LiveReload => "browser-sync-webpack-plugin",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PluginKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownPlugin(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PluginOptions {
    ExtractCss(ExtractCssPluginOptions),
    Html(HtmlPluginOptions),
    Progress(ProgressPluginOptions),
    Clean(CleanPluginOptions),
    Copy(CopyPluginOptions),
    LiveReload(LiveReloadPluginOptions),
}

impl PluginOptions {
    pub fn kind(&self) -> PluginKind {
        match self {
            Self::ExtractCss(_) => PluginKind::ExtractCss,
            Self::Html(_) => PluginKind::Html,
            Self::Progress(_) => PluginKind::Progress,
            Self::Clean(_) => PluginKind::Clean,
            Self::Copy(_) => PluginKind::Copy,
            Self::LiveReload(_) => PluginKind::LiveReload,
        }
    }
}

/// A post-processing hook applied to the whole build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    name: PluginKind,
    options: PluginOptions,
    applies_in: BTreeSet<BuildMode>,
}

impl PluginDescriptor {
    pub fn new(options: PluginOptions, applies_in: impl IntoIterator<Item = BuildMode>) -> Self {
        Self {
            name: options.kind(),
            options,
            applies_in: applies_in.into_iter().collect(),
        }
    }

    /// Descriptor active in every mode
    pub fn always(options: PluginOptions) -> Self {
        Self::new(options, BuildMode::ALL)
    }

    /// Build a descriptor from an untyped plugin name and options object.
    pub fn from_value(
        name: &str,
        options: Value,
        applies_in: impl IntoIterator<Item = BuildMode>,
    ) -> Result<Self> {
        let kind: PluginKind = name.parse()?;
        let options = if options.is_null() {
            Value::Object(Default::default())
        } else {
            options
        };

        let options = match kind {
            PluginKind::ExtractCss => PluginOptions::ExtractCss(parse_options(name, options)?),
            PluginKind::Html => PluginOptions::Html(parse_options(name, options)?),
            PluginKind::Progress => PluginOptions::Progress(parse_options(name, options)?),
            PluginKind::Clean => PluginOptions::Clean(parse_options(name, options)?),
            PluginKind::Copy => PluginOptions::Copy(parse_options(name, options)?),
            PluginKind::LiveReload => PluginOptions::LiveReload(parse_options(name, options)?),
        };
        Ok(Self::new(options, applies_in))
    }

    pub fn kind(&self) -> PluginKind {
        self.name
    }

    pub fn name(&self) -> &'static str {
        self.name.name()
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn options_map(&self) -> IndexMap<String, Value> {
        match serde_json::to_value(&self.options) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            _ => IndexMap::new(),
        }
    }

    pub fn applies_in(&self) -> &BTreeSet<BuildMode> {
        &self.applies_in
    }

    pub fn applies_to(&self, mode: BuildMode) -> bool {
        self.applies_in.contains(&mode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractCssPluginOptions {
    pub filename: String,
}

impl Default for ExtractCssPluginOptions {
    fn default() -> Self {
        Self {
            filename: STYLE_FILENAME_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HtmlPluginOptions {
    /// Template, relative to the build context
    pub template: String,
    pub filename: String,
    #[serde(default)]
    pub minify: HtmlMinifyOptions,
}

impl Default for HtmlPluginOptions {
    fn default() -> Self {
        Self {
            template: "index.html".to_string(),
            filename: "index.html".to_string(),
            minify: HtmlMinifyOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
    pub remove_script_type_attributes: bool,
    pub remove_style_link_type_attributes: bool,
}

impl Default for HtmlMinifyOptions {
    fn default() -> Self {
        Self {
            remove_script_type_attributes: true,
            remove_style_link_type_attributes: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressPluginOptions {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanPluginOptions {
    /// Directories removed before a build, relative to the root
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyPluginOptions {
    pub patterns: Vec<CopyPattern>,
}

impl Default for CopyPluginOptions {
    fn default() -> Self {
        Self {
            patterns: vec![CopyPattern::same("favicon"), CopyPattern::same("images")],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyPattern {
    /// Source, relative to the build context
    pub from: PathBuf,
    /// Destination, relative to the output directory
    pub to: PathBuf,
}

impl CopyPattern {
    pub fn same(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            from: dir.clone(),
            to: dir,
        }
    }
}

/// Browser-sync proxy in front of the dev server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiveReloadPluginOptions {
    pub host: String,
    pub port: u16,
    /// Dev server URL being proxied
    pub proxy: String,
    /// Full page reload on rebuild; off so injected CSS updates in place
    #[serde(default)]
    pub reload: bool,
}

/// Every plugin the build knows about, each tagged with the modes it runs in.
pub(crate) fn catalog(overrides: &Overrides) -> Vec<PluginDescriptor> {
    vec![
        PluginDescriptor::always(PluginOptions::ExtractCss(ExtractCssPluginOptions::default())),
        PluginDescriptor::always(PluginOptions::Html(HtmlPluginOptions::default())),
        PluginDescriptor::always(PluginOptions::Progress(ProgressPluginOptions {
            color: overrides.progress_color.clone(),
        })),
        PluginDescriptor::new(
            PluginOptions::Clean(CleanPluginOptions {
                paths: vec![overrides.output_dir.clone()],
            }),
            [BuildMode::Production],
        ),
        PluginDescriptor::new(
            PluginOptions::Copy(CopyPluginOptions::default()),
            [BuildMode::Production],
        ),
        PluginDescriptor::new(
            PluginOptions::LiveReload(LiveReloadPluginOptions {
                host: overrides.live_reload_host.clone(),
                port: overrides.live_reload_port,
                proxy: overrides.dev_server_url(),
                reload: false,
            }),
            [BuildMode::Development],
        ),
    ]
}
