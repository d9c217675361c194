use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// CSS processing configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct CssLoaderOptions {
    pub source_map: bool,
}

/// PostCSS stage; carries the optimization sub-steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PostCssLoaderOptions {
    #[serde(default = "default_postcss_ident")]
    pub ident: String,

    #[serde(default)]
    pub source_map: bool,

    #[serde(default)]
    pub plugins: Vec<PostCssPlugin>,
}

impl PostCssLoaderOptions {
    /// Whether any plugin in the chain minifies its output
    pub fn minifies(&self) -> bool {
        self.plugins.iter().any(PostCssPlugin::is_minifier)
    }
}

impl Default for PostCssLoaderOptions {
    fn default() -> Self {
        Self {
            ident: default_postcss_ident(),
            source_map: false,
            plugins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum PostCssPlugin {
    /// Vendor prefixing
    Autoprefixer,
    /// Minification
    Cssnano {
        #[serde(default)]
        preset: CssnanoPreset,
    },
}

impl PostCssPlugin {
    pub fn is_minifier(&self) -> bool {
        matches!(self, Self::Cssnano { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CssnanoPreset {
    #[serde(default = "default_cssnano_preset")]
    pub name: String,

    /// Selector minification rewrites selectors the templates rely on
    #[serde(default)]
    pub minify_selectors: bool,
}

impl Default for CssnanoPreset {
    fn default() -> Self {
        Self {
            name: default_cssnano_preset(),
            minify_selectors: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SassLoaderOptions {
    pub output_style: SassOutputStyle,
    pub source_map: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SassOutputStyle {
    #[default]
    Expanded,
    Compressed,
}

/// Prefixing and minification only run for release builds.
pub(crate) fn postcss_plugins(mode: BuildMode) -> Vec<PostCssPlugin> {
    match mode {
        BuildMode::Production => vec![
            PostCssPlugin::Autoprefixer,
            PostCssPlugin::Cssnano {
                preset: CssnanoPreset::default(),
            },
        ],
        BuildMode::Development => Vec::new(),
    }
}

fn default_postcss_ident() -> String {
    "postcss".to_string()
}

fn default_cssnano_preset() -> String {
    "default".to_string()
}
