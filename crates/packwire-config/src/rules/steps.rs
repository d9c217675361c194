//! Pipeline step descriptors and their loader names.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::rules::media::{FileLoaderOptions, ImageLoaderOptions};
use crate::rules::style::{CssLoaderOptions, PostCssLoaderOptions, SassLoaderOptions};

/// External transformer invoked by a pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Loader {
    #[serde(rename = "mini-css-extract-plugin/loader")]
    ExtractCss,
    #[serde(rename = "css-loader")]
    Css,
    #[serde(rename = "postcss-loader")]
    PostCss,
    #[serde(rename = "sass-loader")]
    Sass,
    #[serde(rename = "file-loader")]
    File,
    #[serde(rename = "babel-loader")]
    Babel,
    #[serde(rename = "image-webpack-loader")]
    ImageOptimizer,
    #[serde(rename = "html-loader")]
    Html,
}

impl Loader {
    pub const ALL: [Loader; 8] = [
        Loader::ExtractCss,
        Loader::Css,
        Loader::PostCss,
        Loader::Sass,
        Loader::File,
        Loader::Babel,
        Loader::ImageOptimizer,
        Loader::Html,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ExtractCss => "mini-css-extract-plugin/loader",
            Self::Css => "css-loader",
            Self::PostCss => "postcss-loader",
            Self::Sass => "sass-loader",
            Self::File => "file-loader",
            Self::Babel => "babel-loader",
            Self::ImageOptimizer => "image-webpack-loader",
            Self::Html => "html-loader",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Loader {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|loader| loader.name() == s)
            .ok_or_else(|| ConfigError::UnknownLoader(s.to_string()))
    }
}

/// Typed options for each loader; the key set per loader is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepOptions {
    ExtractCss(ExtractCssLoaderOptions),
    Css(CssLoaderOptions),
    PostCss(PostCssLoaderOptions),
    Sass(SassLoaderOptions),
    File(FileLoaderOptions),
    Babel(BabelLoaderOptions),
    ImageOptimizer(ImageLoaderOptions),
    Html(HtmlLoaderOptions),
}

impl StepOptions {
    pub fn loader(&self) -> Loader {
        match self {
            Self::ExtractCss(_) => Loader::ExtractCss,
            Self::Css(_) => Loader::Css,
            Self::PostCss(_) => Loader::PostCss,
            Self::Sass(_) => Loader::Sass,
            Self::File(_) => Loader::File,
            Self::Babel(_) => Loader::Babel,
            Self::ImageOptimizer(_) => Loader::ImageOptimizer,
            Self::Html(_) => Loader::Html,
        }
    }
}

macro_rules! step_options_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StepOptions {
                fn from(options: $ty) -> Self {
                    StepOptions::$variant(options)
                }
            }
        )*
    };
}

step_options_from! {
    ExtractCss => ExtractCssLoaderOptions,
    Css => CssLoaderOptions,
    PostCss => PostCssLoaderOptions,
    Sass => SassLoaderOptions,
    File => FileLoaderOptions,
    Babel => BabelLoaderOptions,
    ImageOptimizer => ImageLoaderOptions,
    Html => HtmlLoaderOptions,
}

/// One stage in an asset pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    loader: Loader,
    options: StepOptions,
}

impl StepDescriptor {
    pub fn new(options: impl Into<StepOptions>) -> Self {
        let options = options.into();
        Self {
            loader: options.loader(),
            options,
        }
    }

    /// Build a descriptor from an untyped loader name and options object.
    ///
    /// `null` options are treated as an empty object. Unknown loaders and
    /// unknown option keys are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::StepDescriptor;
    /// use serde_json::json;
    ///
    /// let step = StepDescriptor::from_value("css-loader", json!({ "sourceMap": true })).unwrap();
    /// assert_eq!(step.option("sourceMap"), Some(json!(true)));
    ///
    /// assert!(StepDescriptor::from_value("css-loader", json!({ "modules": true })).is_err());
    /// ```
    pub fn from_value(name: &str, options: Value) -> Result<Self> {
        let loader: Loader = name.parse()?;
        let options = if options.is_null() {
            Value::Object(Default::default())
        } else {
            options
        };

        let options = match loader {
            Loader::ExtractCss => StepOptions::ExtractCss(parse_options(name, options)?),
            Loader::Css => StepOptions::Css(parse_options(name, options)?),
            Loader::PostCss => StepOptions::PostCss(parse_options(name, options)?),
            Loader::Sass => StepOptions::Sass(parse_options(name, options)?),
            Loader::File => StepOptions::File(parse_options(name, options)?),
            Loader::Babel => StepOptions::Babel(parse_options(name, options)?),
            Loader::ImageOptimizer => StepOptions::ImageOptimizer(parse_options(name, options)?),
            Loader::Html => StepOptions::Html(parse_options(name, options)?),
        };
        Ok(Self::new(options))
    }

    pub fn loader(&self) -> Loader {
        self.loader
    }

    pub fn name(&self) -> &'static str {
        self.loader.name()
    }

    pub fn options(&self) -> &StepOptions {
        &self.options
    }

    /// Options as an ordered `key → value` mapping
    pub fn options_map(&self) -> IndexMap<String, Value> {
        match serde_json::to_value(&self.options) {
            Ok(Value::Object(map)) => map.into_iter().collect(),
            _ => IndexMap::new(),
        }
    }

    pub fn option(&self, key: &str) -> Option<Value> {
        self.options_map().shift_remove(key)
    }
}

pub(crate) fn parse_options<T: DeserializeOwned>(name: &str, options: Value) -> Result<T> {
    serde_json::from_value(options).map_err(|e| ConfigError::InvalidOptions {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// `mini-css-extract-plugin/loader` takes no options
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractCssLoaderOptions {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BabelLoaderOptions {
    #[serde(default = "default_babel_presets")]
    pub presets: Vec<String>,
}

impl Default for BabelLoaderOptions {
    fn default() -> Self {
        Self {
            presets: default_babel_presets(),
        }
    }
}

fn default_babel_presets() -> Vec<String> {
    vec!["@babel/preset-env".to_string()]
}

/// Markup loader options. Minification is left to the HTML plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HtmlLoaderOptions {
    pub minimize: bool,
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
    pub remove_script_type_attributes: bool,
    pub remove_style_type_attributes: bool,
}

impl Default for HtmlLoaderOptions {
    fn default() -> Self {
        Self {
            minimize: false,
            remove_comments: true,
            collapse_whitespace: true,
            remove_script_type_attributes: true,
            remove_style_type_attributes: false,
        }
    }
}
