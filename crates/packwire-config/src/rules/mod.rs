//! Asset rules: file-type patterns mapped to ordered loader pipelines.

mod media;
mod steps;
mod style;

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::mode::BuildMode;
use crate::pattern::Pattern;

pub use media::{
    FileLoaderOptions, GifsicleOptions, ImageLoaderOptions, MozJpegOptions, OptiPngOptions,
    PngQuantOptions,
};
pub(crate) use steps::parse_options;
pub use steps::{
    BabelLoaderOptions, ExtractCssLoaderOptions, HtmlLoaderOptions, Loader, StepDescriptor,
    StepOptions,
};
pub use style::{
    CssLoaderOptions, CssnanoPreset, PostCssLoaderOptions, PostCssPlugin, SassLoaderOptions,
    SassOutputStyle,
};

/// Category of source file a rule handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Styles,
    Fonts,
    Scripts,
    Images,
    Markup,
}

impl AssetCategory {
    /// Declared rule order; earlier rules take precedence.
    pub const ORDER: [AssetCategory; 5] = [
        AssetCategory::Styles,
        AssetCategory::Fonts,
        AssetCategory::Scripts,
        AssetCategory::Images,
        AssetCategory::Markup,
    ];
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Styles => "styles",
            Self::Fonts => "fonts",
            Self::Scripts => "scripts",
            Self::Images => "images",
            Self::Markup => "markup",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRule {
    pub category: AssetCategory,

    /// File names this rule applies to
    pub test: Pattern,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,

    /// Steps in application order
    #[serde(rename = "use")]
    pub steps: Vec<StepDescriptor>,
}

impl AssetRule {
    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path) && !self.exclude.as_ref().is_some_and(|ex| ex.is_match(path))
    }

    pub fn step(&self, loader: Loader) -> Option<&StepDescriptor> {
        self.steps.iter().find(|step| step.loader() == loader)
    }

    /// Whether the pipeline minifies its output
    pub fn minifies(&self) -> bool {
        self.steps.iter().any(|step| match step.options() {
            StepOptions::PostCss(options) => options.minifies(),
            _ => false,
        })
    }
}

struct AssetPatterns {
    styles: Pattern,
    fonts: Pattern,
    scripts: Pattern,
    vendored: Pattern,
    images: Pattern,
    markup: Pattern,
}

static PATTERNS: Lazy<AssetPatterns> = Lazy::new(|| AssetPatterns {
    styles: literal(r"\.((s[ac]|c)ss)$", false),
    fonts: literal(r"\.(eot|svg|ttf|woff|woff2)$", false),
    scripts: literal(r"\.js$", false),
    vendored: literal("node_modules", false),
    images: literal(r"\.(gif|png|jpe?g|svg)$", true),
    markup: literal(r"\.html$", false),
});

fn literal(source: &str, case_insensitive: bool) -> Pattern {
    let pattern = if case_insensitive {
        Pattern::case_insensitive(source)
    } else {
        Pattern::new(source)
    };
    pattern.expect("declared asset pattern is a valid regex")
}

/// The five declared rules, in precedence order.
pub(crate) fn declared_rules(mode: BuildMode) -> Vec<AssetRule> {
    let patterns = &*PATTERNS;
    vec![
        AssetRule {
            category: AssetCategory::Styles,
            test: patterns.styles.clone(),
            exclude: None,
            steps: style_steps(mode),
        },
        AssetRule {
            category: AssetCategory::Fonts,
            test: patterns.fonts.clone(),
            exclude: None,
            steps: vec![StepDescriptor::new(FileLoaderOptions::fonts())],
        },
        AssetRule {
            category: AssetCategory::Scripts,
            test: patterns.scripts.clone(),
            exclude: Some(patterns.vendored.clone()),
            steps: vec![StepDescriptor::new(BabelLoaderOptions::default())],
        },
        AssetRule {
            category: AssetCategory::Images,
            test: patterns.images.clone(),
            exclude: None,
            steps: image_steps(mode),
        },
        AssetRule {
            category: AssetCategory::Markup,
            test: patterns.markup.clone(),
            exclude: None,
            steps: vec![StepDescriptor::new(HtmlLoaderOptions::default())],
        },
    ]
}

fn style_steps(mode: BuildMode) -> Vec<StepDescriptor> {
    let source_map = !mode.is_production();
    vec![
        StepDescriptor::new(ExtractCssLoaderOptions::default()),
        StepDescriptor::new(CssLoaderOptions { source_map }),
        StepDescriptor::new(PostCssLoaderOptions {
            source_map,
            plugins: style::postcss_plugins(mode),
            ..Default::default()
        }),
        StepDescriptor::new(SassLoaderOptions {
            output_style: SassOutputStyle::Expanded,
            source_map,
        }),
    ]
}

fn image_steps(mode: BuildMode) -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new(FileLoaderOptions::images()),
        StepDescriptor::new(ImageLoaderOptions {
            bypass_on_debug: !mode.is_production(),
            ..Default::default()
        }),
    ]
}
