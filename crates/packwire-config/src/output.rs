//! Output location/naming and module resolution settings.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

/// Naming template for emitted script bundles.
pub const SCRIPT_FILENAME_TEMPLATE: &str = "scripts/[name].js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// Absolute output directory
    pub path: PathBuf,
    pub public_path: String,
    pub filename: String,
    pub cross_origin_loading: CrossOriginLoading,
}

/// CORS mode for lazily loaded chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOriginLoading {
    #[default]
    Anonymous,
    UseCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveSpec {
    /// Directories searched for bare imports, in order
    pub modules: Vec<PathBuf>,
    /// Import prefix → directory
    pub alias: IndexMap<String, PathBuf>,
}
