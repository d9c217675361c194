//! Development server settings handed to the external dev server.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSpec {
    /// Directory served as static content
    pub content_base: PathBuf,

    pub port: u16,

    /// URL the live-reload proxy forwards browser traffic to
    pub proxy_target: String,

    /// In-browser overlay shown on compile problems
    pub overlay: Overlay,

    /// Suppress the dev server's own console output
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub warnings: bool,
    pub errors: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            warnings: true,
            errors: true,
        }
    }
}
