//! Entry groups: named bundles of source roots.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Named collection of source roots bundled into one output unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryGroup {
    pub name: String,
    /// Sources, relative to the build context, in bundling order
    pub sources: Vec<PathBuf>,
}

impl EntryGroup {
    pub fn new<I, P>(name: impl Into<String>, sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }

    /// Sources resolved against a context directory
    pub fn resolve(&self, context: &Path) -> Vec<PathBuf> {
        self.sources.iter().map(|s| context.join(s)).collect()
    }
}

/// Stylesheet root first, script root second, for every group.
const DECLARED_ENTRIES: [(&str, [&str; 2]); 2] = [
    ("vendor", ["./styles/vendor.sass", "./scripts/vendor.js"]),
    ("app", ["./styles/app.sass", "./scripts/app.js"]),
];

pub(crate) fn declared_entries() -> Vec<EntryGroup> {
    DECLARED_ENTRIES
        .iter()
        .map(|(name, sources)| EntryGroup::new(*name, *sources))
        .collect()
}
