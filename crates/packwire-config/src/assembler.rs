//! Mode-conditional assembly of the build configuration.
//!
//! Assembly is a pure transform: no I/O, no clocks, no global mutable state.
//! Calling [`ConfigAssembler::assemble`] twice with the same arguments yields
//! structurally identical output.

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::{BuildConfig, SourceMapStrategy};
use crate::dev::{DevServerSpec, Overlay};
use crate::entry::declared_entries;
use crate::error::Result;
use crate::mode::BuildMode;
use crate::output::{CrossOriginLoading, OutputSpec, ResolveSpec, SCRIPT_FILENAME_TEMPLATE};
use crate::overrides::Overrides;
use crate::plugin::{self, PluginDescriptor};
use crate::rules::declared_rules;

/// Builds [`BuildConfig`]s from a mode, a root directory and validated overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigAssembler {
    overrides: Overrides,
}

impl ConfigAssembler {
    /// Assembler using the declared defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler with tunables replaced; fails if any override is out of range.
    pub fn with_overrides(overrides: Overrides) -> Result<Self> {
        overrides.validate()?;
        Ok(Self { overrides })
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Produce the configuration for `mode`, rooted at `root`.
    ///
    /// `root` is not checked for existence; see [`crate::FsValidator`].
    ///
    /// # Example
    ///
    /// ```
    /// use packwire_config::{BuildMode, ConfigAssembler, PluginKind};
    /// use std::path::PathBuf;
    ///
    /// let config = ConfigAssembler::new().assemble(BuildMode::Production, "/repo");
    /// assert_eq!(config.output.path, PathBuf::from("/repo/dist"));
    /// assert!(config.has_plugin(PluginKind::Clean));
    /// assert!(config.dev_server.is_none());
    /// ```
    pub fn assemble(&self, mode: BuildMode, root: impl AsRef<Path>) -> BuildConfig {
        let root = root.as_ref();
        let context = root.join(&self.overrides.source_dir);

        let config = BuildConfig {
            mode,
            entries: declared_entries(),
            output: self.output_spec(root),
            rules: declared_rules(mode),
            plugins: self.plugins(mode),
            dev_server: self.dev_server(mode, &context),
            source_maps: SourceMapStrategy::for_mode(mode),
            resolve: resolve_spec(&context),
            context,
        };

        debug!(
            %mode,
            root = %root.display(),
            rules = config.rules.len(),
            plugins = config.plugins.len(),
            "assembled build config"
        );
        config
    }

    /// Boundary entry point for an untyped mode name.
    ///
    /// Unknown names fail fast with [`crate::ConfigError::UnknownMode`]
    /// instead of falling back to development.
    pub fn assemble_named(&self, mode: &str, root: impl AsRef<Path>) -> Result<BuildConfig> {
        let mode: BuildMode = mode.parse()?;
        Ok(self.assemble(mode, root))
    }

    fn output_spec(&self, root: &Path) -> OutputSpec {
        OutputSpec {
            path: root.join(&self.overrides.output_dir),
            public_path: self.overrides.public_path.clone(),
            filename: SCRIPT_FILENAME_TEMPLATE.to_string(),
            cross_origin_loading: CrossOriginLoading::Anonymous,
        }
    }

    fn plugins(&self, mode: BuildMode) -> Vec<PluginDescriptor> {
        plugin::catalog(&self.overrides)
            .into_iter()
            .filter(|descriptor| {
                let active = descriptor.applies_to(mode);
                trace!(plugin = descriptor.name(), %mode, active, "plugin selection");
                active
            })
            .collect()
    }

    fn dev_server(&self, mode: BuildMode, context: &Path) -> Option<DevServerSpec> {
        match mode {
            BuildMode::Production => None,
            BuildMode::Development => Some(DevServerSpec {
                content_base: context.to_path_buf(),
                port: self.overrides.dev_server_port,
                proxy_target: self.overrides.dev_server_url(),
                overlay: Overlay::default(),
                quiet: true,
            }),
        }
    }
}

fn resolve_spec(context: &Path) -> ResolveSpec {
    let mut alias = IndexMap::new();
    alias.insert("~".to_string(), context.join("scripts/"));
    ResolveSpec {
        modules: vec![context.to_path_buf(), "node_modules".into()],
        alias,
    }
}

/// Assemble with the declared defaults.
///
/// # Example
///
/// ```
/// use packwire_config::{assemble, BuildMode};
///
/// let config = assemble(BuildMode::Development, "/repo");
/// assert_eq!(config.dev_server.unwrap().port, 8080);
/// assert_eq!(config.plugins.len(), 4);
/// ```
pub fn assemble(mode: BuildMode, root: impl AsRef<Path>) -> BuildConfig {
    ConfigAssembler::new().assemble(mode, root)
}

/// Assemble for an untyped mode name, rejecting anything but the two modes.
pub fn assemble_named(mode: &str, root: impl AsRef<Path>) -> Result<BuildConfig> {
    ConfigAssembler::new().assemble_named(mode, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::plugin::PluginKind;
    use std::path::PathBuf;

    #[test]
    fn context_and_resolution_hang_off_source_dir() {
        let config = assemble(BuildMode::Production, "/repo");
        assert_eq!(config.context, PathBuf::from("/repo/src"));
        assert_eq!(
            config.resolve.modules,
            vec![PathBuf::from("/repo/src"), PathBuf::from("node_modules")]
        );
        assert_eq!(
            config.resolve.alias.get("~"),
            Some(&PathBuf::from("/repo/src/scripts/"))
        );
    }

    #[test]
    fn output_spec_is_mode_independent() {
        let prod = assemble(BuildMode::Production, "/repo");
        let dev = assemble(BuildMode::Development, "/repo");
        assert_eq!(prod.output, dev.output);
        assert_eq!(prod.output.public_path, "");
        assert_eq!(
            prod.output.cross_origin_loading,
            CrossOriginLoading::Anonymous
        );
    }

    #[test]
    fn overrides_flow_into_output_and_plugins() {
        let overrides = Overrides {
            output_dir: PathBuf::from("public/build"),
            dev_server_port: 3000,
            live_reload_port: 3001,
            ..Overrides::default()
        };
        let assembler = ConfigAssembler::with_overrides(overrides).unwrap();

        let prod = assembler.assemble(BuildMode::Production, "/repo");
        assert_eq!(prod.output.path, PathBuf::from("/repo/public/build"));
        let clean = prod.plugin(PluginKind::Clean).unwrap();
        assert_eq!(clean.options_map()["paths"], serde_json::json!(["public/build"]));

        let dev = assembler.assemble(BuildMode::Development, "/repo");
        let server = dev.dev_server.unwrap();
        assert_eq!(server.port, 3000);
        assert_eq!(server.proxy_target, "http://localhost:3000/");
    }

    #[test]
    fn with_overrides_validates() {
        let overrides = Overrides {
            live_reload_port: 8080,
            ..Overrides::default()
        };
        assert!(matches!(
            ConfigAssembler::with_overrides(overrides),
            Err(ConfigError::InvalidOverride { .. })
        ));
    }

    #[test]
    fn assemble_named_fails_fast_on_unknown_mode() {
        let err = assemble_named("staging", "/repo").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMode(ref m) if m == "staging"));
        assert_eq!(
            assemble_named("production", "/repo").unwrap(),
            assemble(BuildMode::Production, "/repo")
        );
    }

    #[test]
    fn assembled_config_is_thread_safe() {
        fn check<T: Send + Sync>() {}
        check::<BuildConfig>();
        check::<ConfigAssembler>();
    }
}
