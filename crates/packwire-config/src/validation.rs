//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use crate::config::{BuildConfig, SourceMapStrategy};
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::rules::AssetCategory;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate an assembled build config
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Checks the mode invariants of an assembled config. Useful for configs that
/// were edited after assembly or rebuilt from descriptors.
///
/// # Example
///
/// ```
/// use packwire_config::{assemble, BuildMode, ConfigValidator, SchemaValidator};
///
/// let config = assemble(BuildMode::Development, "/repo");
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        let mode = config.mode;

        if config.entries.is_empty() {
            return Err(ConfigError::schema("no entry groups declared"));
        }
        for group in &config.entries {
            if group.sources.is_empty() {
                return Err(ConfigError::schema(format!(
                    "entry group '{}' has no sources",
                    group.name
                )));
            }
        }

        let categories: Vec<AssetCategory> = config.rules.iter().map(|r| r.category).collect();
        if categories != AssetCategory::ORDER {
            return Err(ConfigError::schema(format!(
                "asset rules out of order: expected {:?}, found {:?}",
                AssetCategory::ORDER,
                categories
            )));
        }
        for rule in &config.rules {
            if rule.steps.is_empty() {
                return Err(ConfigError::schema(format!(
                    "{} rule has an empty pipeline",
                    rule.category
                )));
            }
        }

        if let Some(plugin) = config.plugins.iter().find(|p| !p.applies_to(mode)) {
            return Err(ConfigError::schema(format!(
                "plugin '{}' does not apply in {} mode",
                plugin.name(),
                mode
            )));
        }

        match (mode, config.dev_server.is_some()) {
            (BuildMode::Production, true) => {
                return Err(ConfigError::schema("dev server configured for a production build"));
            }
            (BuildMode::Development, false) => {
                return Err(ConfigError::schema("development build is missing a dev server"));
            }
            _ => {}
        }

        let expected = SourceMapStrategy::for_mode(mode);
        if config.source_maps != expected {
            return Err(ConfigError::schema(format!(
                "source maps '{}' do not match {} mode (expected '{}')",
                config.source_maps, mode, expected
            )));
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the build context and every entry
/// source exist on disk. Entry sources are resolved against `config.context`.
///
/// # Example
///
/// ```no_run
/// use packwire_config::{assemble, BuildMode, ConfigValidator, FsValidator};
///
/// let config = assemble(BuildMode::Production, ".");
/// FsValidator.validate(&config).unwrap();
/// ```
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        if !config.context.is_dir() {
            return Err(ConfigError::ContextNotFound {
                path: config.context.clone(),
            });
        }

        for group in &config.entries {
            for path in group.resolve(&config.context) {
                if !path.exists() {
                    return Err(ConfigError::EntryNotFound { path });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig) -> Result<()> {
    FsValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::plugin::{CleanPluginOptions, PluginDescriptor, PluginOptions};

    #[test]
    fn schema_validator_accepts_assembled_configs() {
        for mode in BuildMode::ALL {
            assert!(SchemaValidator.validate(&assemble(mode, "/repo")).is_ok());
        }
    }

    #[test]
    fn schema_validator_rejects_foreign_plugin() {
        let mut config = assemble(BuildMode::Development, "/repo");
        config.plugins.push(PluginDescriptor::new(
            PluginOptions::Clean(CleanPluginOptions {
                paths: vec!["dist".into()],
            }),
            [BuildMode::Production],
        ));
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_reordered_rules() {
        let mut config = assemble(BuildMode::Production, "/repo");
        config.rules.swap(0, 1);
        assert!(SchemaValidator.validate(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_dev_server_in_production() {
        let dev = assemble(BuildMode::Development, "/repo");
        let mut prod = assemble(BuildMode::Production, "/repo");
        prod.dev_server = dev.dev_server;
        assert!(SchemaValidator.validate(&prod).is_err());
    }

    #[test]
    fn schema_validator_rejects_mismatched_source_maps() {
        let mut config = assemble(BuildMode::Production, "/repo");
        config.source_maps = SourceMapStrategy::SourceMap;
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_empty_entry_group() {
        let mut config = assemble(BuildMode::Production, "/repo");
        config.entries[1].sources.clear();
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("'app'"));
    }
}
