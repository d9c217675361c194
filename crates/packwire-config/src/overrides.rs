//! Tunables that replace the static declarations, plus file/env loading.
//!
//! Loading is the only place the library touches the filesystem or the
//! environment; the assembler itself only ever sees a validated [`Overrides`].

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Override file looked up in the project root.
pub const OVERRIDES_FILE_NAME: &str = "packwire.toml";

/// Prefix for environment overrides (`PACKWIRE_DEV_SERVER_PORT=3000`).
pub const ENV_PREFIX: &str = "PACKWIRE_";

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex colour pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    /// Source directory, relative to the root; used as bundler context
    #[serde(default = "default_source_dir", deserialize_with = "scalar_path")]
    pub source_dir: PathBuf,

    /// Output directory, relative to the root
    #[serde(default = "default_output_dir", deserialize_with = "scalar_path")]
    pub output_dir: PathBuf,

    /// Public URL prefix for emitted assets
    #[serde(default, deserialize_with = "scalar_string")]
    pub public_path: String,

    #[serde(default = "default_dev_server_port")]
    pub dev_server_port: u16,

    #[serde(
        default = "default_live_reload_host",
        deserialize_with = "scalar_string"
    )]
    pub live_reload_host: String,

    #[serde(default = "default_live_reload_port")]
    pub live_reload_port: u16,

    /// Progress bar colour (`#RRGGBB`)
    #[serde(default = "default_progress_color")]
    pub progress_color: String,
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            public_path: String::new(),
            dev_server_port: default_dev_server_port(),
            live_reload_host: default_live_reload_host(),
            live_reload_port: default_live_reload_port(),
            progress_color: default_progress_color(),
        }
    }
}

impl Overrides {
    /// Load overrides for a project root.
    ///
    /// Priority: environment variables > `packwire.toml` > defaults. A missing
    /// override file is not an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use packwire_config::Overrides;
    ///
    /// let overrides = Overrides::load(".").unwrap();
    /// assert!(overrides.dev_server_port > 0);
    /// ```
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let file = root.as_ref().join(OVERRIDES_FILE_NAME);
        Self::from_figment(Self::figment(Some(&file)))
    }

    /// Load overrides from an explicit file (plus environment variables).
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("override file not found: {}", path.display()),
            )));
        }
        Self::from_figment(Self::figment(Some(path)))
    }

    fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            if path.exists() {
                debug!(path = %path.display(), "merging override file");
            }
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let overrides: Self = figment.extract()?;
        overrides.validate()?;
        Ok(overrides)
    }

    /// Check every tunable against its constraint.
    pub fn validate(&self) -> Result<()> {
        check_relative_dir("source_dir", &self.source_dir)?;
        check_relative_dir("output_dir", &self.output_dir)?;

        if self.dev_server_port == 0 {
            return Err(ConfigError::override_value(
                "dev_server_port",
                "port must be non-zero",
            ));
        }
        if self.live_reload_port == 0 {
            return Err(ConfigError::override_value(
                "live_reload_port",
                "port must be non-zero",
            ));
        }
        if self.live_reload_port == self.dev_server_port {
            return Err(ConfigError::override_value(
                "live_reload_port",
                format!(
                    "port {} is already used by the dev server",
                    self.live_reload_port
                ),
            ));
        }
        if self.live_reload_host.trim().is_empty() {
            return Err(ConfigError::override_value(
                "live_reload_host",
                "host cannot be empty",
            ));
        }
        if !HEX_COLOR.is_match(&self.progress_color) {
            return Err(ConfigError::override_value(
                "progress_color",
                format!("'{}' is not a #RRGGBB colour", self.progress_color),
            ));
        }

        Ok(())
    }

    /// URL the live-reload proxy forwards browser traffic to.
    pub fn dev_server_url(&self) -> String {
        format!("http://localhost:{}/", self.dev_server_port)
    }
}

fn check_relative_dir(field: &str, dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Err(ConfigError::override_value(field, "directory cannot be empty"));
    }
    if dir.is_absolute() {
        return Err(ConfigError::override_value(
            field,
            format!("'{}' must be relative to the project root", dir.display()),
        ));
    }
    Ok(())
}

/// Env values arrive typed (`PACKWIRE_OUTPUT_DIR=2024` is a number), so text
/// fields accept any scalar and keep its textual form.
struct ScalarText;

impl Visitor<'_> for ScalarText {
    type Value = String;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
        Ok(v)
    }

    fn visit_char<E: de::Error>(self, v: char) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarText)
}

fn scalar_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_string(deserializer).map(PathBuf::from)
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_dev_server_port() -> u16 {
    8080
}

fn default_live_reload_host() -> String {
    "localhost".into()
}

fn default_live_reload_port() -> u16 {
    9090
}

fn default_progress_color() -> String {
    "#5C95EE".into()
}
