//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Build target that parameterizes the whole configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Release build: minified styles, no source maps, output cleaned and static assets copied
    Production,
    /// Local build: source maps, dev server and live-reload proxy
    Development,
}

impl BuildMode {
    pub const ALL: [BuildMode; 2] = [BuildMode::Production, BuildMode::Development];

    /// Map a "is this a release build?" flag onto a mode.
    pub fn from_release_flag(release: bool) -> Self {
        if release {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: anything other than the two mode names is rejected.
///
/// ```
/// use packwire_config::BuildMode;
///
/// assert_eq!("production".parse::<BuildMode>().unwrap(), BuildMode::Production);
/// assert_eq!(" Development ".parse::<BuildMode>().unwrap(), BuildMode::Development);
/// assert!("prod".parse::<BuildMode>().is_err());
/// ```
impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("production") {
            Ok(Self::Production)
        } else if trimmed.eq_ignore_ascii_case("development") {
            Ok(Self::Development)
        } else {
            Err(ConfigError::UnknownMode(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_flag_maps_to_mode() {
        assert_eq!(BuildMode::from_release_flag(true), BuildMode::Production);
        assert_eq!(BuildMode::from_release_flag(false), BuildMode::Development);
    }

    #[test]
    fn parse_rejects_empty_and_abbreviations() {
        for input in ["", "   ", "prod", "dev", "test", "production-ish"] {
            let err = input.parse::<BuildMode>().unwrap_err();
            assert!(matches!(err, ConfigError::UnknownMode(ref v) if v == input));
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in BuildMode::ALL {
            assert_eq!(mode.to_string().parse::<BuildMode>().unwrap(), mode);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(BuildMode::Production).unwrap(),
            serde_json::json!("production")
        );
    }
}
