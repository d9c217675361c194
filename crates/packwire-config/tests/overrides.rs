//! Tests for loading overrides from packwire.toml and the environment.

use packwire_config::{BuildMode, ConfigAssembler, ConfigError, Overrides, PluginKind};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: env-mutating tests are serialized with #[serial]
    unsafe { std::env::set_var(key, value) }
}

fn remove_env(key: &str) {
    // SAFETY: env-mutating tests are serialized with #[serial]
    unsafe { std::env::remove_var(key) }
}

#[test]
#[serial]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let overrides = Overrides::load(dir.path()).expect("load overrides");
    assert_eq!(overrides, Overrides::default());
}

#[test]
#[serial]
fn file_values_replace_defaults() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("packwire.toml"),
        r##"
output_dir = "build"
dev_server_port = 3000
progress_color = "#FF8800"
"##,
    )
    .expect("write overrides");

    let overrides = Overrides::load(dir.path()).expect("load overrides");
    assert_eq!(overrides.output_dir, PathBuf::from("build"));
    assert_eq!(overrides.dev_server_port, 3000);
    assert_eq!(overrides.progress_color, "#FF8800");
    assert_eq!(overrides.live_reload_port, 9090);
}

#[test]
#[serial]
fn environment_beats_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("packwire.toml"), "dev_server_port = 3000\n")
        .expect("write overrides");

    set_env("PACKWIRE_DEV_SERVER_PORT", "4000");
    let result = Overrides::load(dir.path());
    remove_env("PACKWIRE_DEV_SERVER_PORT");

    assert_eq!(result.expect("load overrides").dev_server_port, 4000);
}

#[test]
#[serial]
fn numeric_and_boolean_env_values_fill_text_fields() {
    let dir = TempDir::new().expect("tempdir");
    let vars = [
        ("PACKWIRE_OUTPUT_DIR", "2024"),
        ("PACKWIRE_SOURCE_DIR", "2024"),
        ("PACKWIRE_PUBLIC_PATH", "1"),
        ("PACKWIRE_LIVE_RELOAD_HOST", "true"),
    ];
    for (key, value) in vars {
        set_env(key, value);
    }
    let result = Overrides::load(dir.path());
    for (key, _) in vars {
        remove_env(key);
    }

    let overrides = result.expect("load overrides");
    assert_eq!(overrides.output_dir, PathBuf::from("2024"));
    assert_eq!(overrides.source_dir, PathBuf::from("2024"));
    assert_eq!(overrides.public_path, "1");
    assert_eq!(overrides.live_reload_host, "true");
}

#[test]
#[serial]
fn unknown_keys_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("packwire.toml"), "minify = true\n").expect("write overrides");

    let err = Overrides::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
#[serial]
fn invalid_values_are_rejected_after_merge() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("packwire.toml"), "live_reload_port = 8080\n")
        .expect("write overrides");

    let err = Overrides::load(dir.path()).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidOverride { ref field, .. } if field == "live_reload_port")
    );
}

#[test]
#[serial]
fn explicit_file_must_exist() {
    let dir = TempDir::new().expect("tempdir");
    let err = Overrides::load_file(dir.path().join("custom.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
#[serial]
fn serialized_overrides_round_trip_through_file() {
    let dir = TempDir::new().expect("tempdir");
    let overrides = Overrides {
        source_dir: PathBuf::from("app"),
        live_reload_host: "127.0.0.1".to_string(),
        ..Overrides::default()
    };
    let path = dir.path().join("custom.toml");
    fs::write(&path, toml::to_string(&overrides).expect("serialize")).expect("write overrides");

    assert_eq!(Overrides::load_file(&path).expect("load overrides"), overrides);
}

#[test]
#[serial]
fn loaded_overrides_drive_assembly() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("packwire.toml"),
        "source_dir = \"web\"\nlive_reload_port = 9191\n",
    )
    .expect("write overrides");

    let overrides = Overrides::load(dir.path()).expect("load overrides");
    let config = ConfigAssembler::with_overrides(overrides)
        .expect("valid overrides")
        .assemble(BuildMode::Development, dir.path());

    assert_eq!(config.context, dir.path().join("web"));
    let live = config.plugin(PluginKind::LiveReload).expect("live reload");
    assert_eq!(live.options_map()["port"], serde_json::json!(9191));
}
