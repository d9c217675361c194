//! Tests for mode-dependent assembly of the build config.

use packwire_config::{
    AssetCategory, BuildMode, Loader, PluginKind, SourceMapStrategy, assemble, assemble_named,
};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn production_selects_release_plugins() {
    let config = assemble(BuildMode::Production, "/repo");

    assert!(config.has_plugin(PluginKind::Clean));
    assert!(config.has_plugin(PluginKind::Copy));
    assert!(!config.has_plugin(PluginKind::LiveReload));
    assert_eq!(config.plugins.len(), 5);
}

#[test]
fn development_selects_live_reload() {
    let config = assemble(BuildMode::Development, "/repo");

    assert!(config.has_plugin(PluginKind::LiveReload));
    assert!(!config.has_plugin(PluginKind::Clean));
    assert!(!config.has_plugin(PluginKind::Copy));
    assert_eq!(config.plugins.len(), 4);
}

#[test]
fn unconditional_plugins_lead_in_both_modes() {
    for mode in BuildMode::ALL {
        let config = assemble(mode, "/repo");
        let leading: Vec<_> = config.plugins.iter().take(3).map(|p| p.kind()).collect();
        assert_eq!(
            leading,
            vec![PluginKind::ExtractCss, PluginKind::Html, PluginKind::Progress]
        );
    }
}

#[test]
fn plugins_only_contain_those_applying_in_mode() {
    for mode in BuildMode::ALL {
        let config = assemble(mode, "/repo");
        assert!(config.plugins.iter().all(|p| p.applies_to(mode)));
    }
}

#[test]
fn production_output_and_source_maps() {
    let config = assemble(BuildMode::Production, "/repo");

    assert_eq!(config.output.path, PathBuf::from("/repo/dist"));
    assert_eq!(config.output.filename, "scripts/[name].js");
    assert_eq!(config.source_maps, SourceMapStrategy::None);
    assert_eq!(config.source_maps.as_str(), "none");
    assert!(config.dev_server.is_none());
}

#[test]
fn development_dev_server_and_source_maps() {
    let config = assemble(BuildMode::Development, "/repo");

    assert_ne!(config.source_maps, SourceMapStrategy::None);
    let server = config.dev_server.expect("dev server present");
    assert_eq!(server.port, 8080);
    assert_eq!(server.proxy_target, "http://localhost:8080/");
    assert!(server.overlay.errors);
    assert!(server.overlay.warnings);
    assert_eq!(server.content_base, PathBuf::from("/repo/src"));
}

#[test]
fn style_pipeline_minifies_only_in_production() {
    let prod = assemble(BuildMode::Production, "/repo");
    let dev = assemble(BuildMode::Development, "/repo");

    let prod_styles = prod.rule(AssetCategory::Styles).unwrap();
    let dev_styles = dev.rule(AssetCategory::Styles).unwrap();
    assert!(prod_styles.minifies());
    assert!(!dev_styles.minifies());

    let postcss = prod_styles.step(Loader::PostCss).unwrap();
    assert_eq!(postcss.option("plugins").unwrap()[1]["name"], json!("cssnano"));
    let postcss = dev_styles.step(Loader::PostCss).unwrap();
    assert_eq!(postcss.option("plugins"), Some(json!([])));
}

#[test]
fn rule_order_is_stable_across_modes() {
    for mode in BuildMode::ALL {
        let config = assemble(mode, "/repo");
        let categories: Vec<_> = config.rules.iter().map(|r| r.category).collect();
        assert_eq!(categories, AssetCategory::ORDER);
    }
}

#[test]
fn entries_always_have_vendor_and_app_pairs() {
    for mode in BuildMode::ALL {
        let config = assemble(mode, "/repo");
        let names: Vec<_> = config.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["vendor", "app"]);
        for group in &config.entries {
            assert_eq!(group.sources.len(), 2);
        }
        assert_eq!(
            config.entry("app").unwrap().sources,
            vec![
                PathBuf::from("./styles/app.sass"),
                PathBuf::from("./scripts/app.js")
            ]
        );
    }
}

#[test]
fn assembly_is_idempotent() {
    for mode in BuildMode::ALL {
        let first = assemble(mode, "/repo");
        let second = assemble(mode, "/repo");
        assert_eq!(first, second);
        assert_eq!(first.to_value().unwrap(), second.to_value().unwrap());
    }
}

#[test]
fn first_matching_rule_wins() {
    let config = assemble(BuildMode::Production, "/repo");

    let category = |path: &str| config.rule_for(path).map(|r| r.category);
    assert_eq!(category("styles/app.sass"), Some(AssetCategory::Styles));
    assert_eq!(category("fonts/icons.woff2"), Some(AssetCategory::Fonts));
    // svg is claimed by the font rule before the image rule sees it
    assert_eq!(category("images/logo.svg"), Some(AssetCategory::Fonts));
    assert_eq!(category("images/Photo.JPG"), Some(AssetCategory::Images));
    assert_eq!(category("scripts/app.js"), Some(AssetCategory::Scripts));
    assert_eq!(category("node_modules/jquery/dist/jquery.js"), None);
    assert_eq!(category("index.html"), Some(AssetCategory::Markup));
    assert_eq!(category("README.md"), None);
}

#[test]
fn named_modes_are_validated_at_the_boundary() {
    assert!(assemble_named("Production", "/repo").is_ok());
    assert!(assemble_named("", "/repo").is_err());
    assert!(assemble_named("none", "/repo").is_err());
}

#[test]
fn serialized_descriptor_uses_bundler_keys() {
    let value = assemble(BuildMode::Development, "/repo").to_value().unwrap();

    assert_eq!(value["mode"], json!("development"));
    assert_eq!(value["devtool"], json!("source-map"));
    assert_eq!(value["output"]["publicPath"], json!(""));
    assert_eq!(value["output"]["crossOriginLoading"], json!("anonymous"));
    assert_eq!(value["devServer"]["port"], json!(8080));
    assert_eq!(value["rules"][2]["exclude"], json!("/node_modules/"));
    assert_eq!(value["rules"][3]["test"], json!(r"/\.(gif|png|jpe?g|svg)$/i"));
    assert_eq!(
        value["plugins"][3]["name"],
        json!("browser-sync-webpack-plugin")
    );

    let prod = assemble(BuildMode::Production, "/repo").to_value().unwrap();
    assert!(prod.get("devServer").is_none());
    assert_eq!(prod["devtool"], json!("none"));
}
