//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{read_config, ApplicationCfg, DEFAULT_CONFIG};
use crate::core::gridcfg::gen_config;
use crate::core::parse_config;

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.grid.predefined, None);
    let user = config.grid.user.expect("user grid");
    assert_eq!(user.srid, 2056);
    assert_eq!(user.resolutions.len(), 29);
    assert_eq!(user.origin, "TopLeft");
    assert!(config.tiles.parsenames);
    assert_eq!(config.burn.zoom, Some(17));
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config
        .err()
        .unwrap()
        .starts_with("src/core/mod.rs - unexpected character found: `/` at line 1"));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.grid.predefined, Some("web_mercator".to_string()));
    assert!(!config.tiles.parsenames);
    assert_eq!(config.burn.zoom, None);

    // optional sections
    let toml = r#"
        [grid]
        predefined = "wgs84"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.grid.predefined, Some("wgs84".to_string()));
    assert!(!config.tiles.parsenames);
}

#[test]
fn test_gen_config() {
    let config: ApplicationCfg = parse_config(gen_config(), "").unwrap();
    assert_eq!(config.grid.predefined, Some("web_mercator".to_string()));
    assert!(!config.tiles.parsenames);
    assert_eq!(config.burn.zoom, None);
}

#[test]
fn test_env_expansion() {
    std::env::set_var("TILECOVER_TEST_ZOOM", "9");
    let toml = r#"
        [grid]
        predefined = "web_mercator"
        [burn]
        zoom = {{env.TILECOVER_TEST_ZOOM}}
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.burn.zoom, Some(9));

    let toml = r#"
        [grid]
        predefined = "web_mercator"
        [burn]
        zoom = ${ZOOM}
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`",
        config.err().unwrap()
    );
}

#[test]
fn test_missing_grid() {
    let toml = r#"
        [tiles]
        parsenames = true
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "cfg.toml");
    assert_eq!("cfg.toml - missing field `grid`", config.err().unwrap());
}
