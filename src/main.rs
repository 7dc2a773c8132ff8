//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use serde_json::Value;
use std::env;
use std::fmt::Display;
use std::fs;
use std::io::{self, Read, Write};
use std::process;
use tile_grid::Grid;
use tilecover_core::core::config::DEFAULT_CONFIG;
use tilecover_core::core::{gridcfg, parse_config, read_config, ApplicationCfg, Config};
use tilecover_core::{
    burn, feature_values, find_edges, normalize_features, union, Feature, TileFormat, TileScheme,
    TileSet,
};

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1_000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn fail<T>(err: impl Display) -> T {
    eprintln!("Error: {}", err);
    process::exit(1)
}

fn config_from_args(args: &ArgMatches<'_>) -> ApplicationCfg {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            eprintln!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(fail)
    }
}

fn grid_from_args(args: &ArgMatches<'_>, config: &ApplicationCfg) -> Grid {
    if let Some(gridname) = args.value_of("grid") {
        if args.value_of("config").is_some() {
            warn!("Overriding configured grid with '{}'", gridname);
        }
        Grid::predefined(gridname).unwrap_or_else(|| fail(format!("Unknown grid '{}'", gridname)))
    } else {
        Grid::from_config(&config.grid).unwrap_or_else(|err| {
            eprintln!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    }
}

fn read_input(args: &ArgMatches<'_>) -> String {
    match args.value_of("INPUT").unwrap_or("-") {
        "-" => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .unwrap_or_else(|err| fail(format!("Error reading stdin - {}", err)));
            input
        }
        path => {
            debug!("Reading input from '{}'", path);
            fs::read_to_string(path)
                .unwrap_or_else(|err| fail(format!("Error reading '{}' - {}", path, err)))
        }
    }
}

fn features_from_args(args: &ArgMatches<'_>) -> Vec<Feature> {
    let input = read_input(args);
    let documents: Vec<Value> = if args.is_present("sequence") {
        input
            .lines()
            .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\x1e'))
            .filter(|line| !line.is_empty())
            .map(serde_json::from_str::<Value>)
            .collect::<Result<_, _>>()
            .unwrap_or_else(|err| fail(format!("Invalid GeoJSON sequence - {}", err)))
    } else {
        vec![serde_json::from_str(&input)
            .unwrap_or_else(|err| fail(format!("Invalid GeoJSON - {}", err)))]
    };
    normalize_features(documents.into_iter().flat_map(feature_values))
        .collect::<Result<_, _>>()
        .unwrap_or_else(fail)
}

fn tiles_from_args(
    args: &ArgMatches<'_>,
    config: &ApplicationCfg,
    grid: Option<&Grid>,
) -> TileSet {
    let format = if args.is_present("parsenames") {
        TileFormat::Names
    } else {
        TileFormat::from_config(&config.tiles).unwrap_or_else(fail)
    };
    let input = read_input(args);
    let lines: Vec<&str> = input.lines().collect();
    match grid {
        Some(grid) => TileSet::parse_with_limit(&lines, format, |zoom| grid.tile_limit(zoom)),
        None => TileSet::parse(&lines, format),
    }
    .unwrap_or_else(fail)
}

fn cmd_burn(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let grid = grid_from_args(args, &config);
    let zoom = match args.value_of("zoom") {
        Some(zoom) => zoom
            .parse::<i64>()
            .unwrap_or_else(|_| fail("Error parsing 'zoom' as integer value")),
        None => config
            .burn
            .zoom
            .map(i64::from)
            .unwrap_or_else(|| fail("Missing zoom level")),
    };
    let zoom = grid.check_zoom(zoom).unwrap_or_else(fail);
    let features = features_from_args(args);
    info!("Burning {} features at zoom {}", features.len(), zoom);
    let tiles = burn(&features, zoom, &grid).unwrap_or_else(fail);
    for tile in tiles {
        println!("{}", tile.to_json());
    }
}

fn cmd_union(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let grid = grid_from_args(args, &config);
    let tiles = tiles_from_args(args, &config, Some(&grid));
    let features = union(&tiles, &grid).unwrap_or_else(fail);
    info!(
        "Merged {} tiles into {} polygons",
        tiles.tiles().len(),
        features.len()
    );
    for feature in features {
        println!("{}", feature.to_json());
    }
}

fn cmd_edges(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let tiles = tiles_from_args(args, &config, None);
    for tile in find_edges(&tiles) {
        println!("{}", tile.to_json());
    }
}

fn main() {
    dotenv().ok();
    let mut app = App::new("tilecover")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Tile covers, unions and edges of GeoJSON geometries")
        .subcommand(SubCommand::with_name("burn")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("[zoom] 'Zoom level'
                                              [INPUT] 'GeoJSON file (Default: stdin)'
                                              --sequence 'Read newline delimited GeoJSON features'
                                              --grid=[web_mercator|wgs84] 'Predefined tile grid'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tiles covering GeoJSON features"))
        .subcommand(SubCommand::with_name("union")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("[INPUT] 'Tile list (Default: stdin)'
                                              --parsenames 'Read tiles as x-y-z names'
                                              --grid=[web_mercator|wgs84] 'Predefined tile grid'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Polygons outlining a set of tiles"))
        .subcommand(SubCommand::with_name("edges")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("[INPUT] 'Tile list (Default: stdin)'
                                              --parsenames 'Read tiles as x-y-z names'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tiles on the border of a set of tiles"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("burn", Some(sub_m)) => {
                init_logger(sub_m);
                cmd_burn(sub_m);
            }
            ("union", Some(sub_m)) => {
                init_logger(sub_m);
                cmd_union(sub_m);
            }
            ("edges", Some(sub_m)) => {
                init_logger(sub_m);
                cmd_edges(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", gridcfg::gen_config());
            }
            _ => {
                let _ = app.print_help();
                println!();
            }
        },
    }
}
