//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::burn::burn;
use crate::core::error::Error;
use crate::core::geom::{Coord, Feature, Geometry};
use crate::core::scheme::TileScheme;
use crate::core::tile::{Tile, TileFormat, TileSet};
use crate::tileset::union;
use approx::assert_abs_diff_eq;
use tile_grid::Grid;

const MAX_LAT: f64 = 85.0511287798066;

fn rings(feature: &Feature) -> &Vec<Vec<Coord>> {
    match &feature.geometry {
        Geometry::Polygon(rings) => rings,
        _ => panic!("Polygon expected"),
    }
}

/// Twice the signed area, negative for clockwise rings (y pointing north)
fn signed_area(ring: &[Coord]) -> f64 {
    ring.windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum()
}

fn sorted(mut tiles: Vec<Tile>) -> Vec<Tile> {
    tiles.sort();
    tiles.dedup();
    tiles
}

#[test]
fn test_union_world() {
    let grid = Grid::web_mercator();
    let tiles = TileSet::from_triples(&[[0, 0, 1], [1, 0, 1], [0, 1, 1], [1, 1, 1]]).unwrap();
    let features = union(&tiles, &grid).unwrap();
    assert_eq!(features.len(), 1);
    assert!(features[0].properties.is_empty());
    let rings = rings(&features[0]);
    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], ring[4]);
    // starts in the upper-left corner
    assert_abs_diff_eq!(ring[0].x, -180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ring[0].y, MAX_LAT, epsilon = 1e-9);

    let extent = features[0].geometry.extent().unwrap();
    assert_abs_diff_eq!(extent.minx, -180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(extent.miny, -MAX_LAT, epsilon = 1e-9);
    assert_abs_diff_eq!(extent.maxx, 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(extent.maxy, MAX_LAT, epsilon = 1e-9);
    assert!(signed_area(ring) < 0.0);
}

#[test]
fn test_union_regions() {
    let grid = Grid::web_mercator();
    // diagonal tiles are not connected
    let tiles = TileSet::from_triples(&[[1, 1, 1], [0, 0, 1]]).unwrap();
    let features = union(&tiles, &grid).unwrap();
    assert_eq!(features.len(), 2);
    let first = features[0].geometry.extent().unwrap();
    assert_abs_diff_eq!(first.minx, -180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.maxx, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.miny, 0.0, epsilon = 1e-9);
    let second = features[1].geometry.extent().unwrap();
    assert_abs_diff_eq!(second.minx, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second.maxy, 0.0, epsilon = 1e-9);
}

#[test]
fn test_union_hole() {
    let grid = Grid::web_mercator();
    let mut triples = Vec::new();
    for y in 2..5 {
        for x in 3..6 {
            if (x, y) != (4, 3) {
                triples.push([x, y, 3]);
            }
        }
    }
    let tiles = TileSet::from_triples(&triples).unwrap();
    let features = union(&tiles, &grid).unwrap();
    assert_eq!(features.len(), 1);
    let rings = rings(&features[0]);
    assert_eq!(rings.len(), 2);
    assert_eq!(rings[0].len(), 5);
    assert_eq!(rings[1].len(), 5);
    assert!(signed_area(&rings[0]) < 0.0);
    assert!(signed_area(&rings[1]) > 0.0);

    let hole = grid.tile_extent_xyz(4, 3, 3);
    let (minx, miny) = grid.to_geodetic(hole.minx, hole.miny);
    let (maxx, maxy) = grid.to_geodetic(hole.maxx, hole.maxy);
    let extent = Geometry::LineString(rings[1].clone()).extent().unwrap();
    assert_abs_diff_eq!(extent.minx, minx, epsilon = 1e-9);
    assert_abs_diff_eq!(extent.miny, miny, epsilon = 1e-9);
    assert_abs_diff_eq!(extent.maxx, maxx, epsilon = 1e-9);
    assert_abs_diff_eq!(extent.maxy, maxy, epsilon = 1e-9);
}

#[test]
fn test_union_burn_roundtrip() {
    let patterns: Vec<Vec<[i64; 3]>> = vec![
        vec![[0, 0, 1], [1, 0, 1], [0, 1, 1], [1, 1, 1]],
        vec![[5, 5, 4]],
        // ring with a hole touching the outside in a corner
        vec![
            [100, 200, 9],
            [101, 200, 9],
            [102, 200, 9],
            [100, 201, 9],
            [102, 201, 9],
            [100, 202, 9],
            [101, 202, 9],
        ],
        // separate regions, one touching another diagonally
        vec![
            [550, 335, 10],
            [551, 336, 10],
            [552, 336, 10],
            [552, 337, 10],
            [560, 340, 10],
            [560, 341, 10],
        ],
        vec![[70000, 40000, 17], [70001, 40000, 17], [70000, 40001, 17]],
    ];
    for grid in &[Grid::web_mercator(), Grid::wgs84()] {
        for triples in &patterns {
            let tiles = TileSet::from_triples(triples).unwrap();
            let zoom = tiles.zoom();
            let features = union(&tiles, grid).unwrap();
            let burned = burn(&features, zoom, grid).unwrap();
            assert_eq!(sorted(burned), sorted(tiles.tiles().to_vec()));
        }
    }
}

#[test]
fn test_union_errors() {
    let grid = Grid::web_mercator();
    assert_eq!(
        TileSet::from_triples(&[[0, 0, 1], [0, 0, 2]]).and_then(|tiles| union(&tiles, &grid)),
        Err(Error::MixedZoom(1, 2))
    );
    let empty: Vec<[i64; 3]> = Vec::new();
    assert_eq!(
        TileSet::from_triples(&empty).and_then(|tiles| union(&tiles, &grid)),
        Err(Error::EmptySet)
    );
    let tiles = TileSet::from_triples(&[[0, 0, 25]]).unwrap();
    assert_eq!(union(&tiles, &grid), Err(Error::InvalidZoom(25)));
}

#[test]
fn test_union_tile_limits() {
    // eastern hemisphere of the two column WGS84 zoom 0
    let wgs84 = Grid::wgs84();
    let lines = vec!["[1, 0, 0]"];
    let tiles =
        TileSet::parse_with_limit(&lines, TileFormat::Json, |z| wgs84.tile_limit(z)).unwrap();
    let features = union(&tiles, &wgs84).unwrap();
    assert_eq!(features.len(), 1);
    let lons: Vec<f64> = rings(&features[0])[0].iter().map(|c| c.x).collect();
    let west = lons.iter().cloned().fold(f64::INFINITY, f64::min);
    let east = lons.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_abs_diff_eq!(west, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(east, 180.0, epsilon = 1e-9);

    assert_eq!(
        union(&tiles, &Grid::web_mercator()),
        Err(Error::MalformedTile("[1, 0, 0]".to_string()))
    );
}
