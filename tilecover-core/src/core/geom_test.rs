//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::Error;
use crate::core::geom::{Coord, Feature, Geometry};
use approx::assert_abs_diff_eq;
use tile_grid::{Extent, Grid};

#[test]
fn test_geom_from_json() {
    let geom: Geometry =
        serde_json::from_value(json!({"type": "Point", "coordinates": [1.0, 2.0, 300.0]})).unwrap();
    assert_eq!(geom, Geometry::Point(Coord::new(1.0, 2.0)));

    let geom: Geometry = serde_json::from_value(json!({
        "type": "Polygon",
        "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]
    }))
    .unwrap();
    assert_eq!(geom.type_name(), "Polygon");
    assert_eq!(geom.coords().count(), 4);

    let geom: Result<Geometry, _> =
        serde_json::from_value(json!({"type": "Point", "coordinates": [1.0]}));
    assert!(geom.is_err());
    let geom: Result<Geometry, _> =
        serde_json::from_value(json!({"type": "Circle", "coordinates": [1.0, 2.0]}));
    assert!(geom.is_err());
}

#[test]
fn test_geom_to_json() {
    let geom = Geometry::LineString(vec![Coord::new(1.0, 2.0), Coord::new(3.5, 4.0)]);
    assert_eq!(
        serde_json::to_value(&geom).unwrap(),
        json!({"type": "LineString", "coordinates": [[1.0, 2.0], [3.5, 4.0]]})
    );

    let mut feature = Feature::new(Geometry::Point(Coord::new(1.0, 2.0)));
    assert_eq!(
        feature.to_json(),
        json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
            "properties": {}
        })
    );
    feature.properties.insert("name".to_string(), json!("a"));
    assert_eq!(feature.to_json()["properties"], json!({"name": "a"}));
}

#[test]
fn test_extent() {
    let geom = Geometry::MultiLineString(vec![
        vec![Coord::new(1.0, 5.0), Coord::new(3.0, 2.0)],
        vec![Coord::new(-1.0, 4.0)],
    ]);
    assert_eq!(
        geom.extent(),
        Some(Extent {
            minx: -1.0,
            miny: 2.0,
            maxx: 3.0,
            maxy: 5.0,
        })
    );
    assert_eq!(Geometry::LineString(Vec::new()).extent(), None);
}

#[test]
fn test_project() {
    let grid = Grid::web_mercator();
    let geom = Geometry::Point(Coord::new(180.0, 0.0));
    match geom.project(&grid).unwrap() {
        Geometry::Point(p) => {
            assert_abs_diff_eq!(p.x, 20037508.342789248, epsilon = 1e-6);
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-6);
        }
        _ => panic!(),
    }

    let grid = Grid::wgs84();
    let geom = Geometry::Polygon(vec![vec![Coord::new(1.0, 2.0), Coord::new(3.0, 4.0)]]);
    assert_eq!(geom.project(&grid), Ok(geom.clone()));

    let geom = Geometry::MultiPoint(vec![Coord::new(1.0, 2.0)]);
    assert_eq!(
        geom.project(&grid),
        Err(Error::UnsupportedGeometry("MultiPoint".to_string()))
    );
}
