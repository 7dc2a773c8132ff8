//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::Error;
use crate::core::geom::{Coord, Geometry};
use crate::core::normalize::{feature_values, normalize_features};
use serde_json::Value;

fn point(x: f64, y: f64) -> Value {
    json!({"type": "Point", "coordinates": [x, y]})
}

#[test]
fn test_feature_values() {
    let collection = json!({
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": point(1.0, 2.0), "properties": {}},
            {"type": "Feature", "geometry": point(3.0, 4.0), "properties": {}}
        ]
    });
    assert_eq!(feature_values(collection).len(), 2);

    let feature = json!({"type": "Feature", "geometry": point(1.0, 2.0), "properties": {"a": 1}});
    assert_eq!(feature_values(feature.clone()), vec![feature]);

    let features = feature_values(point(1.0, 2.0));
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["type"], "Feature");
    assert_eq!(features[0]["geometry"], point(1.0, 2.0));

    assert!(feature_values(json!({"features": []})).is_empty());
    assert!(feature_values(json!([1, 2, 3])).is_empty());
}

#[test]
fn test_split_multi_geometries() {
    let features = vec![
        json!({
            "type": "Feature",
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                    [[[5, 5], [6, 5], [6, 6], [5, 5]]]
                ]
            },
            "properties": {"name": "islands"}
        }),
        json!({
            "type": "Feature",
            "geometry": {"type": "MultiPoint", "coordinates": [[1, 2], [3, 4], [5, 6]]}
        }),
        json!({"type": "Feature", "geometry": point(7.0, 8.0)}),
    ];
    let normalized: Vec<_> = normalize_features(features)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(normalized.len(), 6);
    assert_eq!(normalized[0].geometry.type_name(), "Polygon");
    assert_eq!(normalized[1].geometry.type_name(), "Polygon");
    assert_eq!(normalized[0].properties["name"], "islands");
    assert_eq!(normalized[1].properties["name"], "islands");
    assert_eq!(normalized[3].geometry, Geometry::Point(Coord::new(3.0, 4.0)));
    assert!(normalized[3].properties.is_empty());
    assert_eq!(normalized[5].geometry, Geometry::Point(Coord::new(7.0, 8.0)));
}

#[test]
fn test_drop_unsupported() {
    let features = vec![
        json!({
            "type": "Feature",
            "geometry": {"type": "GeometryCollection", "geometries": [point(1.0, 2.0)]},
            "properties": {}
        }),
        json!({"type": "Feature", "geometry": null, "properties": {}}),
        json!({"type": "Feature", "properties": {}}),
        json!({"type": "Feature", "geometry": {"coordinates": [1.0, 2.0]}}),
        json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[1, 2], [3, 4]]}
        }),
    ];
    let normalized: Vec<_> = normalize_features(features)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].geometry.type_name(), "LineString");
}

#[test]
fn test_invalid_coordinates() {
    let features = vec![
        json!({"type": "Feature", "geometry": point(1.0, 2.0)}),
        json!({
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[1.0, 2.0]]}
        }),
        json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0]}}),
    ];
    let normalized: Vec<_> = normalize_features(features).collect();
    assert_eq!(normalized.len(), 3);
    assert!(normalized[0].is_ok());
    match &normalized[1] {
        Err(Error::InvalidGeometry(msg)) => assert!(msg.starts_with("Polygon - ")),
        other => panic!("unexpected {:?}", other),
    }
    match &normalized[2] {
        Err(Error::InvalidGeometry(msg)) => assert!(msg.starts_with("Point - ")),
        other => panic!("unexpected {:?}", other),
    }

    let features = vec![json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": []}
    })];
    let result: Result<Vec<_>, _> = normalize_features(features).collect();
    assert!(result.is_err());
}
