//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Reading and flattening of GeoJSON features

use crate::core::error::{Error, Result};
use crate::core::geom::{Feature, Geometry, GEOMETRY_TYPES};
use serde_json::{Map, Value};

/// Feature objects of a GeoJSON document.
///
/// Accepts a FeatureCollection, a single Feature or a bare geometry (which
/// is wrapped into a Feature). Anything else yields no features.
pub fn feature_values(document: Value) -> Vec<Value> {
    let kind = document
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string);
    match kind.as_deref() {
        Some("FeatureCollection") => match document {
            Value::Object(mut collection) => match collection.remove("features") {
                Some(Value::Array(features)) => features,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        },
        Some("Feature") => vec![document],
        Some(_) => vec![json!({"type": "Feature", "geometry": document, "properties": {}})],
        None => Vec::new(),
    }
}

/// Split multi-part features into single-part features.
///
/// Point, LineString and Polygon features are passed through, every part of
/// a MultiPoint, MultiLineString or MultiPolygon becomes a feature of its
/// own carrying the original properties. Features without geometry or with
/// other geometry types are dropped, geometries with unreadable coordinates
/// yield `InvalidGeometry`.
pub fn normalize_features<I>(features: I) -> impl Iterator<Item = Result<Feature>>
where
    I: IntoIterator<Item = Value>,
{
    features
        .into_iter()
        .flat_map(|feature| match split_feature(feature) {
            Ok(parts) => parts.into_iter().map(Ok).collect::<Vec<_>>(),
            Err(e) => vec![Err(e)],
        })
}

fn split_feature(mut feature: Value) -> Result<Vec<Feature>> {
    let properties = match feature.get_mut("properties").map(Value::take) {
        Some(Value::Object(properties)) => properties,
        _ => Map::new(),
    };
    let geometry = match feature.get_mut("geometry").map(Value::take) {
        Some(geometry) => geometry,
        None => return Ok(Vec::new()),
    };
    let geometry_type = match geometry.get("type").and_then(Value::as_str) {
        Some(t) => t.to_string(),
        None => return Ok(Vec::new()),
    };
    if !GEOMETRY_TYPES.contains(&geometry_type.as_str()) {
        debug!("Skipping feature with geometry type {}", geometry_type);
        return Ok(Vec::new());
    }
    let geometry: Geometry = serde_json::from_value(geometry)
        .map_err(|e| Error::InvalidGeometry(format!("{} - {}", geometry_type, e)))?;
    let part = |geometry: Geometry| Feature {
        geometry,
        properties: properties.clone(),
    };
    let parts = match geometry {
        Geometry::MultiPoint(points) => points.into_iter().map(Geometry::Point).map(part).collect(),
        Geometry::MultiLineString(lines) => lines
            .into_iter()
            .map(Geometry::LineString)
            .map(part)
            .collect(),
        Geometry::MultiPolygon(polygons) => polygons
            .into_iter()
            .map(Geometry::Polygon)
            .map(part)
            .collect(),
        geometry => vec![Feature {
            geometry,
            properties,
        }],
    };
    Ok(parts)
}
