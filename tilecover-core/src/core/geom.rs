//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{Error, Result};
use crate::core::scheme::TileScheme;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde_json::{Map, Value};
use tile_grid::Extent;

/// 2D position
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Coord {
        Coord { x, y }
    }
}

// GeoJSON positions may carry additional ordinates, which are ignored
impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Coord, D::Error> {
        let ordinates = Vec::<f64>::deserialize(deserializer)?;
        if ordinates.len() < 2 {
            return Err(de::Error::invalid_length(
                ordinates.len(),
                &"a position with at least 2 ordinates",
            ));
        }
        Ok(Coord::new(ordinates[0], ordinates[1]))
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.x)?;
        tup.serialize_element(&self.y)?;
        tup.end()
    }
}

/// GeoJSON geometry
///
/// Only `Point`, `LineString` and `Polygon` can be burned, multi-part
/// geometries have to be split with `normalize_features` first.
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coord),
    LineString(Vec<Coord>),
    /// Outer ring followed by holes
    Polygon(Vec<Vec<Coord>>),
    MultiPoint(Vec<Coord>),
    MultiLineString(Vec<Vec<Coord>>),
    MultiPolygon(Vec<Vec<Vec<Coord>>>),
}

pub(crate) const GEOMETRY_TYPES: [&str; 6] = [
    "Point",
    "LineString",
    "Polygon",
    "MultiPoint",
    "MultiLineString",
    "MultiPolygon",
];

impl Geometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// All positions of the geometry
    pub fn coords<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Coord> + 'a> {
        match self {
            Geometry::Point(p) => Box::new(std::iter::once(p)),
            Geometry::LineString(points) | Geometry::MultiPoint(points) => Box::new(points.iter()),
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => {
                Box::new(rings.iter().flatten())
            }
            Geometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten().flatten()),
        }
    }

    /// Bounding box of all positions, `None` for empty geometries
    pub fn extent(&self) -> Option<Extent> {
        self.coords().fold(None, |extent, c| match extent {
            None => Some(Extent {
                minx: c.x,
                miny: c.y,
                maxx: c.x,
                maxy: c.y,
            }),
            Some(e) => Some(Extent {
                minx: e.minx.min(c.x),
                miny: e.miny.min(c.y),
                maxx: e.maxx.max(c.x),
                maxy: e.maxy.max(c.y),
            }),
        })
    }

    /// Project geodetic coordinates into the scheme's projected space
    pub fn project<S: TileScheme + ?Sized>(&self, scheme: &S) -> Result<Geometry> {
        let project = |c: &Coord| Coord::from(scheme.to_projected(c.x, c.y));
        let project_line = |line: &Vec<Coord>| line.iter().map(project).collect::<Vec<_>>();
        match self {
            Geometry::Point(p) => Ok(Geometry::Point(project(p))),
            Geometry::LineString(line) => Ok(Geometry::LineString(project_line(line))),
            Geometry::Polygon(rings) => Ok(Geometry::Polygon(
                rings.iter().map(project_line).collect(),
            )),
            _ => Err(Error::UnsupportedGeometry(self.type_name().to_string())),
        }
    }
}

/// Geometry with properties
#[derive(PartialEq, Clone, Debug)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Feature {
        Feature {
            geometry,
            properties: Map::new(),
        }
    }
    /// GeoJSON Feature object
    pub fn to_json(&self) -> Value {
        json!({
            "type": "Feature",
            "geometry": self.geometry,
            "properties": self.properties,
        })
    }
}
