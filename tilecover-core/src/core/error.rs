//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Errors raised by the burn, union and edges operations
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No features (or no coordinates) to work on
    #[error("empty input")]
    EmptyInput,
    /// Tile set without any tiles
    #[error("empty tile set")]
    EmptySet,
    /// Tile tuple with a width other than 3
    #[error("tiles must be of shape [x, y, z], got {0} values")]
    InvalidShape(usize),
    /// Tile string or structure which can't be parsed
    #[error("malformed tile '{0}'")]
    MalformedTile(String),
    /// Tiles of a set with different zoom levels
    #[error("all tile zooms must be the same (found {0} and {1})")]
    MixedZoom(u8, u8),
    /// Zoom level not defined by the grid
    #[error("invalid zoom level {0}")]
    InvalidZoom(i64),
    /// Tile range without extent in at least one axis
    #[error("degenerate tile range {0}x{1}")]
    DegenerateRange(i64, i64),
    /// Geometry of a supported type with unreadable coordinates
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Geometry type other than Point, LineString or Polygon
    #[error("unsupported geometry type '{0}'")]
    UnsupportedGeometry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
