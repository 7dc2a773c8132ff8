//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile ranges and pixel/projected transforms

use crate::core::error::{Error, Result};
use crate::core::scheme::TileScheme;
use crate::core::tile::TileRange;
use euclid::{Transform2D, UnknownUnit};
use tile_grid::Extent;

/// Affine transform between pixel (col, row) and projected (x, y) coordinates
pub type Transform = Transform2D<f64, UnknownUnit, UnknownUnit>;
type EuclidPoint = euclid::Point2D<f64, UnknownUnit>;

/// Apply `transform` to a single position
pub fn transform_xy(transform: &Transform, x: f64, y: f64) -> (f64, f64) {
    transform.transform_point(EuclidPoint::new(x, y)).to_tuple()
}

/// Width and height of a tile range, in tiles
pub fn range_size(range: &TileRange) -> (i64, i64) {
    (
        range.maxx as i64 - range.minx as i64,
        range.maxy as i64 - range.miny as i64,
    )
}

/// Tiles covering a geodetic bounding box.
///
/// The tile under the upper-left corner is the minimum, the tile under the
/// lower-right corner plus one is the (exclusive) maximum.
pub fn tile_range<S: TileScheme + ?Sized>(
    bounds: &Extent,
    zoom: u8,
    scheme: &S,
) -> Result<TileRange> {
    let min_tile = scheme.tile(bounds.minx, bounds.maxy, zoom)?;
    let max_tile = scheme.tile(bounds.maxx, bounds.miny, zoom)?;
    Ok(TileRange {
        minx: min_tile.x,
        miny: min_tile.y,
        maxx: max_tile.x + 1,
        maxy: max_tile.y + 1,
    })
}

/// Transform from pixels of a grid with one pixel per tile of `range` into
/// projected coordinates. Row 0 is north, so the y scale is negative.
pub fn make_transform<S: TileScheme + ?Sized>(
    range: &TileRange,
    zoom: u8,
    scheme: &S,
) -> Result<Transform> {
    let (width, height) = range_size(range);
    if width <= 0 || height <= 0 {
        return Err(Error::DegenerateRange(width, height));
    }
    let (ulx, uly) = scheme.tile_origin(range.minx, range.miny, zoom)?;
    let (lrx, lry) = scheme.tile_origin(range.maxx, range.maxy, zoom)?;
    let xcell = (lrx - ulx) / width as f64;
    let ycell = (uly - lry) / height as f64;
    Ok(Transform::new(xcell, 0.0, 0.0, -ycell, ulx, uly))
}
