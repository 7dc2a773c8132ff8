//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tiles intersecting vector geometries

mod extent;
mod rasterize;

pub use self::extent::{find_extrema, EPSILON};
pub use self::rasterize::{Rasterizer, TOUCH_TOLERANCE};

use crate::core::error::Result;
use crate::core::geom::Feature;
use crate::core::raster::BoolGrid;
use crate::core::scheme::TileScheme;
use crate::core::tile::Tile;
use crate::core::transform::{make_transform, range_size, tile_range};

/// Tiles at `zoom` touched by any of the (geodetic) features.
///
/// Tiles are returned in row-major order, north to south and west to east.
pub fn burn<S: TileScheme + ?Sized>(features: &[Feature], zoom: u8, scheme: &S) -> Result<Vec<Tile>> {
    let bounds = find_extrema(features, scheme)?;
    let range = tile_range(&bounds, zoom, scheme)?;
    let transform = make_transform(&range, zoom, scheme)?;
    let (width, height) = range_size(&range);
    debug!(
        "Burning {} features into {}x{} tiles at zoom {}",
        features.len(),
        width,
        height,
        zoom
    );
    let grid = BoolGrid::new(
        width as usize,
        height as usize,
        (range.minx as i64, range.miny as i64),
    );
    let mut rasterizer = Rasterizer::new(grid, &transform)?;
    for feature in features {
        let geometry = feature.geometry.project(scheme)?;
        rasterizer.rasterize(&geometry)?;
    }
    Ok(rasterizer.finish().tiles(zoom))
}
