//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::Result;
use crate::core::geom::{Coord, Feature, Geometry};
use crate::core::scheme::TileScheme;
use crate::core::tile::TileSet;
use crate::core::transform::{make_transform, transform_xy};
use crate::tileset::trace::{label_regions, trace_rings};
use rayon::prelude::*;

/// Polygons bounding the tiles of a set.
///
/// Every 4-connected group of tiles becomes one Polygon feature in geodetic
/// coordinates, outer ring first. Features are ordered by the northernmost,
/// then westernmost tile of their group.
pub fn union<S: TileScheme + Sync + ?Sized>(tiles: &TileSet, scheme: &S) -> Result<Vec<Feature>> {
    let zoom = tiles.zoom();
    tiles.check_limit(scheme.tile_limit(zoom)?)?;
    let transform = make_transform(&tiles.range(), zoom, scheme)?;
    let grid = tiles.to_grid(0);
    let regions = label_regions(&grid);
    debug!(
        "Tracing {} regions of {} tiles at zoom {}",
        regions.len(),
        tiles.tiles().len(),
        zoom
    );
    let features = regions
        .par_iter()
        .map(|cells| {
            let rings = trace_rings(cells)
                .into_iter()
                .map(|ring| {
                    ring.into_iter()
                        .map(|(col, row)| {
                            let (x, y) = transform_xy(&transform, col as f64, row as f64);
                            Coord::from(scheme.to_geodetic(x, y))
                        })
                        .collect()
                })
                .collect();
            Feature::new(Geometry::Polygon(rings))
        })
        .collect();
    Ok(features)
}
