//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{Error, Result};
use crate::core::geom::Feature;
use crate::core::scheme::TileScheme;
use tile_grid::Extent;

/// Inward margin keeping bounds off exact tile edges
pub const EPSILON: f64 = 1.0e-10;

/// Bounds `min..max` moved inward by `EPSILON`, or outward if that would
/// leave less than `EPSILON` between them
fn margin(min: f64, max: f64) -> (f64, f64) {
    if max - min < 2.0 * EPSILON {
        (min - EPSILON, max + EPSILON)
    } else {
        (min + EPSILON, max - EPSILON)
    }
}

/// Geodetic bounds of all features, clamped to the latitude range of the
/// scheme.
///
/// Bounds are shrunk by `EPSILON` so geometries ending on a tile edge don't
/// pull in the neighbouring tile. On an axis where the bounds are degenerate
/// (a point, or a line along a parallel or meridian) they are grown instead,
/// so a geometry exactly on a tile edge or corner covers the tiles on both
/// sides.
pub fn find_extrema<S: TileScheme + ?Sized>(features: &[Feature], scheme: &S) -> Result<Extent> {
    let extent = features
        .iter()
        .filter_map(|f| f.geometry.extent())
        .fold(None, |acc: Option<Extent>, e| match acc {
            None => Some(e),
            Some(acc) => Some(Extent {
                minx: acc.minx.min(e.minx),
                miny: acc.miny.min(e.miny),
                maxx: acc.maxx.max(e.maxx),
                maxy: acc.maxy.max(e.maxy),
            }),
        })
        .ok_or(Error::EmptyInput)?;
    let bbox = scheme.bbox();
    let (minx, maxx) = margin(extent.minx, extent.maxx);
    let (miny, maxy) = margin(extent.miny, extent.maxy);
    Ok(Extent {
        minx,
        miny: miny.max(bbox.miny),
        maxx,
        maxy: maxy.min(bbox.maxy),
    })
}
