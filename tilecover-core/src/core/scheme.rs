//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{Error, Result};
use crate::core::tile::Tile;
use std::convert::TryFrom;
use tile_grid::{Extent, Grid};

/// Tiling scheme providing geodetic, projected and tile conversions
pub trait TileScheme {
    /// Whether the scheme defines zoom level `zoom`
    fn has_zoom(&self, zoom: u8) -> bool;
    /// Scheme bounds in geodetic coordinates
    fn bbox(&self) -> Extent;
    /// Tile containing a geodetic point
    fn tile(&self, lon: f64, lat: f64, zoom: u8) -> Result<Tile>;
    /// Projected coordinates of the upper-left corner of a tile
    fn tile_origin(&self, x: u32, y: u32, zoom: u8) -> Result<(f64, f64)>;
    /// Number of (columns, rows) at `zoom`
    fn tile_limit(&self, zoom: u8) -> Result<(u32, u32)>;
    fn to_projected(&self, lon: f64, lat: f64) -> (f64, f64);
    fn to_geodetic(&self, x: f64, y: f64) -> (f64, f64);

    /// Validate a zoom level given as signed integer
    fn check_zoom(&self, zoom: i64) -> Result<u8> {
        match u8::try_from(zoom) {
            Ok(z) if self.has_zoom(z) => Ok(z),
            _ => Err(Error::InvalidZoom(zoom)),
        }
    }
}

impl TileScheme for Grid {
    fn has_zoom(&self, zoom: u8) -> bool {
        self.has_level(zoom)
    }
    fn bbox(&self) -> Extent {
        self.geodetic_extent()
    }
    fn tile(&self, lon: f64, lat: f64, zoom: u8) -> Result<Tile> {
        self.check_zoom(zoom as i64)?;
        let (x, y) = self.to_projected(lon, lat);
        let (xtile, ytile) = self.tile_xyz(x, y, zoom);
        Ok(Tile::new(xtile, ytile, zoom))
    }
    fn tile_origin(&self, x: u32, y: u32, zoom: u8) -> Result<(f64, f64)> {
        self.check_zoom(zoom as i64)?;
        Ok(self.tile_origin_xyz(x, y, zoom))
    }
    fn tile_limit(&self, zoom: u8) -> Result<(u32, u32)> {
        self.check_zoom(zoom as i64)?;
        Ok(self.level_limit(zoom))
    }
    fn to_projected(&self, lon: f64, lat: f64) -> (f64, f64) {
        Grid::to_projected(self, lon, lat)
    }
    fn to_geodetic(&self, x: f64, y: f64) -> (f64, f64) {
        Grid::to_geodetic(self, x, y)
    }
}
