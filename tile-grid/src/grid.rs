//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Tile grids

use std::f64::consts;

/// Earth radius used by Spherical Mercator
const EARTH_RADIUS: f64 = 6378137.0;

/// Geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

/// Min and max grid cell numbers
#[derive(PartialEq, Clone, Debug)]
pub struct ExtentInt {
    pub minx: u32,
    pub miny: u32,
    pub maxx: u32,
    pub maxy: u32,
}

// Max grid cell numbers
type CellIndex = (u32, u32);

/// Grid origin
#[derive(PartialEq, Clone, Debug)]
pub enum Origin {
    TopLeft,
    BottomLeft, //TopRight, BottomRight
}

/// Grid units
#[derive(PartialEq, Clone, Debug)]
pub enum Unit {
    Meters,
    Degrees,
    Feet,
}

/// Conversion between geodetic (lon/lat) and grid coordinates
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Projection {
    /// Spherical Mercator (EPSG:3857)
    SphericalMercator,
    /// Grid coordinates are longitude/latitude (EPSG:4326)
    Geographic,
    /// Input coordinates are expected in grid units already
    Native,
}

impl Projection {
    pub fn from_srid(srid: i32) -> Projection {
        match srid {
            3857 | 3785 | 900913 => Projection::SphericalMercator,
            4326 => Projection::Geographic,
            _ => Projection::Native,
        }
    }
}

/// Tile grid
#[derive(Clone, Debug)]
pub struct Grid {
    /// The width of an individual tile, in pixels.
    width: u16,
    /// The height of an individual tile, in pixels.
    height: u16,
    /// The geographical extent covered by the grid, in ground units (e.g. meters, degrees, feet, etc.).
    /// Must be specified as 4 floating point numbers ordered as minx, miny, maxx, maxy.
    /// The (minx,miny) point defines the origin of the grid, i.e. the pixel at the bottom left of the
    /// bottom-left most tile is always placed on the (minx,miny) geographical point.
    /// The (maxx,maxy) point is used to determine how many tiles there are for each zoom level.
    pub extent: Extent,
    /// Spatial reference system (EPSG code).
    pub srid: i32,
    /// Grid units
    pub units: Unit,
    /// This is a list of resolutions for each of the zoom levels defined by the grid.
    /// This must be supplied as a list of positive floating point values, ordered from largest to smallest.
    /// The largest value will correspond to the grid’s zoom level 0. Resolutions
    /// are expressed in “units-per-pixel”,
    /// depending on the unit used by the grid (e.g. resolutions are in meters per
    /// pixel for most grids used in webmapping).
    resolutions: Vec<f64>,
    /// maxx/maxy for each resolution
    level_max: Vec<CellIndex>,
    /// Grid origin
    pub origin: Origin,
    /// Geodetic conversion, derived from `srid`
    pub projection: Projection,
}

impl Grid {
    /// WGS84 grid
    pub fn wgs84() -> Grid {
        Grid::new(
            256,
            256,
            Extent {
                minx: -180.0,
                miny: -90.0,
                maxx: 180.0,
                maxy: 90.0,
            },
            4326,
            Unit::Degrees,
            vec![
                0.703125000000000,
                0.351562500000000,
                0.175781250000000,
                8.78906250000000e-2,
                4.39453125000000e-2,
                2.19726562500000e-2,
                1.09863281250000e-2,
                5.49316406250000e-3,
                2.74658203125000e-3,
                1.37329101562500e-3,
                6.86645507812500e-4,
                3.43322753906250e-4,
                1.71661376953125e-4,
                8.58306884765625e-5,
                4.29153442382812e-5,
                2.14576721191406e-5,
                1.07288360595703e-5,
                5.36441802978516e-6,
            ],
            Origin::BottomLeft,
        )
    }

    /// Web Mercator grid (Google maps compatible)
    pub fn web_mercator() -> Grid {
        Grid::new(
            256,
            256,
            Extent {
                minx: -20037508.3427892480,
                miny: -20037508.3427892480,
                maxx: 20037508.3427892480,
                maxy: 20037508.3427892480,
            },
            3857,
            Unit::Meters,
            // for calculation see fn test_resolutions
            vec![
                156543.0339280410,
                78271.5169640205,
                39135.75848201025,
                19567.879241005125,
                9783.939620502562,
                4891.969810251281,
                2445.9849051256406,
                1222.9924525628203,
                611.4962262814101,
                305.7481131407051,
                152.87405657035254,
                76.43702828517627,
                38.218514142588134,
                19.109257071294067,
                9.554628535647034,
                4.777314267823517,
                2.3886571339117584,
                1.1943285669558792,
                0.5971642834779396,
                0.2985821417389698,
                0.1492910708694849,
                0.07464553543474245,
                0.037322767717371225,
            ],
            Origin::BottomLeft,
        )
    }

    /// Predefined grid by name (`web_mercator`, `wgs84`)
    pub fn predefined(name: &str) -> Option<Grid> {
        match name {
            "web_mercator" => Some(Grid::web_mercator()),
            "wgs84" => Some(Grid::wgs84()),
            _ => None,
        }
    }

    pub fn new(
        width: u16,
        height: u16,
        extent: Extent,
        srid: i32,
        units: Unit,
        resolutions: Vec<f64>,
        origin: Origin,
    ) -> Grid {
        let mut grid = Grid {
            width,
            height,
            extent,
            srid,
            units,
            resolutions,
            origin,
            level_max: Vec::new(),
            projection: Projection::from_srid(srid),
        };
        grid.level_max = grid.level_max();
        grid
    }
    pub fn nlevels(&self) -> u8 {
        self.resolutions.len() as u8
    }
    pub fn maxzoom(&self) -> u8 {
        self.nlevels() - 1
    }
    /// Whether the grid defines a resolution for `zoom`
    pub fn has_level(&self, zoom: u8) -> bool {
        (zoom as usize) < self.resolutions.len()
    }
    /// Width and height of one tile in ground units
    pub fn tile_size(&self, zoom: u8) -> (f64, f64) {
        let res = self.resolutions[zoom as usize];
        (self.width as f64 * res, self.height as f64 * res)
    }
    /// (maxx, maxy) of grid level
    pub fn level_limit(&self, zoom: u8) -> CellIndex {
        self.level_max[zoom as usize]
    }
    fn compute_level_limit(&self, zoom: u8) -> CellIndex {
        let (unitwidth, unitheight) = self.tile_size(zoom);
        let maxy =
            ((self.extent.maxy - self.extent.miny - 0.01 * unitheight) / unitheight).ceil() as u32;
        let maxx =
            ((self.extent.maxx - self.extent.minx - 0.01 * unitwidth) / unitwidth).ceil() as u32;
        (maxx, maxy)
    }
    /// (maxx, maxy) of all grid levels
    fn level_max(&self) -> Vec<CellIndex> {
        (0..self.nlevels())
            .map(|zoom| self.compute_level_limit(zoom))
            .collect()
    }
    /// Northern edge of the top tile row
    fn level_top(&self, zoom: u8) -> f64 {
        match self.origin {
            Origin::TopLeft => self.extent.maxy,
            Origin::BottomLeft => {
                let (_, unitheight) = self.tile_size(zoom);
                self.extent.miny + self.level_limit(zoom).1 as f64 * unitheight
            }
        }
    }
    /// Upper-left corner of a tile in XYZ adressing scheme (row 0 is north), in grid units.
    ///
    /// `xtile`/`ytile` may be one past the last tile of the level, which yields
    /// the lower-right corner of the level.
    pub fn tile_origin_xyz(&self, xtile: u32, ytile: u32, zoom: u8) -> (f64, f64) {
        let (unitwidth, unitheight) = self.tile_size(zoom);
        (
            self.extent.minx + xtile as f64 * unitwidth,
            self.level_top(zoom) - ytile as f64 * unitheight,
        )
    }
    /// Extent of a given tile in XYZ adressing scheme
    pub fn tile_extent_xyz(&self, xtile: u32, ytile: u32, zoom: u8) -> Extent {
        let (minx, maxy) = self.tile_origin_xyz(xtile, ytile, zoom);
        let (maxx, miny) = self.tile_origin_xyz(xtile + 1, ytile + 1, zoom);
        Extent {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
    /// XYZ tile containing a point given in grid units.
    ///
    /// Points outside of the grid are clamped to the nearest tile of the level.
    pub fn tile_xyz(&self, x: f64, y: f64, zoom: u8) -> CellIndex {
        let (unitwidth, unitheight) = self.tile_size(zoom);
        let (level_maxx, level_maxy) = self.level_limit(zoom);
        let col = ((x - self.extent.minx) / unitwidth).floor();
        let row = ((self.level_top(zoom) - y) / unitheight).floor();
        (clamp_cell(col, level_maxx), clamp_cell(row, level_maxy))
    }
    /// Convert geodetic coordinates (lon, lat) into grid units
    pub fn to_projected(&self, lon: f64, lat: f64) -> (f64, f64) {
        match self.projection {
            Projection::SphericalMercator => lonlat_to_merc(lon, lat),
            Projection::Geographic | Projection::Native => (lon, lat),
        }
    }
    /// Convert grid units into geodetic coordinates (lon, lat)
    pub fn to_geodetic(&self, x: f64, y: f64) -> (f64, f64) {
        match self.projection {
            Projection::SphericalMercator => merc_to_lonlat(x, y),
            Projection::Geographic | Projection::Native => (x, y),
        }
    }
    /// Grid extent in geodetic coordinates
    pub fn geodetic_extent(&self) -> Extent {
        let (minx, miny) = self.to_geodetic(self.extent.minx, self.extent.miny);
        let (maxx, maxy) = self.to_geodetic(self.extent.maxx, self.extent.maxy);
        Extent {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
}

fn clamp_cell(cell: f64, limit: u32) -> u32 {
    // NaN ends up in cell 0
    if cell.is_nan() || cell < 0.0 {
        0
    } else if cell >= limit as f64 {
        limit.saturating_sub(1)
    } else {
        cell as u32
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Returns (lon, lat) in degrees of a Spherical Mercator position
pub fn merc_to_lonlat(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - consts::PI * 0.5).to_degrees();
    (lon, lat)
}
