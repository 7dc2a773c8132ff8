//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tiles and tile sets

use crate::core::error::{Error, Result};
use crate::core::raster::BoolGrid;
use regex::Regex;
use serde_json::Value;
use std::convert::TryFrom;
use std::fmt;
use tile_grid::ExtentInt;

/// Highest zoom level with tile indices representable as `u32`
pub const MAX_ZOOM: u8 = 31;

/// Tiles per axis of a square quadtree at `zoom`
pub fn quadtree_limit(zoom: u8) -> (u32, u32) {
    let n = 1u32 << zoom.min(MAX_ZOOM);
    (n, n)
}

/// Half-open tile index rectangle (`maxx`/`maxy` are exclusive)
pub type TileRange = ExtentInt;

/// Tile address in a quadtree grid (XYZ scheme, row 0 is north)
///
/// Ordering is by zoom first, then x, then y.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Tile {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl Tile {
    pub fn new(x: u32, y: u32, z: u8) -> Tile {
        Tile { z, x, y }
    }
    /// JSON array `[x, y, z]`
    pub fn to_json(&self) -> Value {
        json!([self.x, self.y, self.z])
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// Tile input notation
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum TileFormat {
    /// JSON array `[x, y, z]` per line
    Json,
    /// Tile name `x-y-z` per line, trailing text like a file extension is ignored
    Names,
}

impl Default for TileFormat {
    fn default() -> Self {
        TileFormat::Json
    }
}

lazy_static! {
    static ref TILE_NAME: Regex = Regex::new(r"^(\d+)-(\d+)-(\d+)").unwrap();
}

fn parse_name(name: &str) -> Result<Tile> {
    let malformed = || Error::MalformedTile(name.to_string());
    let caps = TILE_NAME.captures(name).ok_or_else(malformed)?;
    let x = caps[1].parse::<u32>().map_err(|_| malformed())?;
    let y = caps[2].parse::<u32>().map_err(|_| malformed())?;
    let z = caps[3].parse::<u8>().map_err(|_| malformed())?;
    Ok(Tile::new(x, y, z))
}

fn parse_json(line: &str) -> Result<Tile> {
    let value: Value =
        serde_json::from_str(line).map_err(|_| Error::MalformedTile(line.to_string()))?;
    match value {
        Value::Array(values) => tile_from_values(&values, line),
        _ => Err(Error::MalformedTile(line.to_string())),
    }
}

fn tile_from_values(values: &[Value], source: &str) -> Result<Tile> {
    let numbers = values
        .iter()
        .map(|v| v.as_i64().ok_or_else(|| Error::MalformedTile(source.to_string())))
        .collect::<Result<Vec<_>>>()?;
    tile_from_triple(&numbers)
}

fn tile_from_triple(triple: &[i64]) -> Result<Tile> {
    if triple.len() != 3 {
        return Err(Error::InvalidShape(triple.len()));
    }
    let malformed = || Error::MalformedTile(format!("{:?}", triple));
    let x = u32::try_from(triple[0]).map_err(|_| malformed())?;
    let y = u32::try_from(triple[1]).map_err(|_| malformed())?;
    let z = u8::try_from(triple[2]).map_err(|_| malformed())?;
    Ok(Tile::new(x, y, z))
}

/// Non-empty sequence of tiles sharing one zoom level
#[derive(PartialEq, Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
    zoom: u8,
}

impl TileSet {
    /// Create a tile set, checking that all tiles share one zoom level and
    /// lie within the square quadtree of that level
    pub fn new(tiles: Vec<Tile>) -> Result<TileSet> {
        TileSet::with_limit(tiles, |zoom| Ok(quadtree_limit(zoom)))
    }

    /// Create a tile set with the (columns, rows) of its zoom level given by `limit`
    pub fn with_limit<F>(tiles: Vec<Tile>, limit: F) -> Result<TileSet>
    where
        F: Fn(u8) -> Result<(u32, u32)>,
    {
        let first = *tiles.first().ok_or(Error::EmptySet)?;
        let zoom = first.z;
        if let Some(other) = tiles.iter().find(|t| t.z != zoom) {
            return Err(Error::MixedZoom(zoom, other.z));
        }
        if zoom > MAX_ZOOM {
            return Err(Error::MalformedTile(first.to_string()));
        }
        let tileset = TileSet { tiles, zoom };
        tileset.check_limit(limit(zoom)?)?;
        Ok(tileset)
    }

    /// Fails with the first tile outside of `columns` x `rows`
    pub fn check_limit(&self, (columns, rows): (u32, u32)) -> Result<()> {
        match self.tiles.iter().find(|t| t.x >= columns || t.y >= rows) {
            Some(tile) => Err(Error::MalformedTile(tile.to_string())),
            None => Ok(()),
        }
    }

    /// Create a tile set from `[x, y, z]` tuples
    pub fn from_triples<T: AsRef<[i64]>>(triples: &[T]) -> Result<TileSet> {
        let tiles = triples
            .iter()
            .map(|t| tile_from_triple(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        TileSet::new(tiles)
    }

    /// Parse tile lines. Blank lines are skipped.
    pub fn parse<S: AsRef<str>>(lines: &[S], format: TileFormat) -> Result<TileSet> {
        TileSet::parse_with_limit(lines, format, |zoom| Ok(quadtree_limit(zoom)))
    }

    /// Parse tile lines, checking tiles against the level size given by `limit`
    pub fn parse_with_limit<S, F>(lines: &[S], format: TileFormat, limit: F) -> Result<TileSet>
    where
        S: AsRef<str>,
        F: Fn(u8) -> Result<(u32, u32)>,
    {
        let tiles = lines
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| !line.is_empty())
            .map(|line| match format {
                TileFormat::Json => parse_json(line),
                TileFormat::Names => parse_name(line),
            })
            .collect::<Result<Vec<_>>>()?;
        TileSet::with_limit(tiles, limit)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile index range covering all tiles
    pub fn range(&self) -> TileRange {
        let first = &self.tiles[0];
        let init = TileRange {
            minx: first.x,
            miny: first.y,
            maxx: first.x + 1,
            maxy: first.y + 1,
        };
        self.tiles.iter().fold(init, |range, t| TileRange {
            minx: range.minx.min(t.x),
            miny: range.miny.min(t.y),
            maxx: range.maxx.max(t.x + 1),
            maxy: range.maxy.max(t.y + 1),
        })
    }

    /// Boolean grid over the tile range with `pad` empty cells on each side
    pub fn to_grid(&self, pad: u32) -> BoolGrid {
        let range = self.range();
        let pad = pad as usize;
        let width = (range.maxx - range.minx) as usize + 2 * pad;
        let height = (range.maxy - range.miny) as usize + 2 * pad;
        let mut grid = BoolGrid::new(
            width,
            height,
            (
                range.minx as i64 - pad as i64,
                range.miny as i64 - pad as i64,
            ),
        );
        for tile in &self.tiles {
            grid.set_tile(tile.x, tile.y);
        }
        grid
    }
}
