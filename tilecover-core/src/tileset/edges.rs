//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::raster::BoolGrid;
use crate::core::tile::{Tile, TileSet};
use rayon::prelude::*;

const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn is_edge(grid: &BoolGrid, tile: &Tile) -> bool {
    let col = tile.x as i64 - grid.origin.0;
    let row = tile.y as i64 - grid.origin.1;
    NEIGHBOURS
        .iter()
        .any(|(dx, dy)| !grid.get(col + dx, row + dy))
}

/// Tiles with at least one of their 8 neighbours missing from the set,
/// in input order
pub fn find_edges(tiles: &TileSet) -> Vec<Tile> {
    let grid = tiles.to_grid(1);
    debug!(
        "Searching edges of {} tiles in {}x{} grid",
        tiles.tiles().len(),
        grid.width(),
        grid.height()
    );
    tiles
        .tiles()
        .par_iter()
        .filter(|tile| is_edge(&grid, tile))
        .copied()
        .collect()
}
