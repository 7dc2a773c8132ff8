//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Boolean tile grids

use crate::core::tile::Tile;

/// Dense boolean grid with one cell per tile
///
/// `origin` is the tile coordinate of cell (0, 0). Cells are stored row by row,
/// row 0 being the northernmost tile row.
#[derive(PartialEq, Clone, Debug)]
pub struct BoolGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    pub origin: (i64, i64),
}

impl BoolGrid {
    pub fn new(width: usize, height: usize, origin: (i64, i64)) -> BoolGrid {
        BoolGrid {
            width,
            height,
            cells: vec![false; width * height],
            origin,
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Cell value, `false` outside of the grid
    pub fn get(&self, col: i64, row: i64) -> bool {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return false;
        }
        self.cells[row as usize * self.width + col as usize]
    }
    pub fn set(&mut self, col: usize, row: usize) {
        self.cells[row * self.width + col] = true;
    }
    /// Set the cell of a tile. Tiles outside of the grid are ignored.
    pub fn set_tile(&mut self, x: u32, y: u32) {
        let col = x as i64 - self.origin.0;
        let row = y as i64 - self.origin.1;
        if col >= 0 && row >= 0 && col < self.width as i64 && row < self.height as i64 {
            self.set(col as usize, row as usize);
        }
    }
    /// Whether the cell of a tile is set
    pub fn has_tile(&self, x: u32, y: u32) -> bool {
        self.get(x as i64 - self.origin.0, y as i64 - self.origin.1)
    }
    /// Set cells as (col, row) in row-major order
    pub fn set_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(move |(i, _)| (i % width, i / width))
    }
    /// Tiles of all set cells in row-major order
    pub fn tiles(&self, zoom: u8) -> Vec<Tile> {
        self.set_cells()
            .map(|(col, row)| {
                Tile::new(
                    (col as i64 + self.origin.0) as u32,
                    (row as i64 + self.origin.1) as u32,
                    zoom,
                )
            })
            .collect()
    }
}
