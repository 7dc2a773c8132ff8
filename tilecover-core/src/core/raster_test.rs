//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::raster::BoolGrid;
use crate::core::tile::Tile;

#[test]
fn test_grid_cells() {
    let mut grid = BoolGrid::new(3, 2, (10, 20));
    assert_eq!(grid.set_cells().count(), 0);
    grid.set(2, 0);
    grid.set(0, 1);
    grid.set(1, 0);
    assert!(grid.get(2, 0));
    assert!(!grid.get(0, 0));
    assert!(!grid.get(-1, 0));
    assert!(!grid.get(3, 0));
    assert!(!grid.get(0, 2));
    assert_eq!(grid.set_cells().collect::<Vec<_>>(), vec![(1, 0), (2, 0), (0, 1)]);
}

#[test]
fn test_grid_tiles() {
    let mut grid = BoolGrid::new(3, 2, (10, 20));
    grid.set_tile(12, 21);
    grid.set_tile(10, 20);
    // outside
    grid.set_tile(13, 20);
    grid.set_tile(9, 20);
    assert!(grid.has_tile(12, 21));
    assert!(!grid.has_tile(11, 21));
    assert!(!grid.has_tile(13, 20));
    assert_eq!(
        grid.tiles(7),
        vec![Tile::new(10, 20, 7), Tile::new(12, 21, 7)]
    );
}
