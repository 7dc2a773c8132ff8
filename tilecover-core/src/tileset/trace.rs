//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Connected regions of a tile grid and their boundary rings
//!
//! Rings are built from directed cell edges with the region on the right
//! (pixel space, y down). Outer rings therefore run clockwise and holes
//! counter-clockwise, on screen as well as on a north-up map.

use crate::core::raster::BoolGrid;
use std::collections::{HashMap, HashSet, VecDeque};

/// Grid cell as (col, row)
pub type Cell = (usize, usize);

/// Cell corner as (col, row)
pub type Vertex = (i64, i64);

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    fn left(self) -> Heading {
        match self {
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
            Heading::North => Heading::West,
        }
    }
    fn right(self) -> Heading {
        match self {
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
            Heading::North => Heading::East,
        }
    }
}

#[derive(Debug)]
struct Edge {
    from: Vertex,
    to: Vertex,
    heading: Heading,
}

/// Maximal 4-connected regions of set cells.
///
/// Regions are ordered by their first cell in row-major order, the cells of
/// each region are sorted row-major.
pub fn label_regions(grid: &BoolGrid) -> Vec<Vec<Cell>> {
    let width = grid.width();
    let mut seen = vec![false; width * grid.height()];
    let mut regions = Vec::new();
    for (col, row) in grid.set_cells() {
        if seen[row * width + col] {
            continue;
        }
        seen[row * width + col] = true;
        let mut region = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((col, row));
        while let Some((col, row)) = queue.pop_front() {
            region.push((col, row));
            let (c, r) = (col as i64, row as i64);
            for &(nc, nr) in &[(c, r - 1), (c + 1, r), (c, r + 1), (c - 1, r)] {
                if grid.get(nc, nr) {
                    let idx = nr as usize * width + nc as usize;
                    if !seen[idx] {
                        seen[idx] = true;
                        queue.push_back((nc as usize, nr as usize));
                    }
                }
            }
        }
        region.sort_by_key(|&(col, row)| (row, col));
        regions.push(region);
    }
    regions
}

/// Directed edges between region cells and non-region cells, in row-major
/// cell order and top, right, bottom, left per cell
fn boundary_edges(cells: &[Cell]) -> Vec<Edge> {
    let members: HashSet<Vertex> = cells.iter().map(|&(c, r)| (c as i64, r as i64)).collect();
    let mut edges = Vec::new();
    for &(col, row) in cells {
        let (c, r) = (col as i64, row as i64);
        if !members.contains(&(c, r - 1)) {
            edges.push(Edge {
                from: (c, r),
                to: (c + 1, r),
                heading: Heading::East,
            });
        }
        if !members.contains(&(c + 1, r)) {
            edges.push(Edge {
                from: (c + 1, r),
                to: (c + 1, r + 1),
                heading: Heading::South,
            });
        }
        if !members.contains(&(c, r + 1)) {
            edges.push(Edge {
                from: (c + 1, r + 1),
                to: (c, r + 1),
                heading: Heading::West,
            });
        }
        if !members.contains(&(c - 1, r)) {
            edges.push(Edge {
                from: (c, r + 1),
                to: (c, r),
                heading: Heading::North,
            });
        }
    }
    edges
}

/// Corner vertices of a closed edge path, closed by repeating the first one
fn ring_vertices(path: &[usize], edges: &[Edge]) -> Vec<Vertex> {
    let n = path.len();
    let mut ring: Vec<Vertex> = (0..n)
        .filter(|&i| edges[path[(i + n - 1) % n]].heading != edges[path[i]].heading)
        .map(|i| edges[path[i]].from)
        .collect();
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    ring
}

/// Twice the signed area of a closed ring, positive for clockwise rings with y down
pub fn shoelace(ring: &[Vertex]) -> i64 {
    ring.windows(2)
        .map(|w| w[0].0 * w[1].1 - w[1].0 * w[0].1)
        .sum()
}

/// Boundary rings of a 4-connected region, outer ring first.
///
/// At a vertex where two boundary edges leave, the walk turns left, so each
/// ring encloses one connected background area and stays simple.
pub fn trace_rings(cells: &[Cell]) -> Vec<Vec<Vertex>> {
    let edges = boundary_edges(cells);
    let mut outgoing: HashMap<Vertex, Vec<usize>> = HashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        outgoing.entry(edge.from).or_default().push(i);
    }
    let mut used = vec![false; edges.len()];
    let mut rings = Vec::new();
    for start in 0..edges.len() {
        // edge 0 is the top edge of the first cell, which lies on the outer ring
        if used[start] {
            continue;
        }
        let mut path = vec![start];
        let mut current = start;
        loop {
            let edge = &edges[current];
            let candidates = match outgoing.get(&edge.to) {
                Some(candidates) => candidates,
                None => break,
            };
            let next = [edge.heading.left(), edge.heading, edge.heading.right()]
                .iter()
                .find_map(|&heading| {
                    candidates
                        .iter()
                        .copied()
                        .find(|&i| edges[i].heading == heading && (i == start || !used[i]))
                });
            match next {
                Some(i) if i != start => {
                    used[i] = true;
                    path.push(i);
                    current = i;
                }
                _ => break,
            }
        }
        used[start] = true;
        rings.push(ring_vertices(&path, &edges));
    }
    rings
}
