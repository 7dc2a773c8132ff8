//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! All-touched scan conversion into tile grids
//!
//! Contact is tested against cell footprints grown (points, lines) or
//! shrunk (polygons) by `TOUCH_TOLERANCE` pixels. Lines lying on a shared
//! tile edge burn both tiles, polygons sharing only an edge or a corner with
//! a tile don't burn it.

use crate::core::error::{Error, Result};
use crate::core::geom::{Coord, Geometry};
use crate::core::raster::BoolGrid;
use crate::core::transform::{transform_xy, Transform};
use std::cmp::Ordering;

/// Contact tolerance in pixels
pub const TOUCH_TOLERANCE: f64 = 1.0e-6;

/// Position in pixel space
type Pixel = (f64, f64);

/// Cells `first..=last`, clamped to `0..limit`
fn clamp_span(first: f64, last: f64, limit: usize) -> Option<(usize, usize)> {
    let first = first.max(0.0);
    let last = last.min(limit as f64 - 1.0);
    if limit == 0 || first.is_nan() || last.is_nan() || first > last {
        return None;
    }
    Some((first as usize, last as usize))
}

/// Cells `c` with `lo <= c <= hi`
fn cell_span(lo: f64, hi: f64, limit: usize) -> Option<(usize, usize)> {
    clamp_span(lo.ceil(), hi.floor(), limit)
}

fn is_finite(p: Pixel) -> bool {
    p.0.is_finite() && p.1.is_finite()
}

/// x range of the part of segment `p0`-`p1` within `lo <= y <= hi`
fn clip_to_band(p0: Pixel, p1: Pixel, lo: f64, hi: f64) -> Option<(f64, f64)> {
    let dy = p1.1 - p0.1;
    let (t0, t1) = if dy == 0.0 {
        if p0.1 < lo || p0.1 > hi {
            return None;
        }
        (0.0, 1.0)
    } else {
        let ta = (lo - p0.1) / dy;
        let tb = (hi - p0.1) / dy;
        (ta.min(tb).max(0.0), ta.max(tb).min(1.0))
    };
    if t0 > t1 {
        return None;
    }
    let xa = p0.0 + t0 * (p1.0 - p0.0);
    let xb = p0.0 + t1 * (p1.0 - p0.0);
    Some((xa.min(xb), xa.max(xb)))
}

/// Ring edges, with a closing edge if the last point doesn't repeat the first
fn ring_edges(ring: &[Pixel]) -> impl Iterator<Item = (Pixel, Pixel)> + '_ {
    let len = ring.len();
    let closed = len > 1 && ring[0] == ring[len - 1];
    let n = if closed { len - 1 } else { len };
    (0..n).map(move |i| (ring[i], ring[(i + 1) % len]))
}

/// Burns projected geometries into a grid with one cell per tile
pub struct Rasterizer {
    grid: BoolGrid,
    geo_to_pix: Transform,
}

impl Rasterizer {
    /// `pix_to_geo` maps grid cells to projected coordinates
    pub fn new(grid: BoolGrid, pix_to_geo: &Transform) -> Result<Rasterizer> {
        let geo_to_pix = pix_to_geo.inverse().ok_or_else(|| {
            Error::DegenerateRange(grid.width() as i64, grid.height() as i64)
        })?;
        Ok(Rasterizer { grid, geo_to_pix })
    }

    pub fn rasterize(&mut self, geometry: &Geometry) -> Result<()> {
        match geometry {
            Geometry::Point(p) => {
                let p = self.to_pixel(p);
                self.burn_point(p);
            }
            Geometry::LineString(line) => {
                let line = self.to_pixels(line);
                self.burn_line(&line);
            }
            Geometry::Polygon(rings) => {
                let rings: Vec<Vec<Pixel>> = rings.iter().map(|r| self.to_pixels(r)).collect();
                self.burn_polygon(&rings);
            }
            _ => return Err(Error::UnsupportedGeometry(geometry.type_name().to_string())),
        }
        Ok(())
    }

    pub fn finish(self) -> BoolGrid {
        self.grid
    }

    fn to_pixel(&self, c: &Coord) -> Pixel {
        transform_xy(&self.geo_to_pix, c.x, c.y)
    }

    fn to_pixels(&self, coords: &[Coord]) -> Vec<Pixel> {
        coords.iter().map(|c| self.to_pixel(c)).collect()
    }

    fn burn_point(&mut self, p: Pixel) {
        if !is_finite(p) {
            return;
        }
        let grow = TOUCH_TOLERANCE;
        let cols = cell_span(p.0 - 1.0 - grow, p.0 + grow, self.grid.width());
        let rows = cell_span(p.1 - 1.0 - grow, p.1 + grow, self.grid.height());
        if let (Some((c0, c1)), Some((r0, r1))) = (cols, rows) {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    self.grid.set(col, row);
                }
            }
        }
    }

    fn burn_line(&mut self, line: &[Pixel]) {
        match line.len() {
            0 => {}
            1 => self.burn_point(line[0]),
            _ => {
                for segment in line.windows(2) {
                    self.burn_segment(segment[0], segment[1], TOUCH_TOLERANCE);
                }
            }
        }
    }

    /// Set all cells whose footprint grown by `grow` intersects the segment
    fn burn_segment(&mut self, p0: Pixel, p1: Pixel, grow: f64) {
        if !is_finite(p0) || !is_finite(p1) {
            return;
        }
        let (width, height) = (self.grid.width(), self.grid.height());
        let rows = match cell_span(p0.1.min(p1.1) - 1.0 - grow, p0.1.max(p1.1) + grow, height) {
            Some(rows) => rows,
            None => return,
        };
        for row in rows.0..=rows.1 {
            let band = (row as f64 - grow, row as f64 + 1.0 + grow);
            if let Some((xa, xb)) = clip_to_band(p0, p1, band.0, band.1) {
                if let Some((c0, c1)) = cell_span(xa - 1.0 - grow, xb + grow, width) {
                    for col in c0..=c1 {
                        self.grid.set(col, row);
                    }
                }
            }
        }
    }

    fn burn_polygon(&mut self, rings: &[Vec<Pixel>]) {
        for ring in rings {
            for (p0, p1) in ring_edges(ring) {
                self.burn_segment(p0, p1, -TOUCH_TOLERANCE);
            }
        }
        self.fill_polygon(rings);
    }

    /// Set all cells whose centre lies inside the polygon (even-odd rule)
    fn fill_polygon(&mut self, rings: &[Vec<Pixel>]) {
        let (ymin, ymax) = rings
            .iter()
            .flatten()
            .filter(|p| is_finite(**p))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.1), hi.max(p.1))
            });
        let rows = match cell_span(ymin - 0.5, ymax - 0.5, self.grid.height()) {
            Some(rows) => rows,
            None => return,
        };
        let mut crossings = Vec::new();
        for row in rows.0..=rows.1 {
            let y = row as f64 + 0.5;
            crossings.clear();
            for ring in rings {
                for (p0, p1) in ring_edges(ring) {
                    if is_finite(p0) && is_finite(p1) && (p0.1 <= y) != (p1.1 <= y) {
                        crossings.push(p0.0 + (y - p0.1) * (p1.0 - p0.0) / (p1.1 - p0.1));
                    }
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            for pair in crossings.chunks_exact(2) {
                // centres c + 0.5 within [pair[0], pair[1])
                let first = (pair[0] - 0.5).ceil();
                let last = (pair[1] - 0.5).ceil() - 1.0;
                if let Some((c0, c1)) = clamp_span(first, last, self.grid.width()) {
                    for col in c0..=c1 {
                        self.grid.set(col, row);
                    }
                }
            }
        }
    }
}
