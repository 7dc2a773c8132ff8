//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile covers of vector geometries, tile set unions and edges.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

pub mod burn;
pub mod core;
pub mod tileset;

pub use crate::burn::burn;
pub use crate::core::error::{Error, Result};
pub use crate::core::geom::{Coord, Feature, Geometry};
pub use crate::core::normalize::{feature_values, normalize_features};
pub use crate::core::scheme::TileScheme;
pub use crate::core::tile::{Tile, TileFormat, TileSet};
pub use crate::tileset::{find_edges, union};
