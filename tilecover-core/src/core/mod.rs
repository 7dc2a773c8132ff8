//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod config;
pub mod error;
pub mod geom;
pub mod gridcfg;
pub mod normalize;
pub mod raster;
pub mod scheme;
pub mod tile;
pub mod transform;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};
pub use self::error::{Error, Result};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod geom_test;
#[cfg(test)]
mod normalize_test;
#[cfg(test)]
mod raster_test;
