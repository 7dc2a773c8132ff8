//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Operations on sets of tiles

mod edges;
pub mod trace;
mod union;

pub use self::edges::find_edges;
pub use self::union::union;

#[cfg(test)]
mod union_test;
