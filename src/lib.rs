// ear-tessellator: ear-clipping polygon tessellation
// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)

pub mod error;
pub mod geom;
pub mod geometry;
pub mod ring;
pub mod tess;

pub use error::{TessError, TessResult};
pub use geom::{Real, Vertex};
pub use geometry::{tessellate_geometry, Geometry};
pub use tess::{tessellate, TessOption, TessStatus, Tessellator, Triangle};
