// Copyright 2025 Lars Brubaker
// Output generation methods for the Tessellator.

use super::{Tessellator, Triangle};
use crate::geom::{Real, Vertex};

impl Tessellator {
    pub(crate) fn output_triangles(&mut self, triangles: Vec<Triangle>) {
        self.out_elements = flatten(&triangles);
        self.out_triangles = triangles;
    }

    /// Sum of the signed areas of the output triangles. For a successful
    /// tessellation of a simple ring this equals the ring's own signed area.
    pub fn triangulated_area(&self) -> Real {
        self.out_triangles
            .iter()
            .map(|t| t.signed_area(&self.out_vertices))
            .sum()
    }
}

impl Triangle {
    /// Signed x/y area of this triangle over `vertices`; positive when
    /// counter-clockwise.
    pub fn signed_area(&self, vertices: &[Vertex]) -> Real {
        let a = &vertices[self.a as usize];
        let b = &vertices[self.b as usize];
        let c = &vertices[self.c as usize];
        0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]))
    }
}

/// Flat `a, b, c, a, b, c, ..` index list, the layout a triangle-list draw
/// call consumes.
pub fn flatten(triangles: &[Triangle]) -> Vec<u32> {
    triangles.iter().flat_map(|t| t.indices()).collect()
}

/// Signed x/y area of a ring given in order; positive when counter-clockwise.
pub fn ring_signed_area(vertices: &[Vertex]) -> Real {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i][0] * vertices[j][1];
        area -= vertices[j][0] * vertices[i][1];
    }
    area * 0.5
}
