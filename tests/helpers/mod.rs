// Copyright 2025 Lars Brubaker
// Shared test utilities for ear-tessellator tests.

#![allow(dead_code)]

use ear_tessellator::{Triangle, Vertex};

/// Build a flat (z = 0) ring from 2D points.
pub fn ring(points: &[(f32, f32)]) -> Vec<Vertex> {
    points.iter().map(|&(x, y)| [x, y, 0.0]).collect()
}

/// Axis-aligned ellipse sampled counter-clockwise with `n` vertices.
pub fn ellipse(n: usize, rx: f32, ry: f32) -> Vec<Vertex> {
    use std::f32::consts::PI;
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f32 / n as f32;
            [rx * angle.cos(), ry * angle.sin(), 0.0]
        })
        .collect()
}

/// Regular convex polygon, counter-clockwise.
pub fn regular_polygon(n: usize, radius: f32) -> Vec<Vertex> {
    ellipse(n, radius, radius)
}

/// Star with `points` tips, alternating outer and inner radius,
/// counter-clockwise starting at the top tip.
pub fn star(points: usize, outer: f32, inner: f32) -> Vec<Vertex> {
    use std::f32::consts::PI;
    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = PI / 2.0 + i as f32 * PI / points as f32;
            [r * angle.cos(), r * angle.sin(), 0.0]
        })
        .collect()
}

/// Signed area of a ring in x/y (shoelace), in double precision.
pub fn polygon_signed_area(verts: &[Vertex]) -> f64 {
    let n = verts.len();
    let mut area = 0.0f64;
    for i in 0..n {
        let j = (i + 1) % n;
        area += verts[i][0] as f64 * verts[j][1] as f64;
        area -= verts[j][0] as f64 * verts[i][1] as f64;
    }
    area * 0.5
}

/// Signed area of one output triangle, in double precision.
pub fn triangle_signed_area(verts: &[Vertex], tri: &Triangle) -> f64 {
    let [a, b, c] = tri.indices().map(|i| verts[i as usize]);
    let (ax, ay) = (a[0] as f64, a[1] as f64);
    let (bx, by) = (b[0] as f64, b[1] as f64);
    let (cx, cy) = (c[0] as f64, c[1] as f64);
    0.5 * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay))
}

pub fn total_signed_area(verts: &[Vertex], tris: &[Triangle]) -> f64 {
    tris.iter().map(|t| triangle_signed_area(verts, t)).sum()
}

/// Crossing-number point-in-polygon test.
pub fn polygon_contains(verts: &[Vertex], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = verts.len() - 1;
    for i in 0..verts.len() {
        let (xi, yi) = (verts[i][0] as f64, verts[i][1] as f64);
        let (xj, yj) = (verts[j][0] as f64, verts[j][1] as f64);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Smallest interior angle over all triangles, in degrees.
pub fn min_angle_degrees(verts: &[Vertex], tris: &[Triangle]) -> f64 {
    let mut min = f64::MAX;
    for tri in tris {
        let p = tri.indices().map(|i| {
            let v = verts[i as usize];
            (v[0] as f64, v[1] as f64)
        });
        for k in 0..3 {
            let (a, b, c) = (p[k], p[(k + 1) % 3], p[(k + 2) % 3]);
            let u = (b.0 - a.0, b.1 - a.1);
            let v = (c.0 - a.0, c.1 - a.1);
            let cos = (u.0 * v.0 + u.1 * v.1) / (u.0.hypot(u.1) * v.0.hypot(v.1));
            min = min.min(cos.clamp(-1.0, 1.0).acos().to_degrees());
        }
    }
    min
}

/// Verify that all indices are in range and no triangle repeats a vertex.
pub fn verify_valid_output(verts: &[Vertex], tris: &[Triangle]) {
    for (i, tri) in tris.iter().enumerate() {
        for idx in tri.indices() {
            assert!(
                (idx as usize) < verts.len(),
                "triangle {} index {} out of range (vertex_count={})",
                i,
                idx,
                verts.len()
            );
        }
        assert!(
            tri.a != tri.b && tri.b != tri.c && tri.a != tri.c,
            "triangle {} repeats a vertex: {:?}",
            i,
            tri
        );
    }
}

/// Verify a successful triangulation of a simple counter-clockwise ring:
/// n - 2 triangles, all counter-clockwise, every vertex used, area preserved,
/// and every triangle centroid inside the ring.
pub fn verify_covers_ring(verts: &[Vertex], tris: &[Triangle]) {
    verify_valid_output(verts, tris);
    assert_eq!(tris.len(), verts.len() - 2, "expected n - 2 triangles");

    for (i, tri) in tris.iter().enumerate() {
        let area = triangle_signed_area(verts, tri);
        assert!(area > 0.0, "triangle {} {:?} is not counter-clockwise (area={})", i, tri, area);

        let [a, b, c] = tri.indices().map(|i| verts[i as usize]);
        let cx = (a[0] as f64 + b[0] as f64 + c[0] as f64) / 3.0;
        let cy = (a[1] as f64 + b[1] as f64 + c[1] as f64) / 3.0;
        assert!(
            polygon_contains(verts, cx, cy),
            "triangle {} {:?} lies outside the polygon",
            i,
            tri
        );
    }

    let mut used = vec![false; verts.len()];
    for tri in tris {
        for idx in tri.indices() {
            used[idx as usize] = true;
        }
    }
    assert!(used.iter().all(|&u| u), "some vertex was dropped: {:?}", used);

    let expected = polygon_signed_area(verts);
    let actual = total_signed_area(verts, tris);
    assert!(
        (actual - expected).abs() <= 1e-4 * expected.abs().max(1.0),
        "area mismatch: polygon {} vs triangles {}",
        expected,
        actual
    );
}
