// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Pure geometric predicates used by the ear clipper.
//
// Only the x and y components of a vertex take part in any predicate; z is
// carried along untouched. Comparisons are exact: there is no epsilon anywhere
// in this module, so collinear or duplicated input behaves exactly as the
// floating-point arithmetic dictates.

pub type Real = f32;

/// A polygon vertex: (x, y, z).
pub type Vertex = [Real; 3];

/// A circle in the x/y plane, stored as centre and radius (not radius squared).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub cx: Real,
    pub cy: Real,
    pub r: Real,
}

/// Twice the signed area of triangle (a, b, c): `(B - A) x (C - A)`.
/// Positive for counter-clockwise order. Evaluated in double precision.
#[inline]
pub fn orient_2d(a: &Vertex, b: &Vertex, c: &Vertex) -> f64 {
    let (ax, ay) = (a[0] as f64, a[1] as f64);
    let (bx, by) = (b[0] as f64, b[1] as f64);
    let (cx, cy) = (c[0] as f64, c[1] as f64);
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Returns true if the turn prev -> cursor -> next is strictly convex for a
/// counter-clockwise ring. Collinear triples are never convex.
#[inline]
pub fn is_convex(prev: &Vertex, cursor: &Vertex, next: &Vertex) -> bool {
    orient_2d(prev, cursor, next) > 0.0
}

/// Circumcircle of (a, b, c) in single precision.
///
/// When the determinant is exactly zero (coincident or collinear points) the
/// result is the centroid with a zero radius. Such a circle only "contains"
/// points sitting exactly on the centroid.
pub fn circumcircle(a: &Vertex, b: &Vertex, c: &Vertex) -> Circle {
    let (ax, ay) = (a[0], a[1]);
    let (bx, by) = (b[0], b[1]);
    let (cx, cy) = (c[0], c[1]);

    let d = (ax - cx) * (by - cy) - (bx - cx) * (ay - cy);

    if d == 0.0 {
        return Circle {
            cx: (ax + bx + cx) / 3.0,
            cy: (ay + by + cy) / 3.0,
            r: 0.0,
        };
    }

    let sa = ((ax - cx) * (ax + cx) + (ay - cy) * (ay + cy)) / 2.0;
    let sb = ((bx - cx) * (bx + cx) + (by - cy) * (by + cy)) / 2.0;

    let ox = (sa * (by - cy) - sb * (ay - cy)) / d;
    let oy = (sb * (ax - cx) - sa * (bx - cx)) / d;
    let r = ((cx - ox) * (cx - ox) + (cy - oy) * (cy - oy)).sqrt();

    Circle { cx: ox, cy: oy, r }
}

/// Returns true if `p` lies inside or on `circle`.
#[inline]
pub fn point_in_circle(p: &Vertex, circle: &Circle) -> bool {
    let dx = p[0] - circle.cx;
    let dy = p[1] - circle.cy;
    dx * dx + dy * dy <= circle.r * circle.r
}

/// Crossing-number containment test of (x, y) against triangle (a, b, c).
///
/// Edges are treated half-open in y: a point lying exactly on an edge or a
/// corner may land on either side depending on which edge it touches.
pub fn triangle_contains_2d(a: &Vertex, b: &Vertex, c: &Vertex, x: f64, y: f64) -> bool {
    let corners = [
        (a[0] as f64, a[1] as f64),
        (b[0] as f64, b[1] as f64),
        (c[0] as f64, c[1] as f64),
    ];

    let mut inside = false;
    let mut j = corners.len() - 1;
    for i in 0..corners.len() {
        let (xi, yi) = corners[i];
        let (xj, yj) = corners[j];
        let straddles = (yi <= y && y < yj) || (yj <= y && y < yi);
        if straddles && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Returns true if the coordinate can take part in the predicates. Magnitude
/// is not limited: projected and geocentric coordinates are accepted as is.
#[inline]
pub fn is_valid_coord(c: Real) -> bool {
    c.is_finite()
}
