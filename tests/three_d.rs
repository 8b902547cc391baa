// Copyright 2025 Lars Brubaker
// Tests for 3D coordinate input: z is carried through and ignored by the
// predicates.

mod helpers;

use ear_tessellator::{tessellate, Tessellator, Vertex};

#[test]
fn vertex_size_3_xy_plane() {
    // 3D quad lying in the XY plane (z=0). Same result as the 2D contour.
    let verts_3d: &[f32] = &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
    let verts_2d: &[f32] = &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];

    let mut tess = Tessellator::new();
    tess.add_contour(3, verts_3d);
    tess.tessellate().expect("3D XY-plane quad should tessellate");
    let from_3d = tess.elements().to_vec();

    tess.add_contour(2, verts_2d);
    tess.tessellate().expect("2D quad should tessellate");
    assert_eq!(tess.elements(), from_3d.as_slice());
    assert_eq!(tess.element_count(), 2);
}

#[test]
fn z_is_carried_through_unchanged() {
    let poly: Vec<Vertex> = vec![
        [0.0, 0.0, 10.0],
        [4.0, 0.0, -3.5],
        [5.0, 3.0, 0.25],
        [2.0, 1.5, 7.0],
        [0.0, 4.0, 1.0e6],
    ];
    let mut tess = Tessellator::new();
    tess.add_vertices(&poly);
    tess.tessellate().unwrap();
    assert_eq!(tess.vertices(), poly.as_slice());
}

#[test]
fn heights_do_not_change_the_triangulation() {
    let flat = helpers::star(6, 8.0, 3.0);
    let lifted: Vec<Vertex> = flat
        .iter()
        .enumerate()
        .map(|(i, v)| [v[0], v[1], (i as f32 * 1.7).sin() * 100.0])
        .collect();

    assert_eq!(tessellate(&flat).unwrap(), tessellate(&lifted).unwrap());
}

#[test]
fn tilted_polygon_is_projected_onto_xy() {
    // A square tilted about the x axis: its x/y shadow is a 2 x 1 rectangle.
    let poly: Vec<Vertex> = vec![
        [0.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ];
    let mut tess = Tessellator::new();
    tess.add_vertices(&poly);
    tess.tessellate().unwrap();
    approx::assert_relative_eq!(tess.triangulated_area(), 2.0, epsilon = 1e-6);
}
