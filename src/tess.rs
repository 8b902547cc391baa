// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Ear-clipping tessellator: public API + the clipping state machine.
//
// A single ring of vertices is clipped one ear at a time. Each sweep of the
// cursor around the ring prefers an ear whose circumcircle holds no other ring
// vertex (a Delaunay-like quality test); if a whole sweep finds none, the
// first ear that merely contains no other vertex is clipped instead. A sweep
// that finds neither means the ring is not simple and tessellation stops.

mod output;

pub use output::{flatten, ring_signed_area};

use crate::error::{TessError, TessResult};
use crate::geom::{
    circumcircle, is_convex, is_valid_coord, point_in_circle, triangle_contains_2d, Vertex,
};
use crate::ring::ActiveRing;

// ─────────────────────────────── Public types ──────────────────────────────────

/// Boolean switches accepted by [`Tessellator::set_option`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TessOption {
    /// Prefer ears whose circumcircle contains no other ring vertex, falling
    /// back to the first plain ear of a sweep. Default: on. When off, the
    /// first plain ear found is clipped immediately.
    CircumcircleQuality,
    /// Walk the contour backwards so clockwise input can be clipped. Output
    /// triangles keep the input's winding. Default: off.
    ReverseContours,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TessStatus {
    Ok,
    InvalidInput,
    Exhausted,
}

/// One output triangle: indices into the original vertex buffer, in the
/// winding order they had on the ring when clipped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triangle {
    #[inline]
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Triangle { a, b, c }
    }

    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

// ─────────────────────────── Tessellator ──────────────────────────────────────

pub struct Tessellator {
    pub status: TessStatus,
    circumcircle_quality: bool,
    reverse_contours: bool,

    // Input
    contour: Vec<Vertex>,
    contour_count: usize,
    rejected: Option<TessError>,

    // Output
    out_vertices: Vec<Vertex>,
    out_triangles: Vec<Triangle>,
    out_elements: Vec<u32>,
}

impl Tessellator {
    pub fn new() -> Self {
        Tessellator {
            status: TessStatus::Ok,
            circumcircle_quality: true,
            reverse_contours: false,
            contour: Vec::new(),
            contour_count: 0,
            rejected: None,
            out_vertices: Vec::new(),
            out_triangles: Vec::new(),
            out_elements: Vec::new(),
        }
    }

    pub fn set_option(&mut self, option: TessOption, value: bool) {
        match option {
            TessOption::CircumcircleQuality => self.circumcircle_quality = value,
            TessOption::ReverseContours => self.reverse_contours = value,
        }
    }

    /// Add a contour. `size` = 2 or 3 (coords per vertex). `vertices` is flat.
    /// Two-component vertices get z = 0.
    ///
    /// Any other `size`, or a buffer that is not a whole number of vertices,
    /// is recorded as `InputUnsupported` and reported by the next
    /// [`tessellate`](Tessellator::tessellate).
    pub fn add_contour(&mut self, size: usize, vertices: &[f32]) {
        if !(2..=3).contains(&size) {
            self.contour_count += 1;
            self.reject(TessError::unsupported(format!(
                "vertex size must be 2 or 3, got {}",
                size
            )));
            return;
        }
        if vertices.len() % size != 0 {
            self.contour_count += 1;
            self.reject(TessError::unsupported(format!(
                "{} coordinates do not form whole vertices of size {}",
                vertices.len(),
                size
            )));
            return;
        }
        let ring: Vec<Vertex> = vertices
            .chunks_exact(size)
            .map(|c| [c[0], c[1], if size > 2 { c[2] } else { 0.0 }])
            .collect();
        self.add_vertices(&ring);
    }

    /// Add a contour of full (x, y, z) vertices.
    pub fn add_vertices(&mut self, vertices: &[Vertex]) {
        self.contour_count += 1;
        if self.rejected.is_some() {
            return;
        }
        if let Some(i) = vertices.iter().position(|v| !v.iter().all(|&c| is_valid_coord(c))) {
            let index = self.contour.len() + i;
            self.reject(TessError::unsupported(format!(
                "vertex {} has a non-finite coordinate",
                index
            )));
            return;
        }
        self.contour.extend_from_slice(vertices);
    }

    /// Keeps the first input error until the next `tessellate` call.
    fn reject(&mut self, err: TessError) {
        self.status = TessStatus::InvalidInput;
        if self.rejected.is_none() {
            self.rejected = Some(err);
        }
    }

    /// Tessellate the contour added since the last call.
    ///
    /// On success the triangles are available through [`triangles`] and
    /// [`elements`]. On failure both are empty and [`status`] says why.
    ///
    /// [`triangles`]: Tessellator::triangles
    /// [`elements`]: Tessellator::elements
    /// [`status`]: Tessellator::status
    pub fn tessellate(&mut self) -> TessResult<()> {
        self.out_triangles.clear();
        self.out_elements.clear();
        self.out_vertices = std::mem::take(&mut self.contour);
        let contour_count = std::mem::replace(&mut self.contour_count, 0);

        if let Some(err) = self.rejected.take() {
            self.status = TessStatus::InvalidInput;
            return Err(err);
        }
        if contour_count > 1 {
            self.status = TessStatus::InvalidInput;
            return Err(TessError::unsupported(format!(
                "only a single contour is supported, got {}",
                contour_count
            )));
        }
        if let Err(err) = check_vertex_count(self.out_vertices.len()) {
            self.status = TessStatus::InvalidInput;
            return Err(err);
        }

        let clipper = EarClipper::new(
            &self.out_vertices,
            self.circumcircle_quality,
            self.reverse_contours,
        );
        match clipper.run() {
            Ok(triangles) => {
                self.output_triangles(triangles);
                self.status = TessStatus::Ok;
                Ok(())
            }
            Err(err) => {
                self.status = TessStatus::Exhausted;
                Err(err)
            }
        }
    }

    // ─────── Accessors ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize { self.out_vertices.len() }
    pub fn element_count(&self) -> usize { self.out_triangles.len() }
    pub fn vertices(&self) -> &[Vertex] { &self.out_vertices }
    pub fn triangles(&self) -> &[Triangle] { &self.out_triangles }
    pub fn elements(&self) -> &[u32] { &self.out_elements }
    pub fn status(&self) -> TessStatus { self.status }
}

impl Default for Tessellator {
    fn default() -> Self { Self::new() }
}

/// Tessellate one counter-clockwise ring with the default options.
///
/// ```rust
/// use ear_tessellator::{tessellate, Triangle};
///
/// let square = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
/// let triangles = tessellate(&square).unwrap();
/// assert_eq!(triangles, vec![Triangle::new(3, 0, 1), Triangle::new(1, 2, 3)]);
/// ```
pub fn tessellate(vertices: &[Vertex]) -> TessResult<Vec<Triangle>> {
    check_vertex_count(vertices.len())?;
    if let Some(i) = vertices.iter().position(|v| !v.iter().all(|&c| is_valid_coord(c))) {
        return Err(TessError::unsupported(format!("vertex {} has a non-finite coordinate", i)));
    }
    EarClipper::new(vertices, true, false).run()
}

fn check_vertex_count(count: usize) -> TessResult<()> {
    match count {
        0 => Err(TessError::unsupported("empty vertex array")),
        1..=2 => Err(TessError::unsupported(format!(
            "a polygon needs at least 3 vertices, got {}",
            count
        ))),
        _ if count > u32::MAX as usize => Err(TessError::unsupported("too many vertices")),
        _ => Ok(()),
    }
}

// ─────────────────────────── Ear clipping ─────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
enum EarKind {
    /// Not an ear under any rule this sweep.
    Rejected,
    /// Contains no other vertex, but its circumcircle does.
    Traditional,
    /// Passes the circumcircle test (or the only test, with quality off).
    Strict,
}

/// Working state of one tessellation call.
struct EarClipper<'a> {
    vertices: &'a [Vertex],
    ring: ActiveRing,
    cursor: usize,
    cursor_start: usize,
    /// First traditional ear found during the current sweep.
    trad_cursor: Option<usize>,
    circumcircle_quality: bool,
    reverse: bool,
    triangles: Vec<Triangle>,
}

impl<'a> EarClipper<'a> {
    fn new(vertices: &'a [Vertex], circumcircle_quality: bool, reverse: bool) -> Self {
        let count = vertices.len();
        let ring = if reverse {
            ActiveRing::reversed(count)
        } else {
            ActiveRing::new(count)
        };
        EarClipper {
            vertices,
            ring,
            cursor: 0,
            cursor_start: 0,
            trad_cursor: None,
            circumcircle_quality,
            reverse,
            triangles: Vec::with_capacity(count.saturating_sub(2)),
        }
    }

    fn run(mut self) -> TessResult<Vec<Triangle>> {
        while self.ring.len() > 3 {
            if self.is_convex(self.cursor) {
                match self.classify(self.cursor) {
                    EarKind::Strict => {
                        self.clip(self.cursor);
                        continue;
                    }
                    EarKind::Traditional => {
                        if self.trad_cursor.is_none() {
                            self.trad_cursor = Some(self.cursor);
                        }
                    }
                    EarKind::Rejected => {}
                }
            }

            self.cursor = self.ring.next(self.cursor);

            if self.cursor == self.cursor_start {
                match self.trad_cursor {
                    Some(pos) => {
                        log::trace!(
                            "no circumcircle ear in sweep, clipping fallback ear at ring position {}",
                            pos
                        );
                        self.clip(pos);
                    }
                    None => {
                        log::debug!(
                            "ear clipping exhausted with {} of {} vertices remaining",
                            self.ring.len(),
                            self.vertices.len()
                        );
                        return Err(TessError::TessellationExhausted {
                            remaining: self.ring.len(),
                        });
                    }
                }
            }
        }

        if self.ring.len() == 3 {
            let last = self.ring.ear(1);
            self.emit(last);
        }
        Ok(self.triangles)
    }

    fn vertex(&self, ring_pos: usize) -> &'a Vertex {
        &self.vertices[self.ring.vert(ring_pos) as usize]
    }

    fn is_convex(&self, pos: usize) -> bool {
        is_convex(
            self.vertex(self.ring.prev(pos)),
            self.vertex(pos),
            self.vertex(self.ring.next(pos)),
        )
    }

    /// Ear test for a convex candidate centred on `pos`.
    ///
    /// Once a fallback ear is known for this sweep the containment test is
    /// skipped: only a strict ear can change the outcome, and a point inside
    /// the triangle is also inside its circumcircle.
    fn classify(&self, pos: usize) -> EarKind {
        let a = self.vertex(self.ring.prev(pos));
        let b = self.vertex(pos);
        let c = self.vertex(self.ring.next(pos));
        let contains = |p: &Vertex| triangle_contains_2d(a, b, c, p[0] as f64, p[1] as f64);

        if !self.circumcircle_quality {
            return if self.ring.others(pos).any(|q| contains(self.vertex(q))) {
                EarKind::Rejected
            } else {
                EarKind::Strict
            };
        }

        let circle = circumcircle(a, b, c);
        let have_fallback = self.trad_cursor.is_some();
        let mut circ_ear = true;

        for q in self.ring.others(pos) {
            let p = self.vertex(q);
            if circ_ear && point_in_circle(p, &circle) {
                circ_ear = false;
                if have_fallback {
                    return EarKind::Rejected;
                }
            }
            if !have_fallback && contains(p) {
                return EarKind::Rejected;
            }
        }

        if circ_ear {
            EarKind::Strict
        } else {
            EarKind::Traditional
        }
    }

    /// Emits the ear centred on `pos`, removes it and starts a new sweep from
    /// the slot it occupied.
    fn clip(&mut self, pos: usize) {
        let ear = self.ring.ear(pos);
        self.emit(ear);
        self.cursor = self.ring.remove(pos);
        self.cursor_start = self.cursor;
        self.trad_cursor = None;
    }

    fn emit(&mut self, [prev, cursor, next]: [u32; 3]) {
        let tri = if self.reverse {
            Triangle::new(next, cursor, prev)
        } else {
            Triangle::new(prev, cursor, next)
        };
        self.triangles.push(tri);
    }
}
