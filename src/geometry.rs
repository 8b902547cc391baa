// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Minimal scene-geometry model: a vertex array, per-vertex attribute arrays
// and the primitive sets that draw them. This is the shape the tessellator's
// callers hand over, and `tessellate_geometry` is the entry point they use.
//
// Only flat (unindexed) arrays are accepted. All vertices of the vertex array
// are taken as the single outer ring of the polygon, whatever the primitive
// sets say; holes must already be joined to the outer ring by coincident
// edges.

use crate::error::{TessError, TessResult};
use crate::geom::Vertex;
use crate::tess::Tessellator;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Polygon,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveSet {
    DrawArrays {
        mode: PrimitiveMode,
        first: u32,
        count: u32,
    },
    DrawElements {
        mode: PrimitiveMode,
        indices: Vec<u32>,
    },
}

impl PrimitiveSet {
    pub fn mode(&self) -> PrimitiveMode {
        match self {
            PrimitiveSet::DrawArrays { mode, .. } | PrimitiveSet::DrawElements { mode, .. } => *mode,
        }
    }
}

/// Which per-vertex attribute an [`Attribute`] feeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttributeBinding {
    Normal,
    Color,
    SecondaryColor,
    FogCoord,
    TexCoord(u32),
}

/// A per-vertex attribute array, optionally addressed through its own index
/// array.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub binding: AttributeBinding,
    pub components: usize,
    pub values: Vec<f32>,
    pub indices: Option<Vec<u32>>,
}

impl Attribute {
    /// A flat attribute array: one `components`-sized value per vertex.
    pub fn flat(binding: AttributeBinding, components: usize, values: Vec<f32>) -> Self {
        Attribute {
            binding,
            components,
            values,
            indices: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Option<Vec<Vertex>>,
    pub vertex_indices: Option<Vec<u32>>,
    pub attributes: Vec<Attribute>,
    pub primitive_sets: Vec<PrimitiveSet>,
}

impl Geometry {
    /// A geometry drawing `vertices` as one polygon.
    pub fn polygon(vertices: Vec<Vertex>) -> Self {
        let count = vertices.len() as u32;
        Geometry {
            vertices: Some(vertices),
            vertex_indices: None,
            attributes: Vec::new(),
            primitive_sets: vec![PrimitiveSet::DrawArrays {
                mode: PrimitiveMode::Polygon,
                first: 0,
                count,
            }],
        }
    }

    /// True if the vertex array or any attribute array is addressed through
    /// an index array.
    pub fn has_indexed_arrays(&self) -> bool {
        self.vertex_indices.is_some() || self.attributes.iter().any(|a| a.indices.is_some())
    }

    fn check_tessellatable(&self) -> TessResult<&[Vertex]> {
        let vertices = match self.vertices.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => return Err(TessError::unsupported("geometry has no vertices")),
        };
        if self.primitive_sets.is_empty() {
            return Err(TessError::unsupported("geometry has no primitive sets"));
        }
        if self.vertex_indices.is_some() {
            return Err(TessError::unsupported("geometry uses an indexed vertex array"));
        }
        if let Some(attr) = self.attributes.iter().find(|a| a.indices.is_some()) {
            return Err(TessError::unsupported(format!(
                "geometry uses an indexed {:?} array",
                attr.binding
            )));
        }
        Ok(vertices)
    }
}

/// Replaces the primitive sets of `geom` with a single triangle list covering
/// its vertex ring.
///
/// On failure a warning is logged and `geom` is left exactly as it was.
///
/// ```rust
/// use ear_tessellator::geometry::{tessellate_geometry, Geometry, PrimitiveMode, PrimitiveSet};
///
/// let mut geom = Geometry::polygon(vec![
///     [0.0, 0.0, 0.0],
///     [2.0, 0.0, 0.0],
///     [2.0, 2.0, 0.0],
///     [0.0, 2.0, 0.0],
/// ]);
/// tessellate_geometry(&mut geom).unwrap();
///
/// assert_eq!(geom.primitive_sets.len(), 1);
/// assert_eq!(geom.primitive_sets[0].mode(), PrimitiveMode::Triangles);
/// ```
pub fn tessellate_geometry(geom: &mut Geometry) -> TessResult<()> {
    let result = geom.check_tessellatable().and_then(|vertices| {
        let mut tess = Tessellator::new();
        tess.add_vertices(vertices);
        tess.tessellate()?;
        Ok(tess.elements().to_vec())
    });

    match result {
        Ok(indices) => {
            geom.primitive_sets.clear();
            geom.primitive_sets.push(PrimitiveSet::DrawElements {
                mode: PrimitiveMode::Triangles,
                indices,
            });
            Ok(())
        }
        Err(err) => {
            log::warn!("tessellation failed: {}", err);
            Err(err)
        }
    }
}
