// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// The active ring: the shrinking boundary of the polygon still to be clipped.
//
// The ring stores indices into the caller's vertex buffer, never the vertices
// themselves, so removing an ear is a plain `Vec::remove` and every emitted
// triangle still refers to the original input positions.

/// Circular sequence of vertex indices. Positions wrap: the position after the
/// last one is 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveRing {
    verts: Vec<u32>,
}

impl ActiveRing {
    /// Identity ring `0, 1, .., count - 1`.
    pub fn new(count: usize) -> Self {
        ActiveRing {
            verts: (0..count as u32).collect(),
        }
    }

    /// Ring `count - 1, .., 1, 0`, used to walk a clockwise contour.
    pub fn reversed(count: usize) -> Self {
        ActiveRing {
            verts: (0..count as u32).rev().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Vertex index stored at ring position `pos`.
    #[inline]
    pub fn vert(&self, pos: usize) -> u32 {
        self.verts[pos]
    }

    #[inline]
    pub fn prev(&self, pos: usize) -> usize {
        if pos == 0 {
            self.verts.len() - 1
        } else {
            pos - 1
        }
    }

    #[inline]
    pub fn next(&self, pos: usize) -> usize {
        if pos + 1 >= self.verts.len() {
            0
        } else {
            pos + 1
        }
    }

    /// Vertex indices of the ear candidate centred on `pos`: (prev, cursor, next).
    #[inline]
    pub fn ear(&self, pos: usize) -> [u32; 3] {
        [
            self.verts[self.prev(pos)],
            self.verts[pos],
            self.verts[self.next(pos)],
        ]
    }

    /// Removes the vertex at `pos` and returns the position the cursor should
    /// continue from: the same slot, now holding the former successor, or 0
    /// when `pos` was the last slot.
    pub fn remove(&mut self, pos: usize) -> usize {
        self.verts.remove(pos);
        if pos >= self.verts.len() {
            0
        } else {
            pos
        }
    }

    /// Ring positions strictly after `next(pos)` and strictly before
    /// `prev(pos)`, in ring order: every vertex that is not part of the ear
    /// centred on `pos`. Empty for rings of three vertices.
    pub fn others(&self, pos: usize) -> impl Iterator<Item = usize> + '_ {
        let len = self.verts.len();
        let start = self.next(self.next(pos));
        let count = len.saturating_sub(3);
        (0..count).map(move |k| (start + k) % len)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.verts
    }
}
