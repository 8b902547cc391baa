// Copyright 2025 Lars Brubaker
// WASM bindings for ear-tessellator

use ear_tessellator::{TessOption, Tessellator};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A stateful tessellator holding one polygon ring.
#[wasm_bindgen]
pub struct TessellatorJs {
    inner: Tessellator,
    last_error: Option<String>,
}

#[wasm_bindgen]
impl TessellatorJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TessellatorJs {
        TessellatorJs {
            inner: Tessellator::new(),
            last_error: None,
        }
    }

    /// Set the ring from a flat [x0,y0, x1,y1, ...] Float32Array.
    pub fn add_contour(&mut self, vertices: &[f32]) {
        self.inner.add_contour(2, vertices);
    }

    /// Set the ring from a flat [x0,y0,z0, x1,y1,z1, ...] Float32Array.
    pub fn add_contour_3d(&mut self, vertices: &[f32]) {
        self.inner.add_contour(3, vertices);
    }

    /// Set an option (0 = CircumcircleQuality, 1 = ReverseContours).
    pub fn set_option(&mut self, option: u32, value: bool) {
        let opt = match option {
            0 => TessOption::CircumcircleQuality,
            1 => TessOption::ReverseContours,
            _ => return,
        };
        self.inner.set_option(opt, value);
    }

    /// Tessellate and return true on success. On failure `last_error` holds
    /// the reason.
    pub fn tessellate(&mut self) -> bool {
        match self.inner.tessellate() {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                false
            }
        }
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }

    /// Number of output triangles.
    pub fn element_count(&self) -> u32 {
        self.inner.element_count() as u32
    }

    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }

    /// Flat triangle vertex-index triples [i0,i1,i2, ...].
    pub fn get_elements(&self) -> Vec<u32> {
        self.inner.elements().to_vec()
    }

    /// Flat vertex positions [x0,y0,z0, x1,y1,z1, ...], in input order.
    pub fn get_vertices(&self) -> Vec<f32> {
        self.inner.vertices().iter().flatten().copied().collect()
    }
}

impl Default for TessellatorJs {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: tessellate a single ring of 2D vertices and return the
/// element index array. Empty on failure.
#[wasm_bindgen]
pub fn tessellate_polygon_elements(vertices: &[f32]) -> Vec<u32> {
    let mut t = TessellatorJs::new();
    t.add_contour(vertices);
    if !t.tessellate() {
        return Vec::new();
    }
    t.get_elements()
}
