/// One face corner resolved to its attribute values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Triangle list produced by [`parse_str`](crate::parse_str).
///
/// Every face corner becomes its own vertex, and `indices` simply counts
/// upward in face order. Corners that repeat a `position/uv` pair are *not*
/// merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    pub vertices: Vec<ObjVertex>,
    pub indices: Vec<u32>,

    /// Number of `v` records in the source.
    pub positions_count: usize,
    /// Number of `vt` records in the source.
    pub uvs_count: usize,
}

impl ObjMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
