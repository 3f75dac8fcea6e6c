//! Parser for the subset of **Wavefront OBJ** used by Codoxel models.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! asset tooling without pulling in any engine or GPU code.
//!
//! # Supported records
//!
//! | Record | Meaning |
//! |--------|---------|
//! | `v x y z` | position |
//! | `vt u v` | texture coordinate |
//! | `f a/b c/d e/f` | triangle, 1-based `position/uv` pairs |
//!
//! Every other record type is skipped.
//!
//! # Quick start
//!
//! ```rust
//! use codoxel_obj::parse_str;
//!
//! let src = "
//!     v 0 0 0
//!     v 1 0 0
//!     v 0 1 0
//!     vt 0 0
//!     f 1/1 2/1 3/1
//! ";
//!
//! let mesh = parse_str(src).unwrap();
//! assert_eq!(mesh.indices, vec![0, 1, 2]);
//! ```

pub mod error;
pub mod lexer;
pub mod mesh;
pub mod parser;

pub use error::{ParseError, Record};
pub use mesh::{ObjMesh, ObjVertex};
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> ObjMesh { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    const SINGLE_TRIANGLE: &str = "v 1 2 3\nvt 0 0\nvt 1 0\nvt 1 1\nf 1/1 1/2 1/3\n";

    #[test]
    fn single_triangle_emits_one_vertex_per_corner() {
        let mesh = ok(SINGLE_TRIANGLE);
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);

        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
        for (v, uv) in mesh.vertices.iter().zip(uvs) {
            assert_eq!(v.position, [1.0, 2.0, 3.0]);
            assert_eq!(v.uv, uv);
        }
    }

    #[test]
    fn unknown_records_are_ignored() {
        let src = "# exported\no Cube\nvn 0 0 1\ns off\nusemtl brick\nmtllib cube.mtl\ng side\n";
        let mesh = ok(&format!("{src}{SINGLE_TRIANGLE}"));
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.positions_count, 1);
        assert_eq!(mesh.uvs_count, 3);
    }

    #[test]
    fn repeated_pairs_are_not_deduplicated() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nvt 0 0\n\
                   f 1/1 2/1 3/1\nf 2/1 4/1 3/1\n";
        let mesh = ok(src);
        // Corners 2/1 and 3/1 appear in both faces and are emitted twice.
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.vertices[1], mesh.vertices[3]);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn optional_w_components_are_dropped() {
        let mesh = ok("v 1 2 3 1\nvt 0.5 0.25 0\nf 1/1 1/1 1/1\n");
        assert_eq!(mesh.vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(mesh.vertices[0].uv, [0.5, 0.25]);
    }

    #[test]
    fn empty_source_gives_empty_mesh() {
        let mesh = ok("");
        assert!(mesh.is_empty());
        assert_eq!(mesh, ObjMesh::default());
    }

    #[test]
    fn err_quad_face() {
        let e = err("v 0 0 0\nvt 0 0\nf 1/1 1/1 1/1 1/1\n");
        assert_eq!((e.line, e.col), (3, 1));
    }

    #[test]
    fn err_position_only_face() {
        let e = err("v 0 0 0\nf 1 1 1\n");
        assert_eq!((e.line, e.col), (2, 3));
    }

    #[test]
    fn err_normal_forms() {
        err("v 0 0 0\nvt 0 0\nf 1/1/1 1/1/1 1/1/1\n");
        err("v 0 0 0\nf 1//1 1//1 1//1\n");
    }

    #[test]
    fn err_zero_and_negative_indices() {
        err("v 0 0 0\nvt 0 0\nf 0/1 1/1 1/1\n");
        err("v 0 0 0\nvt 0 0\nf -1/1 1/1 1/1\n");
    }

    #[test]
    fn err_index_out_of_range() {
        let e = err("v 0 0 0\nvt 0 0\nf 1/1 2/1 1/1\n");
        assert_eq!((e.line, e.col), (3, 7));
        assert!(e.message.contains("out of range"));
    }

    #[test]
    fn err_forward_reference() {
        // Indices resolve against records declared above the face.
        err("vt 0 0\nf 1/1 1/1 1/1\nv 0 0 0\n");
    }

    #[test]
    fn err_bad_number() {
        let e = err("v 0 zero 0\n");
        assert_eq!((e.line, e.col), (1, 5));
    }

    #[test]
    fn err_component_count() {
        err("v 0 0\n");
        err("vt 0\n");
        err("v 0 0 0 1 2\n");
    }

    #[test]
    fn error_display_has_position() {
        let e = err("\n\nv a 0 0\n");
        assert_eq!(e.to_string(), "obj `v` record at 3:3: invalid number \"a\"");
    }

    #[test]
    fn errors_name_their_record() {
        assert_eq!(err("vt 0 x\n").record, Record::TexCoord);
        assert_eq!(err("v 0 0\n").record, Record::Position);

        let e = err("v 0 0 0\nvt 0 0\nf 1/1 1/1 1/2\n");
        assert_eq!(e.record, Record::Face);
        assert!(e.to_string().starts_with("obj `f` record at 3:11:"));
    }

    #[test]
    fn err_non_numeric_w_component() {
        let e = err("v 1 2 3 abc\n");
        assert_eq!((e.record, e.line, e.col), (Record::Position, 1, 9));
        assert!(e.message.contains("\"abc\""));

        let e = err("vt 0 1 w\n");
        assert_eq!((e.record, e.col), (Record::TexCoord, 8));
    }
}
