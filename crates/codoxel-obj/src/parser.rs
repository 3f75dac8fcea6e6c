use crate::error::{ParseError, Record};
use crate::lexer::{Lexer, Word};
use crate::mesh::{ObjMesh, ObjVertex};

/// Corners per face. Sources must already be triangulated.
const FACE_CORNERS: usize = 3;

// ── Parser ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct Parser {
    positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    mesh: ObjMesh,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one non-empty line of words.
    pub fn feed_line(&mut self, words: &[Word<'_>]) -> Result<(), ParseError> {
        let Some((head, args)) = words.split_first() else {
            return Ok(());
        };

        match head.text {
            "v" => {
                let p = parse_floats::<3>(head, args, Record::Position)?;
                self.positions.push(p);
            }
            "vt" => {
                let t = parse_floats::<2>(head, args, Record::TexCoord)?;
                self.uvs.push(t);
            }
            "f" => self.parse_face(head, args)?,
            // vn, o, g, s, usemtl, mtllib, comments, ...
            _ => {}
        }

        Ok(())
    }

    pub fn finish(mut self) -> ObjMesh {
        self.mesh.positions_count = self.positions.len();
        self.mesh.uvs_count = self.uvs.len();
        self.mesh
    }

    // ── Face ──────────────────────────────────────────────────────────────

    fn parse_face(&mut self, head: &Word<'_>, corners: &[Word<'_>]) -> Result<(), ParseError> {
        if corners.len() != FACE_CORNERS {
            return Err(ParseError::new(
                Record::Face,
                format!(
                    "face must have exactly {FACE_CORNERS} vertices (triangulate the model), got {}",
                    corners.len()
                ),
                head.line,
                head.col,
            ));
        }

        // Resolve all corners before pushing so a bad corner leaves no partial face.
        let mut resolved = [ObjVertex { position: [0.0; 3], uv: [0.0; 2] }; FACE_CORNERS];
        for (slot, corner) in resolved.iter_mut().zip(corners) {
            *slot = self.resolve_corner(corner)?;
        }

        for vertex in resolved {
            let index = u32::try_from(self.mesh.vertices.len()).map_err(|_| {
                ParseError::new(
                    Record::Face,
                    "too many face vertices for 32-bit indices",
                    head.line,
                    head.col,
                )
            })?;
            self.mesh.vertices.push(vertex);
            self.mesh.indices.push(index);
        }

        Ok(())
    }

    fn resolve_corner(&self, corner: &Word<'_>) -> Result<ObjVertex, ParseError> {
        let err = |msg: String| ParseError::new(Record::Face, msg, corner.line, corner.col);

        let parts: Vec<&str> = corner.text.split('/').collect();
        let (p, t) = match parts.as_slice() {
            [p, t] if !p.is_empty() && !t.is_empty() => (*p, *t),
            [_] => {
                return Err(err(format!(
                    "face vertex {:?} has no texture index, expected `position/uv`",
                    corner.text
                )));
            }
            [_, _, _] => {
                return Err(err(format!(
                    "face vertex {:?} uses an unsupported form, expected `position/uv`",
                    corner.text
                )));
            }
            _ => {
                return Err(err(format!(
                    "malformed face vertex {:?}, expected `position/uv`",
                    corner.text
                )));
            }
        };

        let position = lookup(&self.positions, p, "position").map_err(&err)?;
        let uv = lookup(&self.uvs, t, "texture coordinate").map_err(&err)?;

        Ok(ObjVertex { position, uv })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────

/// Parses `N` floats plus one optional trailing component (the OBJ `w`),
/// which must still be a number but is dropped.
fn parse_floats<const N: usize>(
    head: &Word<'_>,
    args: &[Word<'_>],
    record: Record,
) -> Result<[f32; N], ParseError> {
    if args.len() < N || args.len() > N + 1 {
        return Err(ParseError::new(
            record,
            format!("{} needs {N} components, got {}", record.noun(), args.len()),
            head.line,
            head.col,
        ));
    }

    let mut out = [0.0f32; N];
    for (i, word) in args.iter().enumerate() {
        let value = word.text.parse::<f32>().map_err(|_| {
            ParseError::new(record, format!("invalid number {:?}", word.text), word.line, word.col)
        })?;
        if let Some(slot) = out.get_mut(i) {
            *slot = value;
        }
    }
    Ok(out)
}

/// Resolves a 1-based OBJ index against the records declared so far.
fn lookup<T: Copy>(items: &[T], raw: &str, what: &str) -> Result<T, String> {
    let index: i64 = raw
        .parse()
        .map_err(|_| format!("invalid {what} index {raw:?}"))?;

    if index == 0 {
        return Err(format!("{what} index 0 is invalid, OBJ indices are 1-based"));
    }
    if index < 0 {
        return Err(format!("relative {what} index {index} is not supported"));
    }

    usize::try_from(index - 1)
        .ok()
        .and_then(|i| items.get(i).copied())
        .ok_or_else(|| format!("{what} index {index} out of range ({} declared)", items.len()))
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse OBJ source text into an [`ObjMesh`].
pub fn parse_str(src: &str) -> Result<ObjMesh, ParseError> {
    let mut parser = Parser::new();
    for line in Lexer::new(src) {
        parser.feed_line(&line)?;
    }
    Ok(parser.finish())
}
