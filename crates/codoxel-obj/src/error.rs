use std::fmt;

/// Kind of OBJ record a [`ParseError`] was raised in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Record {
    /// `v x y z [w]`
    Position,
    /// `vt u v [w]`
    TexCoord,
    /// `f p/t p/t p/t`
    Face,
}

impl Record {
    /// Keyword introducing the record in the source.
    pub fn keyword(self) -> &'static str {
        match self {
            Record::Position => "v",
            Record::TexCoord => "vt",
            Record::Face => "f",
        }
    }

    pub(crate) fn noun(self) -> &'static str {
        match self {
            Record::Position => "position",
            Record::TexCoord => "texture coordinate",
            Record::Face => "face",
        }
    }
}

/// Error in an `.obj` source, located at the offending token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub record: Record,
    pub message: String,
    /// 1-based line of the record.
    pub line: usize,
    /// 1-based column of the offending token within that line.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(record: Record, msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { record, message: msg.into(), line, col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "obj `{}` record at {}:{}: {}",
            self.record.keyword(),
            self.line,
            self.col,
            self.message
        )
    }
}

impl std::error::Error for ParseError {}
