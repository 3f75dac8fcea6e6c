// ── Word ──────────────────────────────────────────────────────────────────

/// A whitespace-delimited token with its 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word<'s> {
    pub text: &'s str,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Splits OBJ source into lines of whitespace-separated words.
///
/// Blank lines are skipped. No other interpretation happens here; deciding
/// which record types matter is the parser's job.
pub struct Lexer<'s> {
    lines: std::iter::Enumerate<std::str::Lines<'s>>,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { lines: src.lines().enumerate() }
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Vec<Word<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, line) in self.lines.by_ref() {
            let words = split_words(line, idx + 1);
            if !words.is_empty() {
                return Some(words);
            }
        }
        None
    }
}

fn split_words(line: &str, line_no: usize) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (pos, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(word(line, s, pos, line_no));
                start = None;
            }
            (false, None) => start = Some(pos),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(word(line, s, line.len(), line_no));
    }

    words
}

fn word(line: &str, start: usize, end: usize, line_no: usize) -> Word<'_> {
    Word {
        text: &line[start..end],
        line: line_no,
        // Columns count characters, not bytes.
        col: line[..start].chars().count() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_tracks_positions() {
        let lines: Vec<_> = Lexer::new("\n   \nv  1 2\n\tf 1/1").collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0][0], Word { text: "v", line: 3, col: 1 });
        assert_eq!(lines[0][1], Word { text: "1", line: 3, col: 4 });
        assert_eq!(lines[0][2], Word { text: "2", line: 3, col: 6 });

        assert_eq!(lines[1][0], Word { text: "f", line: 4, col: 2 });
        assert_eq!(lines[1][1], Word { text: "1/1", line: 4, col: 4 });
    }

    #[test]
    fn handles_crlf_line_endings() {
        let lines: Vec<_> = Lexer::new("vt 0 1\r\nvt 1 1\r\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].last().map(|w| w.text), Some("1"));
    }
}
