use std::ops::Range;

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// A non-empty source line with comments and surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
    /// Byte span of `text` in the original source.
    pub span: Range<usize>,
}

impl<'a> SourceLine<'a> {
    /// Whitespace-separated tokens with their byte spans in the original source.
    pub fn tokens(&self) -> Vec<(&'a str, Range<usize>)> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (offset, ch) in self.text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(begin)) => {
                    tokens.push(self.token(begin, offset));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }
        if let Some(begin) = start {
            tokens.push(self.token(begin, self.text.len()));
        }

        tokens
    }

    fn token(&self, begin: usize, end: usize) -> (&'a str, Range<usize>) {
        (
            &self.text[begin..end],
            self.span.start + begin..self.span.start + end,
        )
    }
}

/// Strip comments and whitespace, and drop lines that end up empty.
/// Surviving lines keep their original order.
pub fn clean_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut line_start = 0;

    for raw in source.split_inclusive('\n') {
        let content = raw.find(COMMENT_MARKER).map_or(raw, |cut| &raw[..cut]);
        let trimmed_start = content.trim_start();
        let text = trimmed_start.trim_end();

        if !text.is_empty() {
            let start = line_start + (content.len() - trimmed_start.len());
            lines.push(SourceLine {
                text,
                span: start..start + text.len(),
            });
        }

        line_start += raw.len();
    }

    lines
}
