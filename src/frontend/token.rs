/// A half-open byte range into the source buffer.
///
/// Spans never copy source text; resolving one back to a `&str` goes through
/// [`Token::text`] with the original source. Construction is centralized in
/// [`Span::new`], which bounds-checks against the source length once so that
/// no later slicing can go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    /// Creates a span covering `source[start..start + len]`.
    ///
    /// # Panics
    /// Panics if the range does not lie within `source`. The scanner is the
    /// only producer of spans and always passes cursor positions it has
    /// already walked, so a panic here indicates a scanner bug.
    pub fn new(source: &str, start: usize, len: usize) -> Self {
        assert!(
            start + len <= source.len(),
            "span {}..{} out of bounds for source of length {}",
            start,
            start + len,
            source.len()
        );
        Span { start, len }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A single lexical token: a span over the source, or the end-of-input marker.
///
/// Exactly one token with `eof == true` terminates every scan; its span is
/// empty and sits at the end of the source. All other tokens have non-empty,
/// whitespace-free spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
    pub eof: bool,
}

impl Token {
    pub fn word(span: Span) -> Self {
        Token { span, eof: false }
    }

    pub fn end_of_input(span: Span) -> Self {
        Token { span, eof: true }
    }

    /// Resolves this token's span against the source it was scanned from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.start + self.span.len]
    }
}
