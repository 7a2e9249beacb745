use crate::frontend::token::{Span, Token};

/// Splits source text into whitespace-delimited tokens.
///
/// Scanning cannot fail: any input, including the empty string, produces a
/// token list terminated by exactly one end-of-input token.
pub struct Scanner<'s> {
    source: &'s str,
    cursor: usize,
    token_start: usize,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Scanner {
            source,
            cursor: 0,
            token_start: 0,
        }
    }

    fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.cursor).copied()
    }

    /// Emits the pending span `[token_start, cursor)` if it is non-empty.
    fn flush_pending(&mut self, tokens: &mut Vec<Token>) {
        if self.cursor > self.token_start {
            let span = Span::new(
                self.source,
                self.token_start,
                self.cursor - self.token_start,
            );
            tokens.push(Token::word(span));
        }
    }

    pub fn scan(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(byte) = self.current() {
            if byte.is_ascii_whitespace() {
                self.flush_pending(&mut tokens);
                self.cursor += 1;
                self.token_start = self.cursor;
            } else {
                self.cursor += 1;
            }
        }

        // A final token not followed by trailing whitespace is still a token.
        self.flush_pending(&mut tokens);

        tokens.push(Token::end_of_input(Span::new(
            self.source,
            self.cursor,
            0,
        )));
        tokens
    }
}
