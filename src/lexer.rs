use crate::token::{PREFIX, Span, Token};

/// Scan a byte buffer for `__reactenv.<NAME>` placeholders.
///
/// Tokens are returned in ascending span order and never overlap. The
/// result is the same as leftmost non-overlapping matching of
/// `__reactenv\.[a-zA-Z_$][0-9a-zA-Z_$]*`. The input does not have to
/// be valid UTF-8.
#[must_use]
pub fn tokenize(input: &[u8]) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

const fn is_name_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_' || ch == b'$'
}

const fn is_name_continue(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_' || ch == b'$'
}

struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while self.pos < self.input.len() {
            // Cheap skip to the next possible prefix start.
            if self.input[self.pos] != b'_' {
                self.pos += 1;
                continue;
            }

            if let Some(token) = self.try_read_token() {
                tokens.push(token);
            } else {
                self.pos += 1;
            }
        }

        tokens
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn starts_with_prefix(&self) -> bool {
        self.input[self.pos..].starts_with(PREFIX.as_bytes())
    }

    fn try_read_token(&mut self) -> Option<Token> {
        if !self.starts_with_prefix() {
            return None;
        }

        let prefix_len = PREFIX.len();
        if !self.peek_at(prefix_len).is_some_and(is_name_start) {
            return None;
        }

        let start = self.pos;
        let name_start = start + prefix_len;
        let mut end = name_start + 1;
        while end < self.input.len() && is_name_continue(self.input[end]) {
            end += 1;
        }

        self.pos = end;

        // Name bytes are ASCII by construction.
        let name = String::from_utf8_lossy(&self.input[name_start..end]).into_owned();

        Some(Token {
            span: Span::new(start, end),
            name,
        })
    }
}
