//! Hand-written scanner producing [`Token`]s.
//!
//! At each position the scanner tries, in priority order: `(`, `)`, `,`, a
//! quoted string, a float (`digits.digits`), an integer (`digits`), and a
//! word (`[A-Za-z0-9_]+`). If nothing matches, the byte is skipped and the
//! scan resumes at the next one.
//!
//! The scanner works on bytes. Every token starts and ends on an ASCII byte,
//! so slicing the source at token boundaries always lands on a UTF-8 char
//! boundary; non-ASCII bytes can only appear inside string literals, or be
//! skipped.

use sexl_ir::Token;

use crate::escape::unescape_string;

/// Collapse every whitespace run to a single space.
///
/// Whitespace is space, tab, newline, vertical tab, form feed and carriage
/// return. Runs inside string literals are collapsed as well.
pub(crate) fn collapse_whitespace(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut in_run = false;
    for c in source.chars() {
        if matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r') {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterator over the tokens of a (whitespace-collapsed) source.
pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    /// Try to match a token at `start`; on success the cursor has advanced
    /// past it.
    fn token_at(&mut self, start: usize) -> Option<Token> {
        match self.bytes()[start] {
            b'(' => Some(self.single(start, Token::LParen)),
            b')' => Some(self.single(start, Token::RParen)),
            b',' => Some(self.single(start, Token::Comma)),
            b'"' => self.string(start),
            b'0'..=b'9' => Some(self.number(start)),
            b if is_word_byte(b) => Some(self.word(start)),
            _ => None,
        }
    }

    fn single(&mut self, start: usize, token: Token) -> Token {
        self.pos = start + 1;
        token
    }

    /// `"(\\.|[^\\"])*"`. An unterminated literal matches nothing, and the
    /// opening quote is skipped like any other stray character.
    fn string(&mut self, start: usize) -> Option<Token> {
        let bytes = self.bytes();
        let mut i = start + 1;
        loop {
            match bytes.get(i) {
                None => return None,
                Some(b'\\') => {
                    if i + 1 >= bytes.len() {
                        return None;
                    }
                    i += 2;
                }
                Some(b'"') => break,
                Some(_) => i += 1,
            }
        }
        let content = &self.src[start + 1..i];
        self.pos = i + 1;
        Some(Token::StringLiteral(unescape_string(content)))
    }

    /// `digits.digits` if a digit follows the dot, otherwise `digits`.
    fn number(&mut self, start: usize) -> Token {
        let bytes = self.bytes();
        let mut end = eat_digits(bytes, start);
        if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
            end = eat_digits(bytes, end + 1);
        }
        self.pos = end;
        Token::NumberLiteral(self.src[start..end].to_string())
    }

    fn word(&mut self, start: usize) -> Token {
        let bytes = self.bytes();
        let mut end = start;
        while bytes.get(end).copied().is_some_and(is_word_byte) {
            end += 1;
        }
        self.pos = end;
        Token::Word(self.src[start..end].to_string())
    }
}

fn eat_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.src.len() {
            let start = self.pos;
            if let Some(token) = self.token_at(start) {
                return Some(token);
            }
            self.pos = start + 1;
        }
        None
    }
}
