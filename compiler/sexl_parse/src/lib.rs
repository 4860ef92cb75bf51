//! Recursive descent parser for Sexl.
//!
//! # Grammar
//!
//! ```text
//! expression := call | constant
//! call       := "(" token ( "," expression )* ")"
//! constant   := "true" | "false" | "null" | string | number | word
//! ```
//!
//! The parser is deliberately permissive:
//! - commas are separator noise: missing or repeated commas between
//!   arguments are accepted,
//! - any token after `(` names the call, so `("concat", 1)` calls `concat`,
//! - an unrecognized bare word is a string constant, not an error,
//! - tokens after the first complete expression are ignored.

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::ParseError;

use sexl_ir::{Node, Token, Value};
use sexl_stack::{ensure_sufficient_stack, DepthLimit};
use tracing::{debug, trace};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    limit: DepthLimit,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser at the start of `tokens` with the default depth limit.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            limit: DepthLimit::default(),
            depth: 0,
        }
    }

    /// Set the maximum call nesting depth.
    #[must_use]
    pub fn with_depth_limit(mut self, limit: DepthLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse one expression at the cursor.
    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        match self.cursor.advance() {
            None => Err(ParseError::UnexpectedEndOfInput),
            Some(Token::LParen) => {
                self.limit.check(self.depth)?;
                self.depth += 1;
                let call = ensure_sufficient_stack(|| self.parse_call());
                self.depth -= 1;
                call
            }
            Some(token) => Ok(Node::Literal(constant(token))),
        }
    }

    /// Parse the remainder of a call; the opening `(` is already consumed.
    fn parse_call(&mut self) -> Result<Node, ParseError> {
        // Whatever token follows `(` is the name, punctuation included.
        let Some(token) = self.cursor.advance() else {
            return Err(ParseError::ExpectedFunctionName);
        };
        let name = token.text().to_string();
        trace!(name = %name, depth = self.depth, "parse_call");

        let mut args = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(ParseError::UnexpectedEndOfInput);
            }
            if self.cursor.eat(&Token::RParen) {
                break;
            }
            if self.cursor.eat(&Token::Comma) {
                continue;
            }
            args.push(self.parse_expression()?);
        }

        Ok(Node::Call { name, args })
    }
}

/// Resolve a non-`(` token in expression position to its constant value.
fn constant(token: &Token) -> Value {
    match token {
        Token::Word(word) => match word.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "null" => Value::Null,
            _ => Value::Str(word.clone()),
        },
        Token::StringLiteral(text) => Value::Str(text.clone()),
        Token::NumberLiteral(text) => number(text),
        Token::LParen | Token::RParen | Token::Comma => Value::string(token.text()),
    }
}

/// A number literal with a `.` is a `Float`; otherwise an `Int`, falling
/// back to `Float` when the digits overflow `i64`.
fn number(text: &str) -> Value {
    if !text.contains('.') {
        if let Ok(n) = text.parse::<i64>() {
            return Value::Int(n);
        }
    }
    match text.parse::<f64>() {
        Ok(f) => Value::Float(f),
        Err(_) => Value::string(text),
    }
}

/// Parse one expression from the start of `tokens`.
///
/// Returns the node and the number of tokens it consumed; tokens after that
/// point are left untouched.
pub fn parse_tokens(tokens: &[Token]) -> Result<(Node, usize), ParseError> {
    parse_tokens_with_limit(tokens, DepthLimit::default())
}

/// [`parse_tokens`] with an explicit nesting limit.
pub fn parse_tokens_with_limit(
    tokens: &[Token],
    limit: DepthLimit,
) -> Result<(Node, usize), ParseError> {
    let mut parser = Parser::new(tokens).with_depth_limit(limit);
    let node = parser.parse_expression()?;
    let consumed = parser.position();
    debug!(consumed, total = tokens.len(), "parsed expression");
    Ok((node, consumed))
}

/// Tokenize and parse source text into an AST.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    parse_with_limit(source, DepthLimit::default())
}

/// [`parse`] with an explicit nesting limit.
pub fn parse_with_limit(source: &str, limit: DepthLimit) -> Result<Node, ParseError> {
    let tokens = sexl_lexer::tokenize(source)?;
    let (node, _) = parse_tokens_with_limit(&tokens, limit)?;
    Ok(node)
}
