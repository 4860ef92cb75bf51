//! Lexer tokens.

/// A single lexical unit.
///
/// String literals are stored already unescaped; number literals keep their
/// source text so the parser decides between `Int` and `Float`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    LParen,
    RParen,
    Comma,
    /// Quoted string, quotes stripped and `\"`/`\\` resolved.
    StringLiteral(String),
    /// `digits` or `digits.digits`.
    NumberLiteral(String),
    /// Bare run of ASCII word characters that does not start a number.
    Word(String),
}

impl Token {
    /// The token's text: punctuation as written, literal and word payloads
    /// as stored.
    pub fn text(&self) -> &str {
        match self {
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Comma => ",",
            Token::StringLiteral(text) | Token::NumberLiteral(text) | Token::Word(text) => text,
        }
    }
}
