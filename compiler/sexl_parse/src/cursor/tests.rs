use super::*;

fn tokens(source: &str) -> Vec<Token> {
    match sexl_lexer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed for {source:?}: {err}"),
    }
}

#[test]
fn test_cursor_navigation() {
    let toks = tokens("(f, 1)");
    let mut cursor = Cursor::new(&toks);

    assert_eq!(cursor.peek(), Some(&Token::LParen));
    assert_eq!(cursor.advance(), Some(&Token::LParen));
    assert_eq!(cursor.advance(), Some(&Token::Word("f".to_string())));
    assert_eq!(cursor.position(), 2);
    assert!(!cursor.is_at_end());

    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.advance(), Some(&Token::RParen));
    assert!(cursor.is_at_end());
}

#[test]
fn advance_past_end_stays_put() {
    let toks = tokens("x");
    let mut cursor = Cursor::new(&toks);

    cursor.advance();
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.position(), 1);
}

#[test]
fn eat_matches_only_expected() {
    let toks = tokens(",)");
    let mut cursor = Cursor::new(&toks);

    assert!(!cursor.eat(&Token::RParen));
    assert!(cursor.eat(&Token::Comma));
    assert!(cursor.eat(&Token::RParen));
    assert!(!cursor.eat(&Token::RParen));
}
