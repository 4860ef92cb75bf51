//! Debug commands: `lex` and `parse` for inspecting pipeline stages.

use std::fmt::Write as _;

use super::CliError;

/// Tokenize `source`, one token per line.
pub fn lex_source(source: &str) -> Result<String, CliError> {
    let tokens = sexl_lexer::tokenize(source)?;
    let mut out = String::new();
    for token in &tokens {
        let _ = writeln!(out, "{token:?}");
    }
    Ok(out)
}

/// Parse `source` and render the AST back as canonical source.
pub fn parse_source(source: &str) -> Result<String, CliError> {
    let node = sexl_parse::parse(source)?;
    Ok(format!("{node}\n"))
}
