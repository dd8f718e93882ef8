/// Parse a token sequence into an AST [`File`].
///
/// This is the main public entrypoint for parsing: a shorthand for
/// configuring a fresh [`Parser`] and running it.
///
/// ## Parameters
/// - `tokens`: Eof-terminated sequence produced by
///   [`crate::tokenizer::tokenize`]. The parser takes ownership; it reads a
///   fully materialized sequence, never a stream.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered; there is no partial AST.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> Result<File, SyntaxError> {
    let mut parser = Parser::new();
    parser.configure(tokens)?;
    parser.parse()
}
