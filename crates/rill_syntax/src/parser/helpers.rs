/// Token-cursor helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// non-consuming lookahead (`current`, `peek`), guarded cursor motion
/// (`advance`), and the consume-and-check primitives (`expect_literal`,
/// `expect_kind`).
///
/// ## Notes
/// - Past-the-end lookahead yields `None` so callers branch instead of
///   dereferencing an absent token.
impl Parser {
    /// Return the current token without consuming it.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Return the token `n` positions ahead without consuming anything.
    fn peek(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    /// Return `true` once the cursor reached the Eof token.
    fn at_end(&self) -> bool {
        self.current().is_none_or(|t| t.kind == TokenKind::Eof)
    }

    /// Return `true` if the current token has the given literal.
    fn at_literal(&self, literal: &str) -> bool {
        self.current().is_some_and(|t| t.literal == literal)
    }

    /// Return `true` if the current token has the given kind.
    fn at_kind(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// Return `true` if the token `n` positions ahead has the given literal.
    fn peek_literal(&self, n: usize, literal: &str) -> bool {
        self.peek(n).is_some_and(|t| t.literal == literal)
    }

    /// Move the cursor forward `n` tokens.
    ///
    /// ## Errors
    /// [`SyntaxError::UnexpectedEnd`] if the move would pass the final token.
    fn advance(&mut self, n: usize) -> Result<(), SyntaxError> {
        if self.pos + n >= self.tokens.len() {
            return Err(SyntaxError::UnexpectedEnd {
                position: self.end_position(),
            });
        }
        self.pos += n;
        Ok(())
    }

    /// The position of the final token (the Eof token once configured).
    fn end_position(&self) -> Position {
        self.tokens.last().map(|t| t.position).unwrap_or_default()
    }

    /// The token an expectation ran into: the current token, or the final
    /// token if the cursor somehow sits past the end.
    fn found(&self) -> Token {
        self.current()
            .or(self.tokens.last())
            .cloned()
            .unwrap_or_else(|| Token::new("", TokenKind::Eof, Position::default()))
    }

    /// Consume the current token if its literal is in `literals`.
    ///
    /// ## Errors
    /// [`SyntaxError::Expectation`] reporting the attempted literal set, the
    /// token actually found, and its position.
    fn expect_literal(&mut self, literals: &[&str]) -> Result<Token, SyntaxError> {
        self.trace.emit(format_args!("expect literal {literals:?}"))?;
        let token = self.found();
        if literals.contains(&token.literal.as_str()) {
            self.advance(1)?;
            Ok(token)
        } else {
            Err(SyntaxError::Expectation {
                literals: literals.iter().map(|s| s.to_string()).collect(),
                kinds: Vec::new(),
                found: token,
            })
        }
    }

    /// Consume the current token if its kind is in `kinds`.
    ///
    /// ## Errors
    /// [`SyntaxError::Expectation`] reporting the attempted kind set, the
    /// token actually found, and its position.
    fn expect_kind(&mut self, kinds: &[TokenKind]) -> Result<Token, SyntaxError> {
        self.trace.emit(format_args!("expect kind {kinds:?}"))?;
        let token = self.found();
        if kinds.contains(&token.kind) {
            self.advance(1)?;
            Ok(token)
        } else {
            Err(SyntaxError::Expectation {
                literals: Vec::new(),
                kinds: kinds.to_vec(),
                found: token,
            })
        }
    }
}
