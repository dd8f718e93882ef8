/// Expression parsing by precedence climbing.
///
/// A binary expression climbs from the caller's minimum precedence; the
/// right operand recurses at `op.precedence() + 1`, which keeps
/// same-precedence operators left-associative. Climbing stops as soon as the
/// next operator binds weaker than the caller's threshold.
impl Parser {
    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.binary_expression(BinaryOp::MIN_PRECEDENCE)
    }

    fn binary_expression(&mut self, min_precedence: u8) -> Result<Expr, SyntaxError> {
        let mut left = self.primary()?;
        loop {
            let Some(op) = self.current_operator() else {
                break;
            };
            if op.precedence() < min_precedence {
                break;
            }
            self.advance(1)?;
            let right = self.binary_expression(op.precedence() + 1)?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                op,
                right: Box::new(right),
                parenthesized: false,
            });
        }
        Ok(left)
    }

    /// The binary operator at the cursor, if any.
    fn current_operator(&self) -> Option<BinaryOp> {
        let token = self.current()?;
        if token.kind != TokenKind::Separator {
            return None;
        }
        BinaryOp::from_literal(&token.literal)
    }

    /// A primary value: a literal token, a parenthesized sub-expression, an
    /// anonymous function, or one of the two-token lookahead forms (type
    /// conversion, call).
    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.found();
        match token.kind {
            TokenKind::Integer | TokenKind::Float => {
                self.advance(1)?;
                Ok(Expr::Value(Value {
                    literal: token.literal,
                    kind: token.kind,
                }))
            }
            TokenKind::Separator if token.literal == "(" => self.grouped_expression(),
            TokenKind::Keyword if token.literal == keywords::FUNCTION => self.function_value(),
            TokenKind::Type if self.peek_literal(1, "(") => self.type_conversion(),
            TokenKind::Identifier if self.peek_literal(1, "(") => self.call(),
            // A lone identifier or type name is a bare value reference.
            TokenKind::Identifier | TokenKind::Type => {
                self.advance(1)?;
                Ok(Expr::Value(Value {
                    literal: token.literal,
                    kind: token.kind,
                }))
            }
            _ => Err(SyntaxError::Expectation {
                literals: vec!["(".to_string(), keywords::FUNCTION.to_string()],
                kinds: vec![
                    TokenKind::Integer,
                    TokenKind::Float,
                    TokenKind::Identifier,
                    TokenKind::Type,
                ],
                found: token,
            }),
        }
    }

    /// `( expr )`: a grouped binary expression keeps its explicit grouping
    /// via the `parenthesized` flag.
    fn grouped_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.expect_literal(&["("])?;
        let inner = self.expression()?;
        self.expect_literal(&[")"])?;
        match inner {
            Expr::Binary(mut binary) => {
                binary.parenthesized = true;
                Ok(Expr::Binary(binary))
            }
            other => Ok(other),
        }
    }

    /// `func (args) [type] { body }` in expression position.
    fn function_value(&mut self) -> Result<Expr, SyntaxError> {
        self.expect_literal(&[keywords::FUNCTION])?;
        let args = self.argument_list()?;
        let ret = self.return_type()?;
        let body = self.block()?;
        Ok(Expr::FunctionValue(FunctionValue { args, ret, body }))
    }

    /// `type ( expr )`: wraps one parsed value in a conversion node.
    fn type_conversion(&mut self) -> Result<Expr, SyntaxError> {
        let target = self.expect_kind(&[TokenKind::Type, TokenKind::Identifier])?;
        self.expect_literal(&["("])?;
        let value = self.expression()?;
        self.expect_literal(&[")"])?;
        self.trace.emit(format_args!(
            "parsed conversion to {:?}",
            target.literal
        ))?;
        Ok(Expr::TypeConversion(TypeConversion {
            target: target.literal,
            value: Box::new(value),
        }))
    }

    /// `name ( expr, ... )`: each argument is paired with its inferred value
    /// kind; a missing comma simply ends the argument list.
    fn call(&mut self) -> Result<Expr, SyntaxError> {
        let name = self.expect_kind(&[TokenKind::Identifier])?;
        self.expect_literal(&["("])?;
        let mut args = Vec::new();
        while !self.at_literal(")") && !self.at_end() {
            let value = self.expression()?;
            args.push(CallArgument {
                kind: value.value_kind(),
                value,
            });
            if self.at_literal(",") {
                self.advance(1)?;
            } else {
                break;
            }
        }
        self.expect_literal(&[")"])?;
        self.trace
            .emit(format_args!("parsed call to {:?}", name.literal))?;
        Ok(Expr::Call(Call {
            name: name.literal,
            args,
        }))
    }
}
