/// Statement parsing.
///
/// The dispatcher decides between a short variable declaration (identifier
/// followed by `:=`), a long-form `var` declaration, a `func` declaration,
/// and a bare expression statement. Function bodies reuse the dispatcher, so
/// declarations nest.
impl Parser {
    fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        if self.at_kind(TokenKind::Identifier) && self.peek_literal(1, separators::SHORT_DECLARATION)
        {
            return self.short_declaration();
        }
        if self.at_literal(keywords::DECLARATION) {
            return self.long_declaration();
        }
        if self.at_literal(keywords::FUNCTION) {
            return self.function_declaration();
        }
        // Anything else is attempted as a bare expression statement; failure
        // there fails the whole parse.
        Ok(Stmt::Expr(self.expression()?))
    }

    /// `name := expr`: the declared type is inferred from the initializer's
    /// value kind.
    fn short_declaration(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.expect_kind(&[TokenKind::Identifier])?;
        self.expect_literal(&[separators::SHORT_DECLARATION])?;
        let value = self.expression()?;
        self.trace.emit(format_args!(
            "parsed short declaration of {:?}",
            name.literal
        ))?;
        Ok(Stmt::Variable(Variable {
            exported: conventions::is_exported(&name.literal),
            ty: TypeHint::Inferred(value.value_kind()),
            name: name.literal,
            value: Some(value),
        }))
    }

    /// `var name [type] [= expr]`: both the annotation and the initializer
    /// are optional.
    fn long_declaration(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect_literal(&[keywords::DECLARATION])?;
        let name = self.expect_kind(&[TokenKind::Identifier])?;

        let mut ty = TypeHint::Unspecified;
        if self.at_kind(TokenKind::Type) {
            let annotation = self.expect_kind(&[TokenKind::Type])?;
            ty = TypeHint::Declared(annotation.literal);
        }

        let mut value = None;
        if self.at_literal(separators::ASSIGN) {
            self.advance(1)?;
            let expr = self.expression()?;
            if matches!(ty, TypeHint::Unspecified) {
                ty = TypeHint::Inferred(expr.value_kind());
            }
            value = Some(expr);
        }

        self.trace
            .emit(format_args!("parsed declaration of {:?}", name.literal))?;
        Ok(Stmt::Variable(Variable {
            exported: conventions::is_exported(&name.literal),
            name: name.literal,
            ty,
            value,
        }))
    }

    /// `func name(args) [type] { body }`.
    fn function_declaration(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect_literal(&[keywords::FUNCTION])?;
        let name = self.expect_kind(&[TokenKind::Identifier])?;
        let args = self.argument_list()?;
        let ret = self.return_type()?;
        let body = self.block()?;
        self.trace
            .emit(format_args!("parsed function {:?}", name.literal))?;
        Ok(Stmt::Function(Function {
            exported: conventions::is_exported(&name.literal),
            name: name.literal,
            ret,
            args,
            body,
        }))
    }

    /// An optional return-type token before the opening brace.
    fn return_type(&mut self) -> Result<Option<Ident>, SyntaxError> {
        if self.at_kind(TokenKind::Type) {
            let ty = self.expect_kind(&[TokenKind::Type])?;
            Ok(Some(ty.literal))
        } else {
            Ok(None)
        }
    }

    /// `(name [...]type, ...)`: at most one variadic parameter, final only;
    /// a violation is structural, not a soft warning.
    fn argument_list(&mut self) -> Result<Vec<FunctionArgument>, SyntaxError> {
        self.expect_literal(&["("])?;
        let mut args: Vec<FunctionArgument> = Vec::new();
        while !self.at_literal(")") && !self.at_end() {
            let name = self.expect_kind(&[TokenKind::Identifier])?;
            if args.last().is_some_and(|a| a.variadic) {
                return Err(SyntaxError::StructuralViolation {
                    reason: "variadic parameter must be the final parameter".to_string(),
                    position: name.position,
                });
            }
            let mut variadic = false;
            if self.at_literal(separators::VARIADIC) {
                variadic = true;
                self.advance(1)?;
            }
            let ty = self.expect_kind(&[TokenKind::Type])?;
            args.push(FunctionArgument {
                name: name.literal,
                ty: ty.literal,
                variadic,
            });
            if self.at_literal(",") {
                self.advance(1)?;
            } else {
                break;
            }
        }
        self.expect_literal(&[")"])?;
        Ok(args)
    }

    /// A brace-delimited statement sequence parsed by the same dispatcher.
    fn block(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        self.expect_literal(&["{"])?;
        let mut body = Vec::new();
        while !self.at_literal("}") && !self.at_end() {
            body.push(self.statement()?);
        }
        self.expect_literal(&["}"])?;
        Ok(body)
    }
}
