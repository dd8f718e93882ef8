/// Parser core state and entrypoints.
///
/// This chunk defines the [`Parser`] type, its configuration surface, and the
/// top-level `parse()` run loop. Statement and expression grammar live in the
/// other parser chunks.
///
/// ## Notes
/// - The busy flag guards configuration while a parse is in flight; exclusive
///   access across a run is the caller's responsibility (`&mut self`).
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    busy: bool,
    trace: Trace,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create an unconfigured parser.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            pos: 0,
            busy: false,
            trace: Trace::default(),
        }
    }

    /// Install the token sequence for the next parse and reset the cursor.
    ///
    /// ## Errors
    /// - [`SyntaxError::EmptyInput`] if `tokens` is empty.
    /// - [`SyntaxError::BusyViolation`] if a parse is in progress.
    pub fn configure(&mut self, tokens: Vec<Token>) -> Result<(), SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        if tokens.is_empty() {
            return Err(SyntaxError::EmptyInput);
        }
        self.tokens = tokens;
        self.pos = 0;
        Ok(())
    }

    /// Parse the configured token sequence into a [`File`].
    ///
    /// Statements accumulate in source order until the Eof token is reached.
    ///
    /// ## Errors
    /// - [`SyntaxError::BusyViolation`] if a parse is already in progress.
    /// - [`SyntaxError::EmptyInput`] if no tokens were configured.
    /// - The first sub-parser failure aborts the entire parse; there is no
    ///   partial AST and no recovery.
    pub fn parse(&mut self) -> Result<File, SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        if self.tokens.is_empty() {
            return Err(SyntaxError::EmptyInput);
        }
        self.busy = true;
        let result = self.run_parse();
        self.busy = false;
        result
    }

    fn run_parse(&mut self) -> Result<File, SyntaxError> {
        self.pos = 0;
        self.trace.emit(format_args!("starting parse"))?;

        let mut file = File::default();
        while !self.at_end() {
            let stmt = self.statement()?;
            file.statements.push(stmt);
        }

        self.trace.emit(format_args!(
            "parse produced {} statements",
            file.statements.len()
        ))?;
        Ok(file)
    }

    /// Report whether instrumentation is enabled.
    pub fn trace_enabled(&self) -> bool {
        self.trace.enabled()
    }

    /// Toggle instrumentation. Fails with [`SyntaxError::BusyViolation`]
    /// while a parse is in progress.
    pub fn set_trace_enabled(&mut self, on: bool) -> Result<(), SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        self.trace.set_enabled(on);
        Ok(())
    }

    /// Rebind the instrumentation sink. Fails with
    /// [`SyntaxError::BusyViolation`] while a parse is in progress.
    pub fn set_trace_sink(&mut self, sink: Box<dyn std::io::Write>) -> Result<(), SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        self.trace.set_sink(sink);
        Ok(())
    }
}
