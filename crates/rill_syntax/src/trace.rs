//! Instrumentation trace sink shared by the tokenizer and parser.
//!
//! A [`Trace`] is an optional, append-only write target for timestamped
//! free-form messages. It is owned by the component it instruments and is
//! rebindable only while that component is idle (the owner enforces the busy
//! check before delegating here).
//!
//! ## Notes
//! - There is no backpressure handling: a sink write failure aborts the
//!   owning run with [`SyntaxError::TraceWrite`] instead of being dropped.
//! - This is per-run instrumentation for language tooling; ambient developer
//!   logging goes through `tracing` spans on the public entry points.

use std::fmt;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::diagnostics::SyntaxError;

/// Append-only instrumentation target with an on/off toggle.
#[derive(Default)]
pub struct Trace {
    enabled: bool,
    sink: Option<Box<dyn Write>>,
}

impl Trace {
    /// Report whether tracing is currently enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    pub(crate) fn set_sink(&mut self, sink: Box<dyn Write>) {
        self.sink = Some(sink);
    }

    /// Append one timestamped message. A no-op unless enabled and bound.
    pub(crate) fn emit(&mut self, message: fmt::Arguments<'_>) -> Result<(), SyntaxError> {
        if !self.enabled {
            return Ok(());
        }
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        writeln!(sink, "[{}.{:03}] {}", stamp.as_secs(), stamp.subsec_millis(), message)
            .map_err(|e| SyntaxError::TraceWrite(e.to_string()))
    }
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace")
            .field("enabled", &self.enabled)
            .field("bound", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_sink_is_a_noop() {
        let mut trace = Trace::default();
        trace.set_enabled(true);
        assert_eq!(trace.emit(format_args!("nothing bound")), Ok(()));
    }

    #[test]
    fn test_emit_writes_timestamped_line() {
        struct Shared(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);
        impl Write for Shared {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.borrow_mut().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut trace = Trace::default();
        trace.set_enabled(true);
        trace.set_sink(Box::new(Shared(buffer.clone())));
        trace.emit(format_args!("starting scan")).unwrap();

        let written = String::from_utf8(buffer.borrow().clone()).unwrap();
        assert!(written.starts_with('['), "line: {written}");
        assert!(written.trim_end().ends_with("starting scan"), "line: {written}");
    }

    #[test]
    fn test_write_failure_surfaces_as_error() {
        struct Failing;
        impl Write for Failing {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut trace = Trace::default();
        trace.set_enabled(true);
        trace.set_sink(Box::new(Failing));
        let err = trace.emit(format_args!("dropped")).unwrap_err();
        assert!(matches!(err, SyntaxError::TraceWrite(_)));
    }

    #[test]
    fn test_disabled_trace_never_touches_sink() {
        struct Panicking;
        impl Write for Panicking {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                panic!("sink must not be written while disabled");
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut trace = Trace::default();
        trace.set_sink(Box::new(Panicking));
        assert_eq!(trace.emit(format_args!("ignored")), Ok(()));
    }
}
