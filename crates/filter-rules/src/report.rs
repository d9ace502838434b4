//! Diagnostic reporting hooks for rule parsing.
//!
//! The parser never prints. Hosts that want failures surfaced as they happen
//! pass a [`DiagnosticReporter`] to
//! [`parse_with_reporter`](crate::parse_with_reporter); the error value is
//! still returned afterwards.

use std::io::{self, Write};

/// Receives human-readable diagnostics about rejected rules.
pub trait DiagnosticReporter {
    /// Records one diagnostic message.
    fn report(&mut self, message: &str);
}

/// Reporter that discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl DiagnosticReporter for NoopReporter {
    fn report(&mut self, _message: &str) {}
}

/// Collects messages in memory.
impl DiagnosticReporter for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Writes each message on its own line to an [`io::Write`] implementor.
///
/// Write failures are remembered rather than propagated; inspect them with
/// [`last_error`](Self::last_error).
#[derive(Debug)]
pub struct WriterReporter<W> {
    writer: W,
    prefix: &'static str,
    last_error: Option<io::Error>,
}

impl<W: Write> WriterReporter<W> {
    /// Creates a reporter writing to `writer` with the default `error: ` prefix.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_prefix(writer, "error: ")
    }

    /// Creates a reporter that prepends `prefix` to every line.
    #[must_use]
    pub const fn with_prefix(writer: W, prefix: &'static str) -> Self {
        Self {
            writer,
            prefix,
            last_error: None,
        }
    }

    /// Returns the most recent write failure, if any.
    #[must_use]
    pub const fn last_error(&self) -> Option<&io::Error> {
        self.last_error.as_ref()
    }

    /// Consumes the reporter, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticReporter for WriterReporter<W> {
    fn report(&mut self, message: &str) {
        if let Err(error) = writeln!(self.writer, "{}{message}", self.prefix) {
            self.last_error = Some(error);
        }
    }
}

/// Forwards messages to `tracing` as `warn` events.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

#[cfg(feature = "tracing")]
impl DiagnosticReporter for TracingReporter {
    fn report(&mut self, message: &str) {
        tracing::warn!(target: crate::debug_filter::FILTER_TARGET, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_reporter_writes_prefixed_lines() {
        let mut reporter = WriterReporter::new(Vec::new());
        reporter.report("first");
        reporter.report("second");

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "error: first\nerror: second\n");
    }

    #[test]
    fn writer_reporter_custom_prefix() {
        let mut reporter = WriterReporter::with_prefix(Vec::new(), "schema-filter: ");
        reporter.report("bad rule");
        assert_eq!(reporter.into_inner(), b"schema-filter: bad rule\n");
    }

    #[test]
    fn writer_reporter_remembers_write_failures() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut reporter = WriterReporter::new(Broken);
        assert!(reporter.last_error().is_none());
        reporter.report("lost");
        assert!(reporter.last_error().is_some());
    }

    #[test]
    fn vec_reporter_collects_messages() {
        let mut messages: Vec<String> = Vec::new();
        messages.report("one");
        assert_eq!(messages, vec!["one".to_owned()]);
    }

    #[test]
    fn noop_reporter_accepts_messages() {
        NoopReporter.report("ignored");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_reporter_emits_warn_events() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let error = tracing::subscriber::with_default(subscriber, || {
            crate::parse_with_reporter("DropType(Table)", &mut TracingReporter).unwrap_err()
        });
        assert_eq!(error.kind(), crate::ParseErrorKind::UnknownOperation);

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("schema_filter::filter"), "{logged}");
        assert!(logged.contains("DropType(Table)"), "{logged}");
    }
}
