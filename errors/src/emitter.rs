//! The diagnostic sink the parser reports syntax errors through.
//!
//! Grounded on the buffered-handler pattern used throughout this compiler's
//! test suites: a [`Handler`] can either print straight to stderr (the
//! default for a real parse) or, in tests, accumulate every line into a
//! shared [`Buffer`] so assertions can inspect exact diagnostic text
//! without touching the process's real stderr.

use colored::Colorize;
use minijava_span::Span;
use std::{
    cell::{Cell, RefCell},
    fmt, rc,
};

/// Shared, append-only store of diagnostic lines, used by [`Handler::new_with_buf`].
#[derive(Clone, Default)]
pub struct Buffer(rc::Rc<RefCell<Vec<String>>>);

impl Buffer {
    /// Returns every diagnostic emitted so far, joined one per line.
    pub fn extract(&self) -> String {
        self.0.borrow().join("")
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn push(&self, line: String) {
        self.0.borrow_mut().push(line);
    }
}

enum Sink {
    Stderr,
    Buffer(Buffer),
}

/// Accumulates syntax diagnostics for a single parse and answers whether
/// any were emitted. Not `Sync`/`Send`: the parser is single-threaded, so
/// there is no need to pay for synchronization here.
pub struct Handler {
    sink: Sink,
    file_name: String,
    error_occurred: Cell<bool>,
}

impl Handler {
    /// A handler that writes formatted diagnostics to stderr, the mode a
    /// real parse runs in.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { sink: Sink::Stderr, file_name: file_name.into(), error_occurred: Cell::new(false) }
    }

    /// A handler that buffers diagnostics in memory, returning the buffer
    /// so the caller can assert on exact message text.
    pub fn new_with_buf(file_name: impl Into<String>) -> (Self, Buffer) {
        let buf = Buffer::default();
        (
            Self { sink: Sink::Buffer(buf.clone()), file_name: file_name.into(), error_occurred: Cell::new(false) },
            buf,
        )
    }

    /// Emits a single diagnostic of form `<file>:<line>: <message>`.
    pub fn emit_err(&self, span: Span, message: impl fmt::Display) {
        self.error_occurred.set(true);
        let line = format!("{}:{}: {}\n", self.file_name, span.line(), message);
        tracing::warn!(target: "minijava_parser", file = %self.file_name, line = span.line(), "{}", message);
        match &self.sink {
            Sink::Stderr => eprint!("{}", line.red()),
            Sink::Buffer(buf) => buf.push(line),
        }
    }

    /// `true` once at least one diagnostic has been emitted through this handler.
    pub fn error_has_occurred(&self) -> bool {
        self.error_occurred.get()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
