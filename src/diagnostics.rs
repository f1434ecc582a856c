//! Timestamped info lines.
//!
//! The arbiter reports what it did the same way engines report search
//! progress: short text lines pushed to a sink. Commits are `Info`,
//! rejections `Warn`, rollbacks and engine bugs `Error`.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => f.write_str("INFO"),
            DiagnosticLevel::Warn => f.write_str("WARN"),
            DiagnosticLevel::Error => f.write_str("ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub at: DateTime<Utc>,
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn now(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.message
        )
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Collects lines in memory. Clones share the same buffer, so a caller can
/// keep one handle and give the other to the arbiter.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<Diagnostic> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count_at(&self, level: DiagnosticLevel) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|d| d.level == level)
            .count()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

/// Sends every line to two sinks.
pub struct Tee<A, B>(pub A, pub B);

impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for Tee<A, B> {
    fn emit(&self, diagnostic: Diagnostic) {
        self.0.emit(diagnostic.clone());
        self.1.emit(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_clones_share_lines() {
        let sink = MemorySink::default();
        let handle = sink.clone();
        sink.emit(Diagnostic::now(DiagnosticLevel::Warn, "rejected"));
        sink.emit(Diagnostic::now(DiagnosticLevel::Error, "engine bug: boom"));

        assert_eq!(handle.lines().len(), 2);
        assert_eq!(handle.count_at(DiagnosticLevel::Error), 1);
    }

    #[test]
    fn display_has_timestamp_level_and_message() {
        let d = Diagnostic::now(DiagnosticLevel::Info, "committed");
        let line = d.to_string();
        assert!(line.ends_with("[INFO] committed"), "{line}");
        assert!(line.contains('T'));
    }

    #[test]
    fn tee_feeds_both() {
        let a = MemorySink::default();
        let b = MemorySink::default();
        Tee(a.clone(), b.clone()).emit(Diagnostic::now(DiagnosticLevel::Info, "x"));
        assert_eq!((a.lines().len(), b.lines().len()), (1, 1));
    }
}
