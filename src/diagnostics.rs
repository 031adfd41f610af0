//! Conversion diagnostic collection.
//!
//! Non-fatal issues encountered while converting or writing a batch are
//! collected as [`Diagnostic`] items instead of being silently dropped or
//! escalated to hard errors. After an operation the caller can inspect the
//! collection to see which primitives were skipped and why.

use std::fmt;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Non-fatal condition worth surfacing (e.g. unexpected style data).
    Warning,
    /// A primitive or entity was dropped from the output.
    Skipped,
    /// An error that was recovered from without aborting the batch.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Skipped => write!(f, "Skipped"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single diagnostic produced during conversion or writing.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The severity / category.
    pub severity: Severity,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Collects diagnostics during one conversion or write cycle.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    items: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a diagnostic.
    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        self.items.push(Diagnostic::new(severity, message));
    }

    /// Check if there are any diagnostics.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Count diagnostics of a specific severity.
    pub fn count_of(&self, severity: Severity) -> usize {
        self.items.iter().filter(|d| d.severity == severity).count()
    }

    /// Check whether any diagnostic of the given severity exists.
    pub fn has(&self, severity: Severity) -> bool {
        self.items.iter().any(|d| d.severity == severity)
    }

    /// Consume the sink into a `Vec`.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl<'a> IntoIterator for &'a DiagnosticSink {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
