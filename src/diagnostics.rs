//! Non-fatal conditions found while assembling a page.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The record has no first entry, or that entry has no `name`.
    MissingClassName,
    /// A member inside a group has no `name`.
    MissingMemberName {
        class: Option<String>,
        kind: String,
        index: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingClassName => write!(f, "class name is missing"),
            Diagnostic::MissingMemberName { class, kind, index } => write!(
                f,
                "{} entry #{} of {} has no name",
                kind,
                index,
                class.as_deref().unwrap_or("<unnamed class>")
            ),
        }
    }
}

/// Sink for diagnostics, handed to the assembler and classifier.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade, tagged with the input they came from.
pub struct LogDiagnostics<'a> {
    pub source: &'a str,
}

impl Diagnostics for LogDiagnostics<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}: {}", self.source, diagnostic);
    }
}

impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
