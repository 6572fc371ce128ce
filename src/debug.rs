//! Debug-gated diagnostics.
//!
//! No condition in this crate is fatal: unknown themes, storage failures
//! and malformed declarative targets all degrade to "nothing changed".
//! Each such condition is routed through one [`DebugLog`] so hosts and
//! tests can observe what was swallowed without coupling to errors.

use std::fmt;

/// A non-fatal condition worth surfacing when debug mode is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A requested theme name is not in the catalog.
    InvalidTheme { requested: String },
    /// The preference store rejected a read or write.
    PersistenceFailure { key: String, detail: String },
    /// A declarative intent referenced a missing or malformed target.
    MissingTarget { detail: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidTheme { requested } => {
                write!(f, "invalid theme: '{}'", requested)
            }
            Diagnostic::PersistenceFailure { key, detail } => {
                write!(f, "persistence failure for key '{}': {}", key, detail)
            }
            Diagnostic::MissingTarget { detail } => {
                write!(f, "missing target: {}", detail)
            }
        }
    }
}

/// Recording sink for [`Diagnostic`]s, gated on the debug config flag.
///
/// When disabled, [`report`](DebugLog::report) is a no-op. When enabled,
/// each diagnostic is kept for inspection and forwarded as a `tracing`
/// event; the library never installs a subscriber.
#[derive(Debug, Default)]
pub struct DebugLog {
    enabled: bool,
    entries: Vec<Diagnostic>,
}

impl DebugLog {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records and emits a diagnostic; no-op when debug mode is off.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if !self.enabled {
            return;
        }
        match &diagnostic {
            Diagnostic::InvalidTheme { requested } => {
                tracing::warn!(theme = %requested, "ignoring unknown theme");
            }
            Diagnostic::PersistenceFailure { key, detail } => {
                tracing::warn!(%key, %detail, "preference store failure");
            }
            Diagnostic::MissingTarget { detail } => {
                tracing::debug!(%detail, "declarative intent had no usable target");
            }
        }
        self.entries.push(diagnostic);
    }

    /// Diagnostics recorded so far, oldest first.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
