// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kinds of events the core reports for later inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A warning toast was emitted.
    WarningToast { title: String },
    /// An error toast was emitted.
    ErrorToast { title: String },
    /// A form-wide validation pass rejected a field.
    ValidationRejected { field: String, message: String },
}

/// A single captured event with its wall-clock timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    timestamp: DateTime<Utc>,
    kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Returns when the event was captured.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns what happened.
    #[must_use]
    pub fn kind(&self) -> &DiagnosticEventKind {
        &self.kind
    }
}
