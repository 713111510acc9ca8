// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct and `Severity` enum used
//! throughout the notification system.

use std::time::Duration;

use crate::config::DEFAULT_TOAST_DURATION_MS;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    ///
    /// IDs come from a process-wide counter and wrap at `u64::MAX`, so they
    /// are unique for the process lifetime modulo wraparound.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Error requiring attention.
    Error,
    /// Warning that doesn't block operation.
    Warning,
    /// Informational message.
    Info,
}

/// A transient notification to be displayed to the user.
///
/// Toasts follow a two-phase lifecycle: while `open` is true the entry is
/// live; `dismiss` flips `open` to false so the presentation layer can
/// animate out while the entry remains queryable until its removal deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    title: String,
    description: Option<String>,
    /// `None` until an explicit override or the owning queue's default is
    /// applied on push.
    duration: Option<Duration>,
    open: bool,
}

impl Toast {
    /// Creates a new toast with the given severity and title.
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            title: title.into(),
            description: None,
            duration: None,
            open: true,
        }
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Severity::Success, title)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Severity::Error, title)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title)
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Severity::Info, title)
    }

    /// Adds a longer description shown under the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the default display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the display duration before automatic removal.
    ///
    /// Falls back to the crate-wide default until a queue default or an
    /// explicit override has been applied.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
            .unwrap_or(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }

    /// Fills in the owning queue's default duration unless an explicit
    /// override was set.
    pub(crate) fn apply_default_duration(&mut self, default: Duration) {
        if self.duration.is_none() {
            self.duration = Some(default);
        }
    }

    /// Returns whether the toast is still in its live phase.
    ///
    /// `false` means it has been dismissed and is animating out.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }
}
