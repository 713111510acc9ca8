// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing events.
//!
//! The collector receives events through a bounded channel and stores them
//! in a ring buffer. Producers hold a cheap cloneable [`DiagnosticsHandle`]
//! and never block: when the channel is full, events are dropped.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::RingBuffer;
use super::events::{DiagnosticEvent, DiagnosticEventKind};
use crate::config::{Config, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY};

/// Capacity of the handle-to-collector channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a warning-toast emission. Non-blocking; dropped if the
    /// channel is full.
    pub fn log_warning_toast(&self, title: &str) {
        self.log(DiagnosticEventKind::WarningToast {
            title: title.to_string(),
        });
    }

    /// Records an error-toast emission. Non-blocking.
    pub fn log_error_toast(&self, title: &str) {
        self.log(DiagnosticEventKind::ErrorToast {
            title: title.to_string(),
        });
    }

    /// Records a field rejected by a form-wide validation pass. Non-blocking.
    pub fn log_validation_rejected(&self, field: &str, message: &str) {
        self.log(DiagnosticEventKind::ValidationRejected {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector owning the event buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: RingBuffer<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl DiagnosticsCollector {
    /// Creates a collector whose buffer holds up to `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        Self {
            buffer: RingBuffer::with_capacity(capacity),
            event_tx,
            event_rx,
        }
    }

    /// Creates a collector sized from user settings.
    ///
    /// The configured capacity is clamped to the accepted bounds by
    /// [`Config::diagnostics_buffer_capacity`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.diagnostics_buffer_capacity())
    }

    /// Returns a producer handle connected to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains pending events from the channel into the buffer.
    ///
    /// Call periodically, e.g. on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Iterates stored events oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the buffer's maximum capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Drops all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_reach_buffer_after_process_pending() {
        let mut collector = DiagnosticsCollector::new(10);
        let handle = collector.handle();

        handle.log_error_toast("bid failed");
        handle.log_warning_toast("price feed stale");
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.events().map(DiagnosticEvent::kind).collect();
        assert!(matches!(
            kinds[0],
            DiagnosticEventKind::ErrorToast { title } if title == "bid failed"
        ));
    }

    #[test]
    fn buffer_evicts_oldest_beyond_capacity() {
        let mut collector = DiagnosticsCollector::new(2);
        let handle = collector.handle();

        handle.log_error_toast("first");
        handle.log_error_toast("second");
        handle.log_error_toast("third");
        collector.process_pending();

        assert_eq!(collector.len(), 2);
        let titles: Vec<_> = collector
            .events()
            .filter_map(|e| match e.kind() {
                DiagnosticEventKind::ErrorToast { title } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["second", "third"]);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new(256);
        let handle = collector.handle();

        for i in 0..(EVENT_CHANNEL_CAPACITY + 10) {
            handle.log_warning_toast(&format!("event-{i}"));
        }
        collector.process_pending();

        assert_eq!(collector.len(), EVENT_CHANNEL_CAPACITY);
    }

    #[test]
    fn from_config_sizes_the_buffer() {
        let config = Config {
            diagnostics_buffer_capacity: Some(32),
            ..Config::default()
        };
        let collector = DiagnosticsCollector::from_config(&config);
        assert_eq!(collector.capacity(), 32);
    }

    #[test]
    fn from_config_clamps_out_of_range_capacity() {
        use crate::config::{MAX_DIAGNOSTICS_BUFFER_CAPACITY, MIN_DIAGNOSTICS_BUFFER_CAPACITY};

        let low = Config {
            diagnostics_buffer_capacity: Some(1),
            ..Config::default()
        };
        assert_eq!(
            DiagnosticsCollector::from_config(&low).capacity(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );

        let high = Config {
            diagnostics_buffer_capacity: Some(1_000_000),
            ..Config::default()
        };
        assert_eq!(
            DiagnosticsCollector::from_config(&high).capacity(),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut collector = DiagnosticsCollector::new(4);
        collector.handle().log_validation_rejected("email", "This field is required");
        collector.process_pending();
        assert_eq!(collector.len(), 1);

        collector.clear();
        assert!(collector.is_empty());
    }
}
