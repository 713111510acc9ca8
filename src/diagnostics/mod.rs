// SPDX-License-Identifier: MPL-2.0
//! In-process diagnostics for the client-state core.
//!
//! Captures notable events (warning/error toasts, rejected form
//! submissions) in a memory-bounded ring buffer so embedders can surface
//! them in a debug screen or attach them to support reports.
//!
//! # Architecture
//!
//! - [`RingBuffer`]: generic bounded buffer, oldest-evicted
//! - [`DiagnosticEvent`] / [`DiagnosticEventKind`]: what gets captured
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: bounded-channel
//!   producer/consumer pair; producers never block

mod buffer;
mod collector;
mod events;

pub use buffer::RingBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
