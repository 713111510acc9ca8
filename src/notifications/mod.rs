// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification core following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about actions (listing published, bid rejected, etc.) without blocking
//! interaction; rendering is left to the consuming UI layer.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` struct with severity levels
//! - [`queue`] - `ToastQueue` for queuing, expiry, and subscriber fan-out
//! - [`clock`] - `Clock` abstraction so expiry is testable without waits
//!
//! # Usage
//!
//! ```
//! use scrapmarket_core::notifications::{Toast, ToastQueue};
//!
//! let queue = ToastQueue::new();
//! let subscription = queue.subscribe(|toasts| {
//!     // trigger a re-render from the current snapshot
//!     let _ = toasts.len();
//! });
//!
//! let id = queue.push(Toast::success("Listing published"));
//! queue.dismiss(id);
//! queue.unsubscribe(subscription);
//! ```
//!
//! # Design Considerations
//!
//! - Default toast duration: 5s, overridable per toast and per queue
//!   (via settings)
//! - Max live toasts: 3 (oldest evicted silently)
//! - Process-wide default instance via [`ToastQueue::global`]; isolated
//!   instances for tests

mod clock;
mod queue;
mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use queue::{Subscription, ToastQueue};
pub use toast::{Severity, Toast, ToastId};
