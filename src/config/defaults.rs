// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for user-tunable settings.

/// Maximum number of live toasts before the oldest is evicted.
pub const DEFAULT_MAX_TOASTS: usize = 3;

/// Display duration before a toast is removed automatically.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Default diagnostics ring-buffer capacity (events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Smallest accepted diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Largest accepted diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;
