// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastQueue` handles queuing, removal deadlines, and dismissal of
//! toasts. It bounds the number of live toasts and fans every state change
//! out to registered listeners.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::toast::{Severity, Toast, ToastId};
use crate::config::{Config, DEFAULT_MAX_TOASTS, DEFAULT_TOAST_DURATION_MS};
use crate::diagnostics::DiagnosticsHandle;

type Listener = Arc<dyn Fn(&[Toast]) + Send + Sync>;

/// Handle identifying a registered listener, used to deregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

#[derive(Default)]
struct State {
    /// Live toasts, newest first.
    toasts: VecDeque<Toast>,
    /// Pending removal deadline per toast id. At most one entry per id.
    removals: HashMap<ToastId, Instant>,
}

impl State {
    fn snapshot(&self) -> Vec<Toast> {
        self.toasts.iter().cloned().collect()
    }
}

/// Bounded, time-expiring queue of toasts with subscriber fan-out.
///
/// All operations are synchronous and infallible. Insertion prepends;
/// overflow silently evicts the oldest entries so `len() <= capacity()`
/// holds after every push. Removal deadlines are computed against an
/// injected [`Clock`] and processed by [`tick`](Self::tick), so tests can
/// drive expiry with a [`ManualClock`](super::ManualClock) instead of
/// wall-clock waits.
///
/// The process-wide default instance is available through
/// [`ToastQueue::global`]; isolated instances can be built for tests and
/// embedders.
pub struct ToastQueue {
    capacity: usize,
    default_duration: Duration,
    clock: Arc<dyn Clock>,
    state: Mutex<State>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_subscription: AtomicU64,
    diagnostics: Mutex<Option<DiagnosticsHandle>>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    /// Creates a queue with the default capacity and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Creates a queue driven by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            capacity: DEFAULT_MAX_TOASTS,
            default_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            clock,
            state: Mutex::new(State::default()),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            diagnostics: Mutex::new(None),
        }
    }

    /// Overrides the capacity bound. Clamped to at least 1.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Overrides the duration applied to toasts pushed without an explicit
    /// override.
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Creates a queue configured from user settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_capacity(config.max_toasts())
            .with_default_duration(Duration::from_millis(config.default_toast_duration_ms()))
    }

    /// Returns the process-wide default queue.
    ///
    /// Initialized once on first use; there is no teardown beyond
    /// unsubscribing individual listeners.
    pub fn global() -> &'static ToastQueue {
        static GLOBAL: OnceLock<ToastQueue> = OnceLock::new();
        GLOBAL.get_or_init(ToastQueue::new)
    }

    /// Sets the diagnostics handle. Warning and error toasts are logged
    /// through it on emission.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        *self.diagnostics.lock().unwrap() = Some(handle);
    }

    /// Pushes a toast and schedules its automatic removal.
    ///
    /// The toast is prepended; if the queue exceeds capacity the oldest
    /// entries are evicted silently and their pending removals cancelled.
    /// Scheduling is idempotent per id.
    ///
    /// Toasts without an explicit duration override take the queue's
    /// default duration.
    pub fn push(&self, mut toast: Toast) -> ToastId {
        toast.apply_default_duration(self.default_duration);
        let id = toast.id();
        let duration = toast.duration();

        if let Some(handle) = self.diagnostics.lock().unwrap().as_ref() {
            match toast.severity() {
                Severity::Warning => handle.log_warning_toast(toast.title()),
                Severity::Error => handle.log_error_toast(toast.title()),
                Severity::Success | Severity::Info => {}
            }
        }

        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.toasts.push_front(toast);
            while state.toasts.len() > self.capacity {
                if let Some(evicted) = state.toasts.pop_back() {
                    state.removals.remove(&evicted.id());
                }
            }
            let deadline = self.clock.now() + duration;
            state.removals.entry(id).or_insert(deadline);
            state.snapshot()
        };
        self.notify(&snapshot);
        id
    }

    /// Emits a success toast with the given title.
    pub fn success(&self, title: impl Into<String>) -> ToastId {
        self.push(Toast::success(title))
    }

    /// Emits an error toast with the given title.
    pub fn error(&self, title: impl Into<String>) -> ToastId {
        self.push(Toast::error(title))
    }

    /// Emits a warning toast with the given title.
    pub fn warning(&self, title: impl Into<String>) -> ToastId {
        self.push(Toast::warning(title))
    }

    /// Emits an info toast with the given title.
    pub fn info(&self, title: impl Into<String>) -> ToastId {
        self.push(Toast::info(title))
    }

    /// Dismisses a toast: marks it closed and schedules its removal after
    /// its configured duration if none is already pending.
    ///
    /// The entry stays queryable until the deadline passes, giving the
    /// presentation layer time to animate out. Dismissing an unknown id is
    /// a silent no-op.
    pub fn dismiss(&self, id: ToastId) {
        let now = self.clock.now();
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            let Some(toast) = state.toasts.iter_mut().find(|t| t.id() == id) else {
                return;
            };
            toast.close();
            let deadline = now + toast.duration();
            state.removals.entry(id).or_insert(deadline);
            state.snapshot()
        };
        self.notify(&snapshot);
    }

    /// Dismisses every live toast.
    pub fn dismiss_all(&self) {
        let now = self.clock.now();
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            if state.toasts.is_empty() {
                return;
            }
            let deadlines: Vec<(ToastId, Instant)> = state
                .toasts
                .iter_mut()
                .map(|toast| {
                    toast.close();
                    (toast.id(), now + toast.duration())
                })
                .collect();
            for (id, deadline) in deadlines {
                state.removals.entry(id).or_insert(deadline);
            }
            state.snapshot()
        };
        self.notify(&snapshot);
    }

    /// Removes a toast immediately, cancelling any pending removal.
    ///
    /// Removing an unknown id is a silent no-op.
    pub fn remove(&self, id: ToastId) {
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.removals.remove(&id);
            let Some(pos) = state.toasts.iter().position(|t| t.id() == id) else {
                return;
            };
            state.toasts.remove(pos);
            state.snapshot()
        };
        self.notify(&snapshot);
    }

    /// Removes every toast immediately.
    pub fn remove_all(&self) {
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.removals.clear();
            if state.toasts.is_empty() {
                return;
            }
            state.toasts.clear();
            state.snapshot()
        };
        self.notify(&snapshot);
    }

    /// Processes removal deadlines that have passed.
    ///
    /// Call periodically, or let [`spawn_ticker`](Self::spawn_ticker) drive
    /// it. Deadlines for ids no longer present are discarded silently.
    pub fn tick(&self) {
        let now = self.clock.now();
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            let due: Vec<ToastId> = state
                .removals
                .iter()
                .filter(|(_, deadline)| **deadline <= now)
                .map(|(id, _)| *id)
                .collect();
            if due.is_empty() {
                return;
            }
            for id in &due {
                state.removals.remove(id);
            }
            let before = state.toasts.len();
            state.toasts.retain(|t| !due.contains(&t.id()));
            if state.toasts.len() == before {
                return;
            }
            state.snapshot()
        };
        self.notify(&snapshot);
    }

    /// Registers a listener invoked with the full post-mutation state on
    /// every state change.
    pub fn subscribe(&self, listener: impl Fn(&[Toast]) + Send + Sync + 'static) -> Subscription {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().unwrap().push((id, Arc::new(listener)));
        Subscription(id)
    }

    /// Deregisters a listener. Unknown subscriptions are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(id, _)| *id != subscription.0);
    }

    /// Returns a snapshot of the live toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.state.lock().unwrap().snapshot()
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().toasts.len()
    }

    /// Returns true if no toasts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().toasts.is_empty()
    }

    /// Returns true if a toast with the given id is still queryable.
    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.state
            .lock()
            .unwrap()
            .toasts
            .iter()
            .any(|t| t.id() == id)
    }

    /// Returns the capacity bound.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Spawns a tokio task that calls [`tick`](Self::tick) every `period`.
    ///
    /// Abort the returned handle to stop the ticker.
    pub fn spawn_ticker(self: &Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        let queue = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                queue.tick();
            }
        })
    }

    /// Snapshots state and notifies listeners outside the state lock.
    ///
    /// The snapshot is taken inside the mutation's critical section, so
    /// listeners always observe the exact post-mutation state even though
    /// they run unlocked.
    fn notify(&self, snapshot: &[Toast]) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}
