// SPDX-License-Identifier: MPL-2.0
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use scrapmarket_core::config::{self, Config};
use scrapmarket_core::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use scrapmarket_core::forms::{patterns, FormValidator, ValidationRule};
use scrapmarket_core::notifications::{ManualClock, Toast, ToastQueue};
use tempfile::tempdir;

#[test]
fn toast_lifecycle_end_to_end() {
    let clock = Arc::new(ManualClock::new());
    let queue = ToastQueue::with_clock(clock.clone());

    let observed = Arc::new(Mutex::new(Vec::new()));
    let observed_in = observed.clone();
    queue.subscribe(move |toasts| {
        observed_in
            .lock()
            .unwrap()
            .push(toasts.iter().map(|t| t.title().to_string()).collect::<Vec<_>>());
    });

    // Fill to capacity, then overflow: the oldest is evicted silently.
    let first = queue.success("listing saved");
    queue.info("bid placed");
    queue.warning("price feed stale");
    queue.push(Toast::error("payment declined").with_duration(Duration::from_secs(2)));

    let toasts = queue.toasts();
    assert_eq!(toasts.len(), 3);
    assert_eq!(toasts[0].title(), "payment declined");
    assert!(!queue.contains(first));

    // Dismiss keeps the entry queryable (closed) until its duration passes.
    let dismissed = toasts[0].id();
    queue.dismiss(dismissed);
    assert!(queue.contains(dismissed));
    assert!(!queue.toasts()[0].is_open());

    clock.advance(Duration::from_secs(2));
    queue.tick();
    assert!(!queue.contains(dismissed));

    // Every mutation was fanned out with the post-mutation state.
    let snapshots = observed.lock().unwrap();
    assert_eq!(snapshots.len(), 6); // 4 pushes, 1 dismiss, 1 tick
    assert_eq!(snapshots[3].len(), 3);
    assert_eq!(snapshots[5].len(), 2);
}

#[test]
fn warning_and_error_toasts_reach_diagnostics() {
    let mut collector = DiagnosticsCollector::new(32);
    let queue = ToastQueue::new();
    queue.set_diagnostics(collector.handle());

    queue.success("not logged");
    queue.warning("scale offline");
    queue.error("bid failed");

    collector.process_pending();
    let kinds: Vec<_> = collector.events().map(|e| e.kind().clone()).collect();
    assert_eq!(kinds.len(), 2);
    assert!(matches!(
        &kinds[0],
        DiagnosticEventKind::WarningToast { title } if title == "scale offline"
    ));
    assert!(matches!(
        &kinds[1],
        DiagnosticEventKind::ErrorToast { title } if title == "bid failed"
    ));
}

#[test]
fn onboarding_form_flow() {
    let initial = BTreeMap::from([
        ("email".to_string(), String::new()),
        ("phone".to_string(), String::new()),
        ("company".to_string(), "Nordic Scrap ApS".to_string()),
    ]);
    let rules = BTreeMap::from([
        (
            "email".to_string(),
            ValidationRule::new()
                .required()
                .pattern(patterns::EMAIL.clone()),
        ),
        (
            "phone".to_string(),
            ValidationRule::new().pattern(patterns::PHONE.clone()),
        ),
        (
            "company".to_string(),
            ValidationRule::new().required().min_length(2).max_length(64),
        ),
    ]);
    let mut form = FormValidator::new(initial, rules).expect("key sets are consistent");

    // Pristine: no red state even though email is required and empty.
    assert!(form.is_valid());
    assert!(!form.has_errors());

    // Blur on the empty required field surfaces the error.
    form.set_touched("email");
    assert!(form.has_errors());
    assert_eq!(
        form.field("email").unwrap().error.as_deref(),
        Some("This field is required")
    );

    // Typing an invalid address swaps the error; a valid one clears it.
    form.set_value("email", "not-an-email");
    assert_eq!(
        form.field("email").unwrap().error.as_deref(),
        Some("Please enter a valid email address")
    );
    form.set_value("email", "buyer@scrapmarket.example");
    assert_eq!(form.field("email").unwrap().error, None);

    form.set_value("phone", "+45 31 12 34 56");
    assert!(form.validate_all());

    // Reset returns every field to its initial state.
    form.reset();
    let company = form.field("company").unwrap();
    assert_eq!(company.value, "Nordic Scrap ApS");
    assert_eq!(company.error, None);
    assert!(!company.touched);
}

#[test]
fn rejected_submission_is_logged_to_diagnostics() {
    let mut collector = DiagnosticsCollector::default();

    let initial = BTreeMap::from([("email".to_string(), String::new())]);
    let rules = BTreeMap::from([("email".to_string(), ValidationRule::new().required())]);
    let mut form = FormValidator::new(initial, rules).expect("consistent key sets");
    form.set_diagnostics(collector.handle());

    assert!(!form.validate_all());
    collector.process_pending();

    assert!(collector.events().any(|e| matches!(
        e.kind(),
        DiagnosticEventKind::ValidationRejected { field, message }
            if field == "email" && message == "This field is required"
    )));
}

#[test]
fn queue_settings_follow_persisted_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        max_toasts: Some(2),
        default_toast_duration_ms: Some(2500),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let queue = ToastQueue::from_config(&loaded);

    queue.success("a");
    queue.success("b");
    queue.success("c");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.capacity(), 2);

    // The persisted default duration applies to toasts without an override.
    assert_eq!(queue.toasts()[0].duration(), Duration::from_millis(2500));
    queue.push(Toast::warning("pinned").with_duration(Duration::from_secs(60)));
    assert_eq!(queue.toasts()[0].duration(), Duration::from_secs(60));
}
