// SPDX-License-Identifier: MPL-2.0
//! `scrapmarket_core` is the client-side state core of the ScrapMarket
//! trading UI.
//!
//! It provides the two reusable pieces every screen leans on: a bounded,
//! time-expiring toast notification queue with subscriber fan-out
//! ([`notifications`]) and a declarative form-validation engine ([`forms`]),
//! plus user-preference persistence ([`config`]) and an in-process event
//! log ([`diagnostics`]). Rendering, routing, and the marketplace screens
//! themselves live in the consuming UI layer.

#![doc(html_root_url = "https://docs.rs/scrapmarket_core/0.2.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forms;
pub mod notifications;
