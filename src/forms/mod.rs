// SPDX-License-Identifier: MPL-2.0
//! Declarative form validation for marketplace forms.
//!
//! This module provides rule-driven validation for a fixed set of named
//! string fields (onboarding, listing creation, contact details), exposing
//! per-field error/touched state so form UIs don't re-derive validation
//! logic at each call site.
//!
//! # Components
//!
//! - [`rules`] - `ValidationRule` builder and prebuilt [`patterns`]
//! - [`validator`] - `FormValidator` owning per-field state
//!
//! # Usage
//!
//! ```
//! use scrapmarket_core::forms::{patterns, FormValidator, ValidationRule};
//! use std::collections::BTreeMap;
//!
//! let initial = BTreeMap::from([("email".to_string(), String::new())]);
//! let rules = BTreeMap::from([(
//!     "email".to_string(),
//!     ValidationRule::new().required().pattern(patterns::EMAIL.clone()),
//! )]);
//!
//! let mut form = FormValidator::new(initial, rules)?;
//! form.set_value("email", "buyer@scrapmarket.example");
//! assert!(form.validate_all());
//! # Ok::<(), scrapmarket_core::error::Error>(())
//! ```

mod rules;
mod validator;

pub use rules::{patterns, ValidationRule};
pub use validator::{FieldProps, FieldState, FormValidator};
