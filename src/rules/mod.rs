//! # Rule engine
//!
//! A small priority-ordered rule engine. Every rule whose conditions all hold
//! against the supplied facts fires; the highest-priority one decides the
//! action. Rule tables are plain JSON, so an edited table can be loaded at
//! runtime.
//!
//! ## Example
//!
//! ```rust
//! use bitga::rules::{Facts, RuleSet};
//! use serde_json::json;
//!
//! let facts: Facts = json!({"windows_open": true, "temperature": 30})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let rules = RuleSet::ac_defaults();
//! let evaluation = rules.evaluate(&facts);
//!
//! assert_eq!(evaluation.best.unwrap().action_str("mode"), Some("OFF"));
//! ```

pub mod condition;
pub mod defaults;
pub mod engine;

pub use condition::{Condition, Facts, Operator};
pub use engine::{evaluate, Evaluation, Rule, RuleSet};
