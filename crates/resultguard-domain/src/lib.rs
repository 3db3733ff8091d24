//! Pure policy evaluation (no IO).
//!
//! Input: resolved call sites constructed elsewhere.
//! Output: a decision per call site, and findings + verdict + summary data per pass.

#![forbid(unsafe_code)]

pub mod annotations;
pub mod decision;
pub mod model;
pub mod patterns;
pub mod policy;
pub mod purity;
pub mod report;

mod engine;
mod fingerprint;
mod shared;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use decision::{CleanReason, Decision, DecisionEngine, SkipReason, ViolationReason};
pub use engine::{evaluate, violation_message};
pub use shared::SharedEngine;
