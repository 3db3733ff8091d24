//! Use case orchestration for resultguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, resolved,
//! domain, and render layers. It stays thin and delegates the policy itself to the domain.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod patterns;
mod render;
mod report;

pub use check::{
    CheckInput, CheckOutput, DumpSource, build_engine, load_config, reload_engine, run_check,
    verdict_exit_code,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use patterns::{PatternListing, format_patterns, run_patterns};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
