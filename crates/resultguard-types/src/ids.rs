//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator naming the
//! rule of the decision policy that produced the finding.

// Checks
pub const CHECK_CALLS_RESULT_IGNORED: &str = "calls.result_ignored";

// Codes: calls.result_ignored
pub const CODE_SIMPLE_GETTER: &str = "simple_getter";
pub const CODE_NON_LIBRARY_CALL: &str = "non_library_call";
pub const CODE_PURE_METHOD: &str = "pure_method";
pub const CODE_CHECK_RETURN_VALUE: &str = "check_return_value";
pub const CODE_MUST_USE_PATTERN: &str = "must_use_pattern";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
