//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Lockfile identifiers
pub const FIELD_BASE_SHA: &str = "base_sha";
pub const FIELD_LOCKFILE_PATH: &str = "lockfile_path";
pub const FIELD_PACKAGE_NAME: &str = "package_name";

// Collection sizes
pub const FIELD_PACKAGE_COUNT: &str = "package_count";
pub const FIELD_ADDED_LEN: &str = "added_len";
pub const FIELD_REMOVED_LEN: &str = "removed_len";
pub const FIELD_UPDATED_LEN: &str = "updated_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
