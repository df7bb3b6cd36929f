//! Command-line configuration.
//!
//! Centralizes defaults for the `verity` binary. Rendering constants live in
//! `verity_core::config`.

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "VERITY_LOG";

/// Filter used when the environment variable is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "verity=debug,verity_core=debug";

// =============================================================================
// Input
// =============================================================================

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";
