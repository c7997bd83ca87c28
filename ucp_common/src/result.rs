//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `UcpError`, so functions can simply return `Result<T>`.
use crate::error::UcpError;

/// Workspace-wide `Result` alias with `UcpError` as the default error.
pub type Result<T, E = UcpError> = std::result::Result<T, E>;
