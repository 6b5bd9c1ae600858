//! Typed errors for code generation.

use thiserror::Error;

/// Category of a code generation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Two services would collide once generated.
    NonUniqueServiceName,
    /// Two methods of the same service would collide once generated.
    NonUniqueMethodName,
}

/// Error raised while validating or translating a code generation request.
///
/// Equality is value-based (code plus message) so callers can assert the
/// exact failure they expect. The message is the complete, user-facing
/// diagnostic; no other metadata is attached.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CodeGenError {
    pub code: ErrorCode,
    pub message: String,
}

impl CodeGenError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
