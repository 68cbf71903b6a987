//! Status and confirmation message types for operation feedback.

use std::fmt;

/// A one-line message for an operation that has no resource to show,
/// such as writing an export file.
///
/// Failures are not rendered here; they surface as errors from the planner.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}
