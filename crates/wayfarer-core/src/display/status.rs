//! Status and confirmation message types for operation feedback.

use std::fmt;

/// How a status line should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    /// Neutral confirmation without a prefix.
    Note,
}

/// Wrapper type for displaying operation confirmation messages.
///
/// This provides consistent formatting for operations that require
/// user confirmation or status updates.
pub struct OperationStatus {
    pub message: String,
    pub tone: Tone,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            tone: Tone::Success,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            tone: Tone::Failure,
        }
    }

    /// Create a neutral confirmation.
    pub fn note(message: String) -> Self {
        Self {
            message,
            tone: Tone::Note,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone {
            Tone::Success => writeln!(f, "Success: {}", self.message),
            Tone::Failure => writeln!(f, "Error: {}", self.message),
            Tone::Note => writeln!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Trip cleared".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Nothing to share".to_string());
        assert!(format!("{failure}").contains("Error:"));

        let note = OperationStatus::note("No preferences stored.".to_string());
        assert_eq!(format!("{note}"), "No preferences stored.\n");
    }
}
