use crate::modules::activities::core::ports::RegistryError;
use thiserror::Error;

/// Failures of the signup and unregister use cases.
///
/// The display strings are what callers see in the `detail` field, so the
/// phrases "not found", "already signed up", "capacity" and "not registered"
/// have to stay in them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { email: String, activity: String },

    #[error("Activity has reached maximum capacity")]
    CapacityExceeded { activity: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { email: String, activity: String },

    #[error("{0}")]
    InvalidRequest(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<RegistryError> for ApplicationError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::UnknownActivity(name) => Self::ActivityNotFound(name),
            // handlers retry on a stale version, so one reaching here is a bug
            error @ RegistryError::VersionMismatch { .. } => Self::Unexpected(error.to_string()),
            RegistryError::Backend(message) => Self::Unexpected(message),
        }
    }
}
