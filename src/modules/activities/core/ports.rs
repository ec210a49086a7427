// Ports the activities core needs from the outside world.
//
// - ActivityRegistry owns the activity map. Handlers read through it and write
//   events back with the version they read, so racing writers cannot break the
//   roster invariants.
// - Adapters implement these traits; the in-memory registry is the only one.

use crate::modules::activities::core::activity::{Activities, Activity};
use crate::modules::activities::core::events::ActivityEvent;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("activity {0} not found")]
    UnknownActivity(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

#[async_trait]
pub trait ActivityRegistry: Send + Sync {
    async fn get_all(&self) -> Result<Activities, RegistryError>;

    async fn find(&self, name: &str) -> Result<Option<LoadedActivity>, RegistryError>;

    /// Applies `events` to the named activity if it is still at `expected_version`.
    async fn append(
        &self,
        name: &str,
        expected_version: i64,
        events: &[ActivityEvent],
    ) -> Result<LoadedActivity, RegistryError>;
}
