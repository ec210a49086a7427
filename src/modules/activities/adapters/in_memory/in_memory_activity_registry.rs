// In memory implementation of the ActivityRegistry port.
//
// Purpose
// - Hold the activity map for the lifetime of the process.
//
// Responsibilities
// - Start from the seed dataset, or empty for isolated tests.
// - Enforce optimistic concurrency per activity by checking the expected version.
// - Apply events through evolve so the registry and the deciders agree on semantics.

use crate::modules::activities::core::activity::{Activities, Activity};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::ports::{ActivityRegistry, LoadedActivity, RegistryError};
use crate::modules::activities::core::seed::seed_activities;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry {
    activity: Activity,
    version: i64,
}

#[derive(Default)]
pub struct InMemoryActivityRegistry {
    inner: RwLock<IndexMap<String, Entry>>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl InMemoryActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub fn from_activities(activities: Activities) -> Self {
        let entries = activities
            .into_iter()
            .map(|(name, activity)| {
                (
                    name,
                    Entry {
                        activity,
                        version: 0,
                    },
                )
            })
            .collect();
        Self {
            inner: RwLock::new(entries),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RegistryError> {
        if self.is_offline {
            return Err(RegistryError::Backend("Activity registry offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn get_all(&self) -> Result<Activities, RegistryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .map(|(name, entry)| (name.clone(), entry.activity.clone()))
            .collect())
    }

    async fn find(&self, name: &str) -> Result<Option<LoadedActivity>, RegistryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(name).map(|entry| LoadedActivity {
            activity: entry.activity.clone(),
            version: entry.version,
        }))
    }

    async fn append(
        &self,
        name: &str,
        expected_version: i64,
        events: &[ActivityEvent],
    ) -> Result<LoadedActivity, RegistryError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        let entry = guard
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownActivity(name.to_string()))?;
        if entry.version != expected_version {
            return Err(RegistryError::VersionMismatch {
                expected: expected_version,
                actual: entry.version,
            });
        }

        entry.activity = events
            .iter()
            .fold(entry.activity.clone(), |activity, event| evolve(activity, event));
        entry.version += events.len() as i64;

        Ok(LoadedActivity {
            activity: entry.activity.clone(),
            version: entry.version,
        })
    }
}
