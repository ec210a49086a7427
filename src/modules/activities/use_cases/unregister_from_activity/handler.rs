use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::ports::{ActivityRegistry, RegistryError};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::{
    DecideError, decide_unregister,
};
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> UnregisterFromActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    /// Re-reads and decides again when another writer changed the activity
    /// in between, so callers only ever see domain outcomes.
    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<Activity, ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        loop {
            let loaded = self
                .registry
                .find(&activity_name)
                .await?
                .ok_or_else(|| ApplicationError::ActivityNotFound(activity_name.clone()))?;

            let events = decide_unregister(&loaded.activity, command.clone()).map_err(
                |reason| match reason {
                    DecideError::NotRegistered => ApplicationError::NotRegistered {
                        email: email.clone(),
                        activity: activity_name.clone(),
                    },
                },
            )?;

            match self
                .registry
                .append(&activity_name, loaded.version, &events)
                .await
            {
                Ok(updated) => {
                    tracing::info!(
                        activity = %activity_name,
                        %email,
                        participants = updated.activity.participants.len(),
                        "participant unregistered"
                    );
                    return Ok(updated.activity);
                }
                Err(RegistryError::VersionMismatch { expected, actual }) => {
                    tracing::debug!(activity = %activity_name, expected, actual, "unregister raced, retrying");
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}
