use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::ports::{ActivityRegistry, RegistryError};
use crate::modules::activities::use_cases::signup_for_activity::command::SignupForActivity;
use crate::modules::activities::use_cases::signup_for_activity::decide::{
    DecideError, decide_signup,
};
use std::sync::Arc;

pub struct SignupForActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> SignupForActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    /// Re-reads and decides again when another writer changed the activity
    /// in between, so callers only ever see domain outcomes.
    pub async fn handle(&self, command: SignupForActivity) -> Result<Activity, ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        loop {
            let loaded = self
                .registry
                .find(&activity_name)
                .await?
                .ok_or_else(|| ApplicationError::ActivityNotFound(activity_name.clone()))?;

            let events =
                decide_signup(&loaded.activity, command.clone()).map_err(|reason| match reason {
                    DecideError::AlreadySignedUp => ApplicationError::AlreadySignedUp {
                        email: email.clone(),
                        activity: activity_name.clone(),
                    },
                    DecideError::CapacityExceeded => ApplicationError::CapacityExceeded {
                        activity: activity_name.clone(),
                    },
                })?;

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
                        "participant signed up"
                    );
                    return Ok(updated.activity);
                }
                Err(RegistryError::VersionMismatch { expected, actual }) => {
                    tracing::debug!(activity = %activity_name, expected, actual, "signup raced, retrying");
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}
