// Pure decision function for removing a participant.
//
// The email must currently be on the roster. Never performs input or output.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("participant not registered")]
    NotRegistered,
}

pub fn decide_unregister(
    activity: &Activity,
    command: UnregisterFromActivity,
) -> Result<Vec<ActivityEvent>, DecideError> {
    if !activity.is_signed_up(&command.email) {
        return Err(DecideError::NotRegistered);
    }
    Ok(vec![ActivityEvent::ParticipantUnregistered {
        email: command.email,
    }])
}
