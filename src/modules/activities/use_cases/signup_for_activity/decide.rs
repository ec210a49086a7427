// Pure decision function for signing a participant up.
//
// Rules, checked in order:
// - the email must not already be on the roster;
// - the roster must have a free seat.
// Never performs input or output; the caller resolves the activity first.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::signup_for_activity::command::SignupForActivity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("participant already signed up")]
    AlreadySignedUp,

    #[error("activity is at capacity")]
    CapacityExceeded,
}

pub fn decide_signup(
    activity: &Activity,
    command: SignupForActivity,
) -> Result<Vec<ActivityEvent>, DecideError> {
    if activity.is_signed_up(&command.email) {
        return Err(DecideError::AlreadySignedUp);
    }
    if activity.is_full() {
        return Err(DecideError::CapacityExceeded);
    }
    Ok(vec![ActivityEvent::ParticipantSignedUp {
        email: command.email,
    }])
}
