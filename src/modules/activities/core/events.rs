#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    ParticipantSignedUp { email: String },
    ParticipantUnregistered { email: String },
}
