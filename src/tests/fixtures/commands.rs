// Builders for the activity commands, pre-filled with a Chess Club signup
// for an email that is not on the seed roster.

use crate::modules::activities::use_cases::signup_for_activity::command::SignupForActivity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

const ACTIVITY_NAME: &str = "Chess Club";
const EMAIL: &str = "newstudent@mergington.edu";

pub struct SignupForActivityBuilder {
    inner: SignupForActivity,
}

impl Default for SignupForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SignupForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignupForActivity {
                activity_name: ACTIVITY_NAME.to_string(),
                email: EMAIL.to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> SignupForActivity {
        self.inner
    }
}

pub struct UnregisterFromActivityBuilder {
    inner: UnregisterFromActivity,
}

impl Default for UnregisterFromActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UnregisterFromActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: UnregisterFromActivity {
                activity_name: ACTIVITY_NAME.to_string(),
                email: "michael@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> UnregisterFromActivity {
        self.inner
    }
}

#[cfg(test)]
mod activity_command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_signup_targets_chess_club_with_a_new_email() {
        let built = SignupForActivityBuilder::default().build();
        assert_eq!(built.activity_name, "Chess Club");
        assert_eq!(built.email, "newstudent@mergington.edu");
    }

    #[rstest]
    fn default_unregister_targets_a_seeded_member() {
        let built = UnregisterFromActivityBuilder::default().build();
        assert_eq!(built.activity_name, "Chess Club");
        assert_eq!(built.email, "michael@mergington.edu");
    }

    #[rstest]
    fn setters_override_all_fields() {
        let signup = SignupForActivityBuilder::new()
            .activity_name("Art Club")
            .email("a@mergington.edu")
            .build();
        let unregister = UnregisterFromActivityBuilder::new()
            .activity_name("Art Club")
            .email("a@mergington.edu")
            .build();
        assert_eq!(signup.activity_name, unregister.activity_name);
        assert_eq!(signup.email, unregister.email);
    }
}
