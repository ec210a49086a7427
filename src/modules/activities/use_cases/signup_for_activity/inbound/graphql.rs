use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::signup_for_activity::command::SignupForActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignupMutation;

#[Object]
impl SignupMutation {
    async fn signup_for_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = SignupForActivity {
            activity_name,
            email,
        };
        let message = command.confirmation();

        state
            .signup_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(message)
    }
}
