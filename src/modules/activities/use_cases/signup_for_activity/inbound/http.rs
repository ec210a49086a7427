use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::signup_for_activity::command::SignupForActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignupParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<SignupParams>, QueryRejection>,
) -> Result<Json<SignupResponse>, ApplicationError> {
    let Query(params) =
        params.map_err(|rejection| ApplicationError::InvalidRequest(rejection.body_text()))?;

    let command = SignupForActivity {
        activity_name,
        email: params.email,
    };
    let message = command.confirmation();

    if let Err(error) = state.signup_handler.handle(command).await {
        tracing::debug!(%error, "signup rejected");
        return Err(error);
    }

    Ok(Json(SignupResponse { message }))
}
