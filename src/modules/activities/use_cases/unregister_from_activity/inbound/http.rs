use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct UnregisterResponse {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<UnregisterParams>, QueryRejection>,
) -> Result<Json<UnregisterResponse>, ApplicationError> {
    let Query(params) =
        params.map_err(|rejection| ApplicationError::InvalidRequest(rejection.body_text()))?;

    let command = UnregisterFromActivity {
        activity_name,
        email: params.email,
    };
    let message = command.confirmation();

    if let Err(error) = state.unregister_handler.handle(command).await {
        tracing::debug!(%error, "unregister rejected");
        return Err(error);
    }

    Ok(Json(UnregisterResponse { message }))
}
