use axum::{Json, extract::State};

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activities;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Json<Activities>, ApplicationError> {
    let activities = state.registry.get_all().await?;
    Ok(Json(activities))
}
