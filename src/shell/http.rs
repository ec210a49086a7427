use axum::{
    Extension, Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::signup_for_activity::inbound::http as signup_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/", get(redirect_to_index))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_http::handle),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(unregister_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}
