use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    add_members, generate_teams, get_team, list_teams, move_member, remove_member, rename_team,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:team_id/name", put(rename_team))
        .route("/:team_id/members", post(add_members))
        .route(
            "/:team_id/members/:participant_id",
            put(move_member).delete(remove_member),
        )
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_teams))
        .route("/:team_id", get(get_team))
        .merge(protected)
}

/// Generation endpoint, mounted under the hackathons scope
pub fn hackathon_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:hackathon_id/teams/generate", post(generate_teams))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
