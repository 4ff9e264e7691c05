use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_hackathon, list_hackathons};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_hackathons))
        .route("/:hackathon_id", get(get_hackathon))
}
