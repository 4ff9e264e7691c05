use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::teams::handlers::generate_teams,
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::rename_team,
        features::teams::handlers::add_members,
        features::teams::handlers::remove_member,
        features::teams::handlers::move_member,
        features::hackathons::handlers::list_hackathons,
        features::hackathons::handlers::get_hackathon,
    ),
    components(
        schemas(
            storage::dto::team::GenerateTeamsRequest,
            storage::dto::team::GenerateTeamsResponse,
            storage::dto::team::RenameTeamRequest,
            storage::dto::team::AddMembersRequest,
            storage::dto::team::TeamResponse,
            storage::dto::team::TeamMemberResponse,
            storage::dto::hackathon::HackathonResponse,
            storage::dto::hackathon::HackathonDetailResponse,
            storage::dto::hackathon::ParticipantInfo,
            storage::models::Team,
            storage::models::TeamMember,
            storage::models::Hackathon,
            storage::models::Participant,
        )
    ),
    tags(
        (name = "teams", description = "Team generation and editing endpoints"),
        (name = "hackathons", description = "Public hackathon endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Teamforge API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest(
            "/api/hackathons",
            features::hackathons::routes::routes()
                .merge(features::teams::routes::hackathon_routes(api_keys.clone())),
        )
        .nest("/api/teams", features::teams::routes::routes(api_keys))
        .layer(CorsLayer::permissive())
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
