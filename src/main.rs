use member_registry::{
    adapters::memory::MemberRepository as InMemoryMemberRepository,
    adapters::postgres::PostgresMemberRepository,
    api::{handlers::AppState, router::create_router},
    application::member::ServiceDependencies,
    ports::member_repository::MemberRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "member_registry=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Repository selection
    // MEMBER_STORE=memory swaps in the in-memory adapter; same wiring,
    // different implementation behind the port.
    let store = std::env::var("MEMBER_STORE").unwrap_or_else(|_| "postgres".into());

    let member_repository: Arc<dyn MemberRepository> = match store.as_str() {
        "memory" => {
            tracing::info!("Using in-memory member store");
            Arc::new(InMemoryMemberRepository::new())
        }
        _ => {
            let database_url = std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/member_registry".into());

            tracing::info!("Database URL: {}", database_url);

            // Initialize database connection pool
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await
                .expect("Failed to connect to database");

            Arc::new(PostgresMemberRepository::new(pool))
        }
    };

    // Create service dependencies
    let service_deps = ServiceDependencies { member_repository };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
