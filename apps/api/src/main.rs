use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_api::config::Config;
use bookshelf_api::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(config.log_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Seed the stores and build the schema
    let state = AppState::from_config(&config)?;

    if std::env::args().any(|arg| arg == "--print-schema") {
        println!("{}", state.schema.sdl());
        return Ok(());
    }

    tracing::info!(
        environment = %config.environment(),
        books = state.books.count().await,
        authors = state.authors.count().await,
        "Stores seeded"
    );

    let app = build_router(&config, state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server is running on port {}", config.port);
    if config.graphiql {
        tracing::info!(
            "GraphiQL available at http://{}:{}/graphql",
            addr.ip(),
            addr.port()
        );
    }

    axum::serve(listener, app).await?;

    Ok(())
}
