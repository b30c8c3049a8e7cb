use commute_server::config::ServerConfig;
use commute_server::graph::load_network_from_path;
use commute_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    // Load the network once; it is read-only from here on
    info!(path = %config.network_path.display(), "loading network");
    let graph = load_network_from_path(&config.network_path)?;
    info!(
        stations = graph.station_count(),
        edges = graph.edge_count(),
        "loaded network"
    );

    let state = AppState::new(graph, config.rank, config.algorithm, config.query_timeout);
    let app = create_router(state);

    let addr = config.bind_addr;
    info!(%addr, algorithm = %config.algorithm, "commute finder listening");
    info!("  GET  /health        - Health check");
    info!("  GET  /api/stations  - List stations");
    info!("  POST /api/recommend - Rank stations for two workplaces");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
