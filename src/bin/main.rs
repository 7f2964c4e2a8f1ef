use std::sync::Arc;

use poem::listener::TcpListener;
use profile_server::{
    core::logging::init_logging, init_openapi_route, repository::profile::FileProfileStorage,
    settings::get_config, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config()?;
    let _guard = init_logging(&config);
    tracing::info!("run with config: {:?}", config);

    // Init Storage
    tracing::info!("Init profile storage on {}", config.profile_path);
    let storage = Arc::new(FileProfileStorage::new(&config.profile_path));
    // Init App State
    let app_state = Arc::new(AppState {
        storage,
        max_body_size: config.max_body_size,
    });

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    println!("listening on http://{}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;
    Ok(())
}
