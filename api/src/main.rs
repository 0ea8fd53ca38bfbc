use anyhow::Result;

use agent_api::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env();
    log::info!("starting voice agent backend on {}", config.bind_addr());

    let app = agent_api::app();

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
