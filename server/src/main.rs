use tokio::net::TcpListener;
use todo_server::{config::ServerConfig, logging};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    logging::init_logging();
    let config = ServerConfig::from_env();
    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!("Server running at http://{}", config.addr);
    todo_server::run(listener).await
}
