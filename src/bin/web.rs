use html_grader::server;
use html_grader::utils::logger;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_server_logger();

    let port = server::port_from_env();
    tracing::info!("Serving {} on port {}", server::DEFAULT_PAGE, port);

    server::serve(PathBuf::from(server::DEFAULT_PAGE), port).await?;

    Ok(())
}
