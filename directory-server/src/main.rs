use directory_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    // File logging only in production; development logs to the console
    let log_dir = config.log_dir();
    let log_dir = config.is_production().then_some(log_dir.as_path());
    directory_server::init_logger_with_file("info", config.is_production(), log_dir)?;

    print_banner();
    tracing::info!("Directory server starting...");

    let state = ServerState::initialize(&config)?;
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
