use mongo_crud_walkthrough::config::Config;
use mongo_crud_walkthrough::db::connect;
use mongo_crud_walkthrough::services::run_walkthrough;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");

    log::info!("Connecting to MongoDB at {}", config.redacted_uri());
    let connection = connect(&config)
        .await
        .expect("Failed to create MongoDB client");

    match run_walkthrough(&connection).await {
        Ok(report) => {
            log::info!("Walkthrough finished: {}", report.summary());
            Ok(())
        }
        Err(e) => {
            log::error!("Walkthrough failed: {:?}", e);
            Err(e)
        }
    }
}
