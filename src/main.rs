use policy_desk::errors::Result;
use policy_desk::{config, web};

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Connect to the table store and make sure the schema exists
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Store connection established."))
        .inspect_err(|e| error!("Failed to connect to the store: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create store tables: {e}"))?;

    // 5. Seed the commission-rate table on first run
    config::database::seed_default_rates(&db)
        .await
        .inspect(|_| info!("Commission rates ready."))
        .inspect_err(|e| error!("Failed to seed commission rates: {e}"))?;

    // 6. Run the HTTP server
    let state = web::AppState::new(db, app_config);
    web::run_server(state).await?;

    Ok(())
}
