use dotenvy::dotenv;

use pharma_seed::config::SeedConfig;
use pharma_seed::dataset::SeedDataset;
use pharma_seed::db::establish_connection_pool;
use pharma_seed::repository::DieselStore;
use pharma_seed::services::seed::seed_store;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let dataset = match &config.dataset_path {
        Some(path) => match SeedDataset::load(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                log::error!("Failed to load dataset from {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => SeedDataset::builtin(),
    };

    log::info!("Starting seed of {}", config.database_url);

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let outcome = {
        let conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Failed to acquire database connection: {e}");
                std::process::exit(1);
            }
        };
        let mut store = DieselStore::new(conn);
        seed_store(&mut store, &dataset, &config.options)
    }; // connection released here

    match outcome {
        Ok(report) => log::info!("Seed completed successfully: {report}"),
        Err(e) => {
            log::error!("Seed failed: {e}");
            drop(pool);
            std::process::exit(1);
        }
    }
}
