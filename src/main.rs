use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliotrack::services::{borrow_service, catalog_service};
use bibliotrack::{config, db, seed};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibliotrack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    // Check for seed flag
    if std::env::var("SEED_DEMO").is_ok() {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        } else {
            tracing::info!("Demo data seeded successfully.");
        }
    }

    // Startup summary
    match catalog_service::count_books(&db).await {
        Ok(count) => tracing::info!("Catalog ready with {} titles", count),
        Err(e) => tracing::error!("Failed to count titles: {}", e),
    }
    match borrow_service::count_records(&db).await {
        Ok(count) => tracing::info!("{} borrow records on file", count),
        Err(e) => tracing::error!("Failed to count borrow records: {}", e),
    }
}
