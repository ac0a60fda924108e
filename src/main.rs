use std::sync::Arc;

use clap::Parser;
use sea_orm_migration::MigratorTrait;
use tracing::error;
use uservehicle::config::setup_logging;
use uservehicle::vehicles::DbUserVehicleService;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = uservehicle::cli::CliOptions::parse();

    if let Err(err) = setup_logging(cli.debug) {
        eprintln!("Logging setup failed: {}", err);
        return;
    }

    let db = match uservehicle::db::connect_db(&cli.database_path).await {
        Ok(db) => db,
        Err(err) => {
            error!("Database connection error: {}", err);
            return;
        }
    };

    if let Err(err) = uservehicle::db::migrations::Migrator::up(&db, None).await {
        error!("Database migration error: {}", err);
        return;
    }

    let vehicles = Arc::new(DbUserVehicleService::new(db));

    if let Err(err) =
        uservehicle::web::setup_server(&cli.listen_address, cli.port, vehicles).await
    {
        error!("Application error: {}", err);
    }
}
