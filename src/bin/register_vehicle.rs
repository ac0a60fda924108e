//! Store the vehicle a user drives, replacing whatever was there.

use anyhow::{Context, Result};
use clap::Parser;
use sea_orm_migration::MigratorTrait;
use uservehicle::config::setup_logging;
use uservehicle::constants::DEFAULT_DATABASE_PATH;
use uservehicle::vehicles::{DbUserVehicleService, VehicleDetails};

/// Register a vehicle for a user.
///
///   register_vehicle sboot Honda Civic
#[derive(Parser, Debug)]
#[command(name = "register_vehicle")]
struct Args {
    /// Username the vehicle belongs to
    username: String,

    /// Manufacturer, eg Honda
    make: String,

    /// Model, eg Civic
    model: String,

    /// Path to the database file
    #[arg(long, default_value = DEFAULT_DATABASE_PATH, env = "USERVEHICLE_DATABASE_PATH")]
    database_path: String,

    /// Enable debug logging
    #[arg(long, env = "USERVEHICLE_DEBUG")]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.debug).map_err(|err| anyhow::anyhow!(err))?;

    let db = uservehicle::db::connect_db(&args.database_path)
        .await
        .with_context(|| format!("opening {}", args.database_path))?;
    uservehicle::db::migrations::Migrator::up(&db, None)
        .await
        .context("running migrations")?;

    let details = VehicleDetails::new(args.make, args.model);
    DbUserVehicleService::new(db)
        .register(&args.username, &details)
        .await?;

    println!("{} now drives a {}.", args.username, details);
    Ok(())
}
