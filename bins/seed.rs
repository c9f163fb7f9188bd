//! Load demo data: `cargo run --bin seed [-- --fresh]`.
//!
//! `--fresh` drops every table and re-applies the migrations first.

use migration::MigratorTrait;
use tracing::{error, info};

async fn seed(fresh: bool) -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_or_env()?;
    common::env::ensure_sqlite_parent(&cfg.database.url).await?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    if fresh {
        migration::Migrator::fresh(&db).await?;
        info!("database reset");
    } else {
        migration::Migrator::up(&db, None).await?;
    }

    let policy = models::user::EmailPolicy::from(&cfg.auth);
    let report = service::seed::seed_sample_data(&db, &policy).await?;
    info!(
        users = report.users,
        companies = report.companies,
        moves = report.moves,
        bookings = report.bookings,
        messages = report.messages,
        "seed finished"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_default();

    let fresh = std::env::args().skip(1).any(|a| a == "--fresh");
    match seed(fresh).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "seeding failed");
            std::process::ExitCode::FAILURE
        }
    }
}
