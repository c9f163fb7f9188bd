#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use models::db::connect_and_migrate;
use models::user::EmailPolicy;

/// A migrated in-memory database, so tests never share rows and leave no files behind.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}

pub fn policy() -> EmailPolicy {
    EmailPolicy { user_domain: "example.com".into(), company_domain: "company.com".into() }
}
