use chrono::{NaiveDate, NaiveTime};
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::{booking, checklist, db, moves, moving_company, quote, user};

/// Entity CRUD and validation tests
pub mod crud_tests;

/// Foreign-key cascade and restrict behaviour
pub mod cascade_tests;

/// Transaction commit and rollback
pub mod transaction_tests;

/// Fresh, migrated in-memory database per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    db::connect_and_migrate(&DatabaseConfig::in_memory()).await
}

pub(crate) fn policy() -> user::EmailPolicy {
    user::EmailPolicy { user_domain: "example.com".into(), company_domain: "company.com".into() }
}

pub(crate) async fn make_user(db: &DatabaseConnection, name: &str) -> anyhow::Result<user::Model> {
    let new = user::NewUser {
        username: name.to_string(),
        email: format!("{}@example.com", name),
        password_hash: "hash".into(),
        role: "user".into(),
    };
    Ok(user::create(db, new, &policy()).await?)
}

/// One row of every entity from user down to booking.
pub(crate) struct Chain {
    pub user: user::Model,
    pub company: moving_company::Model,
    pub checklist: checklist::Model,
    pub mv: moves::Model,
    pub quote: quote::Model,
    pub booking: booking::Model,
}

pub(crate) async fn make_chain(db: &DatabaseConnection, name: &str) -> anyhow::Result<Chain> {
    let user = make_user(db, name).await?;
    let company = moving_company::create(
        db,
        moving_company::NewMovingCompany {
            user_id: None,
            name: format!("{} Movers", name),
            contact_email: format!("{}@company.com", name),
            contact_phone: "555-0100".into(),
            address: "1 Depot Rd".into(),
            password_hash: None,
            rating: Some(4.0),
        },
    )
    .await?;
    let checklist = checklist::create(db, checklist::NewChecklist { user_id: user.id, home_type: "Studio".into() }).await?;
    let mv = moves::create(
        db,
        moves::NewMove {
            user_id: user.id,
            company_id: company.id,
            current_address: "12 Old St".into(),
            new_address: "34 New Ave".into(),
            moving_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            special_requirements: None,
        },
    )
    .await?;
    let quote = quote::create(db, quote::NewQuote { move_id: mv.id, price: 450.0, status: "pending".into() }).await?;
    let booking = booking::create(
        db,
        booking::NewBooking {
            quote_id: quote.id,
            customer_id: user.id,
            moving_company_id: company.id,
            move_id: mv.id,
            move_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            move_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            confirmation_status: "pending".into(),
        },
    )
    .await?;
    Ok(Chain { user, company, checklist, mv, quote, booking })
}
