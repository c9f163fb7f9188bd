//! Demo data for local development.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use tracing::{info, warn};

use models::user::{self, EmailPolicy};

use crate::errors::ServiceError;
use crate::services::{
    booking_service::{self, BookingPayload},
    checklist_service::{self, ChecklistPayload},
    communication_service::{self, CommunicationPayload},
    company_service::{self, CompanyPayload},
    inventory_service::{self, InventoryPayload},
    move_service::{self, MovePayload},
    notification_service::{self, NotificationPayload},
    profile_service::{self, ProfilePayload},
    quote_service::{self, QuotePayload},
    user_service::{self, UserPayload},
};

/// Row counts inserted by [`seed_sample_data`].
#[derive(Debug, Default, Clone, Serialize)]
pub struct SeedReport {
    pub users: usize,
    pub companies: usize,
    pub moves: usize,
    pub bookings: usize,
    pub messages: usize,
}

struct Person {
    username: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    phone: &'static str,
    home_type: &'static str,
    item: (&'static str, &'static str, &'static str),
    company: (&'static str, &'static str, &'static str, &'static str, f64),
    addresses: (&'static str, &'static str),
    moving_date: &'static str,
    special: Option<&'static str>,
    price: f64,
    quote_status: &'static str,
    booking: (&'static str, &'static str, &'static str),
}

const PEOPLE: [Person; 2] = [
    Person {
        username: "alice",
        first_name: "Alice",
        last_name: "Johnson",
        phone: "555-1234",
        home_type: "One Bedroom",
        item: ("TV", "Packed", "Handle with care"),
        company: ("Fast Movers", "info@fastmovers.com", "555-7890", "123 Main St", 4.5),
        addresses: ("123 Old St", "456 New St"),
        moving_date: "2023-07-09",
        special: None,
        price: 500.0,
        quote_status: "pending",
        booking: ("2023-07-15", "09:00", "confirmed"),
    },
    Person {
        username: "bob",
        first_name: "Bob",
        last_name: "Smith",
        phone: "555-5678",
        home_type: "Two Bedroom",
        item: ("Sofa", "Not Packed", ""),
        company: ("Quick Relocators", "info@quickrelocators.com", "555-0123", "456 Elm St", 4.7),
        addresses: ("789 Old St", "012 New St"),
        moving_date: "2023-07-10",
        special: Some("Fragile items"),
        price: 800.0,
        quote_status: "accepted",
        booking: ("2023-07-20", "10:00", "pending"),
    },
];

/// Insert two users with a full chain of related rows each. Does nothing when users already exist.
pub async fn seed_sample_data(db: &DatabaseConnection, policy: &EmailPolicy) -> Result<SeedReport, ServiceError> {
    let existing = user::Entity::find().count(db).await?;
    if existing > 0 {
        warn!(existing, "database already has users; skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();
    for (i, p) in PEOPLE.iter().enumerate() {
        let u = user_service::create_user(
            db,
            UserPayload {
                username: Some(p.username.into()),
                email: Some(format!("{}@{}", p.username, example_domain(policy))),
                password: Some(format!("password{}", i + 1)),
                role: Some("user".into()),
            },
            policy,
        )
        .await?;
        report.users += 1;

        profile_service::create_profile(
            db,
            ProfilePayload {
                user_id: Some(u.id),
                first_name: Some(p.first_name.into()),
                last_name: Some(p.last_name.into()),
                phone_number: Some(p.phone.into()),
                preferences: None,
            },
        )
        .await?;

        let list = checklist_service::create_checklist(
            db,
            ChecklistPayload { user_id: Some(u.id), home_type: Some(p.home_type.into()) },
        )
        .await?;
        let (item_name, status, notes) = p.item;
        inventory_service::create_item(
            db,
            InventoryPayload {
                checklist_id: Some(list.id),
                item_name: Some(item_name.into()),
                status: Some(status.into()),
                notes: Some(notes.into()).filter(|n: &String| !n.is_empty()),
            },
        )
        .await?;

        let (name, email, phone, address, rating) = p.company;
        let company = company_service::create_company(
            db,
            CompanyPayload {
                user_id: None,
                name: Some(name.into()),
                contact_email: Some(email.into()),
                contact_phone: Some(phone.into()),
                address: Some(address.into()),
                rating: Some(rating),
                password: Some(format!("company{}", i + 1)),
            },
        )
        .await?;
        report.companies += 1;

        let mv = move_service::create_move(
            db,
            MovePayload {
                user_id: Some(u.id),
                company_id: Some(company.id),
                current_address: Some(p.addresses.0.into()),
                new_address: Some(p.addresses.1.into()),
                moving_date: Some(p.moving_date.into()),
                special_requirements: p.special.map(String::from),
            },
        )
        .await?;
        report.moves += 1;

        let quote = quote_service::create_quote(
            db,
            QuotePayload { move_id: Some(mv.id), price: Some(p.price), status: Some(p.quote_status.into()) },
        )
        .await?;

        let (date, time, status) = p.booking;
        let booking = booking_service::create_booking(
            db,
            BookingPayload {
                quote_id: Some(quote.id),
                customer_id: Some(u.id),
                moving_company_id: Some(company.id),
                move_id: Some(mv.id),
                move_date: Some(date.into()),
                move_time: Some(time.into()),
                confirmation_status: Some(status.into()),
            },
        )
        .await?;
        report.bookings += 1;

        notification_service::create_notification(
            db,
            NotificationPayload {
                booking_id: Some(booking.id),
                message: Some(format!("Your booking with {} is {}.", name, status)),
                timestamp: None,
            },
        )
        .await?;
        communication_service::create_communication(
            db,
            CommunicationPayload {
                booking_id: Some(booking.id),
                message: Some(format!("Hi {}, we will arrive at {} on {}.", p.first_name, time, date)),
                timestamp: None,
            },
        )
        .await?;
        report.messages += 2;
    }

    info!(?report, "sample data seeded");
    Ok(report)
}

fn example_domain(policy: &EmailPolicy) -> &str {
    if policy.user_domain.is_empty() { "example.com" } else { &policy.user_domain }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, policy};

    #[tokio::test]
    async fn seeds_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let first = seed_sample_data(&db, &policy()).await?;
        assert_eq!(first.users, 2);
        assert_eq!(first.bookings, 2);
        assert_eq!(first.messages, 4);

        let second = seed_sample_data(&db, &policy()).await?;
        assert_eq!(second.users, 0);
        assert_eq!(user::Entity::find().count(&db).await?, 2);
        Ok(())
    }
}
