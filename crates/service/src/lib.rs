//! Service layer providing business-oriented CRUD operations on top of models.
//! - One module per resource under `services`, plus account auth and demo seeding.
//! - Reuses validation and entity definitions in `models` crate.
//! - Every write runs in a single database transaction.

pub mod errors;
pub mod auth;
pub mod pagination;
pub mod services;
pub mod seed;
#[cfg(test)]
pub mod test_support;
