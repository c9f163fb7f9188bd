pub mod errors;
pub mod db;
pub mod validation;
pub mod user;
pub mod profile;
pub mod checklist;
pub mod inventory;
pub mod moving_company;
pub mod moves;
pub mod quote;
pub mod booking;
pub mod notification;
pub mod communication;

#[cfg(test)]
mod tests;
