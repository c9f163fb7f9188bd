//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Account signup, login and session tokens for both users and moving companies.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
