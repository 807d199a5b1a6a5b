//! Pure domain logic for the restaurant directory.
//!
//! Nothing in this crate touches the network or the database, so the rules
//! here (validation, price buckets, pagination math) are shared verbatim by
//! the repository layer, the HTTP layer and the seeder.

pub mod error;
pub mod listing;
pub mod price;
pub mod restaurant;
pub mod search;
pub mod types;
