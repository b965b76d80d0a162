//! Typed domain models mapped from database rows

pub mod discount;
pub mod enums;
pub mod feedback;
pub mod location;
pub mod reservation;
pub mod user;
pub mod vehicle;
pub mod violation;
