//! Repository layer for database operations

pub mod discounts;
pub mod feedback;
pub mod locations;
pub mod reservations;
pub mod users;
pub mod vehicles;
pub mod violations;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub vehicles: vehicles::VehiclesRepository,
    pub locations: locations::LocationsRepository,
    pub reservations: reservations::ReservationsRepository,
    pub discounts: discounts::DiscountsRepository,
    pub feedback: feedback::FeedbackRepository,
    pub violations: violations::ViolationsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            vehicles: vehicles::VehiclesRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            reservations: reservations::ReservationsRepository::new(pool.clone()),
            discounts: discounts::DiscountsRepository::new(pool.clone()),
            feedback: feedback::FeedbackRepository::new(pool.clone()),
            violations: violations::ViolationsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
