//! Statistics service

use rust_decimal::Decimal;
use sqlx::Row;

use crate::{
    api::stats::{DashboardStats, MonthlyEntry, ReservationCounts},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Admin dashboard figures: entity counts, revenue and a monthly
    /// booking series.
    ///
    /// Revenue sums the totals of non-cancelled reservations; cancelled
    /// bookings never earned anything.
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let pool = &self.repository.pool;

        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(pool)
            .await?;

        let total_vehicles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(pool)
            .await?;

        let available_vehicles: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE is_available = TRUE")
                .fetch_one(pool)
                .await?;

        let counts_row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'active') AS active,
                COUNT(*) FILTER (WHERE status = 'completed') AS completed,
                COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled
            FROM reservations
            "#,
        )
        .fetch_one(pool)
        .await?;

        let reservations = ReservationCounts {
            total: counts_row.get("total"),
            active: counts_row.get("active"),
            completed: counts_row.get("completed"),
            cancelled: counts_row.get("cancelled"),
        };

        let total_revenue: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_price), 0) FROM reservations WHERE status != 'cancelled'",
        )
        .fetch_one(pool)
        .await?;

        let pending_violations: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM violations WHERE status = 'pending'")
                .fetch_one(pool)
                .await?;

        let average_rating: Option<Decimal> =
            sqlx::query_scalar("SELECT AVG(rating)::NUMERIC(3,2) FROM feedback")
                .fetch_one(pool)
                .await?;

        // Last 12 months of bookings, oldest first
        let monthly = sqlx::query(
            r#"
            SELECT
                TO_CHAR(DATE_TRUNC('month', created_at), 'YYYY-MM') AS period,
                COUNT(*) AS bookings,
                COALESCE(SUM(total_price) FILTER (WHERE status != 'cancelled'), 0) AS revenue
            FROM reservations
            WHERE created_at >= DATE_TRUNC('month', NOW()) - INTERVAL '11 months'
            GROUP BY DATE_TRUNC('month', created_at)
            ORDER BY period
            "#,
        )
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| MonthlyEntry {
            period: row.get("period"),
            bookings: row.get("bookings"),
            revenue: row.get("revenue"),
        })
        .collect();

        Ok(DashboardStats {
            total_users,
            total_vehicles,
            available_vehicles,
            reservations,
            total_revenue,
            pending_violations,
            average_rating,
            monthly,
        })
    }
}
