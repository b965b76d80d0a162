//! Rental pricing calculator
//!
//! Pure date/price arithmetic used by the booking workflow. Billable days
//! are the ceiling of the rental duration in whole days, computed by integer
//! ceiling division on the millisecond difference, so any partial day is
//! billed as a full one.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Number of billable days for a rental period.
///
/// Defined for `end > start`; the availability gate rejects other ranges
/// before pricing is ever invoked.
pub fn billable_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let ms = (end - start).num_milliseconds();
    (ms + MS_PER_DAY - 1) / MS_PER_DAY
}

/// Total rental price: billable days times the vehicle's daily rate.
pub fn rental_price(start: DateTime<Utc>, end: DateTime<Utc>, price_per_day: Decimal) -> Decimal {
    Decimal::from(billable_days(start, end)) * price_per_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn whole_days_are_counted_exactly() {
        assert_eq!(billable_days(date(2024, 6, 1), date(2024, 6, 4)), 3);
        assert_eq!(billable_days(date(2024, 6, 1), date(2024, 6, 2)), 1);
    }

    #[test]
    fn partial_days_round_up() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 2, 11, 0, 0).unwrap();
        assert_eq!(billable_days(start, end), 2);

        let one_minute_over = Utc.with_ymd_and_hms(2024, 6, 2, 10, 1, 0).unwrap();
        assert_eq!(billable_days(start, one_minute_over), 2);
    }

    #[test]
    fn three_day_rental_at_fifty_per_day_costs_150() {
        let total = rental_price(date(2024, 6, 1), date(2024, 6, 4), Decimal::from(50));
        assert_eq!(total, Decimal::from(150));
    }

    #[test]
    fn fractional_daily_rate_is_priced_exactly() {
        // 29 days at 79.99
        let total = rental_price(date(2024, 6, 1), date(2024, 6, 30), Decimal::new(7999, 2));
        assert_eq!(total, Decimal::new(231_971, 2));
    }
}
