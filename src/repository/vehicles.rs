//! Vehicles repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleQuery},
};

#[derive(Clone)]
pub struct VehiclesRepository {
    pool: Pool<Postgres>,
}

impl VehiclesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List vehicles with optional filters, newest first
    pub async fn list(&self, query: &VehicleQuery) -> AppResult<Vec<Vehicle>> {
        let mut conditions: Vec<&str> = Vec::new();

        macro_rules! add_condition {
            ($field:expr, $fragment:expr) => {
                if $field.is_some() {
                    conditions.push($fragment);
                }
            };
        }

        add_condition!(query.q, "(make ILIKE $N OR model ILIKE $N)");
        add_condition!(query.vehicle_type, "vehicle_type = $N");
        add_condition!(query.transmission, "transmission = $N");
        add_condition!(query.min_price, "price_per_day >= $N");
        add_condition!(query.max_price, "price_per_day <= $N");

        if query.available == Some(true) {
            conditions.push("is_available = TRUE");
        }

        let where_clause = build_where_clause(&conditions);

        let sql = format!(
            "SELECT * FROM vehicles {} ORDER BY created_at DESC",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Vehicle>(&sql);
        if let Some(ref q) = query.q {
            builder = builder.bind(format!("%{}%", q));
        }
        if let Some(ref vt) = query.vehicle_type {
            builder = builder.bind(vt);
        }
        if let Some(ref tr) = query.transmission {
            builder = builder.bind(tr);
        }
        if let Some(min) = query.min_price {
            builder = builder.bind(min);
        }
        if let Some(max) = query.max_price {
            builder = builder.bind(max);
        }

        Ok(builder.fetch_all(&self.pool).await?)
    }

    /// Get vehicle by ID
    pub async fn get_by_id(&self, id: uuid::Uuid) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Create a vehicle
    pub async fn create(&self, data: &CreateVehicle) -> AppResult<Vehicle> {
        let features = data
            .features
            .clone()
            .map(|f| serde_json::to_value(f).unwrap_or_default());

        let row = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                make, model, year, vehicle_type, price_per_day, seats,
                transmission, fuel_type, description, image_url, features,
                location_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&data.make)
        .bind(&data.model)
        .bind(data.year)
        .bind(&data.vehicle_type)
        .bind(data.price_per_day)
        .bind(data.seats)
        .bind(&data.transmission)
        .bind(&data.fuel_type)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(features)
        .bind(data.location_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a vehicle (partial)
    pub async fn update(&self, id: uuid::Uuid, data: &UpdateVehicle) -> AppResult<Vehicle> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    idx += 1;
                    sets.push(format!("{} = ${}", $name, idx));
                }
            };
        }

        add_field!(data.make, "make");
        add_field!(data.model, "model");
        add_field!(data.year, "year");
        add_field!(data.vehicle_type, "vehicle_type");
        add_field!(data.price_per_day, "price_per_day");
        add_field!(data.seats, "seats");
        add_field!(data.transmission, "transmission");
        add_field!(data.fuel_type, "fuel_type");
        add_field!(data.description, "description");
        add_field!(data.image_url, "image_url");
        add_field!(data.features, "features");
        add_field!(data.location_id, "location_id");

        idx += 1;
        let sql = format!(
            "UPDATE vehicles SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Vehicle>(&sql).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.make);
        bind_field!(data.model);
        bind_field!(data.year);
        bind_field!(data.vehicle_type);
        bind_field!(data.price_per_day);
        bind_field!(data.seats);
        bind_field!(data.transmission);
        bind_field!(data.fuel_type);
        bind_field!(data.description);
        bind_field!(data.image_url);
        if let Some(ref features) = data.features {
            builder = builder.bind(serde_json::to_value(features).unwrap_or_default());
        }
        bind_field!(data.location_id);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Delete a vehicle
    pub async fn delete(&self, id: uuid::Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
        }
        Ok(())
    }

    /// Set the availability flag
    pub async fn set_availability(&self, id: uuid::Uuid, is_available: bool) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET is_available = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(is_available)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }
}

/// Join filter fragments into a WHERE clause. Each fragment's `$N`
/// placeholders (all occurrences) take the next positional bind index;
/// fragments without a placeholder consume none.
fn build_where_clause(conditions: &[&str]) -> String {
    if conditions.is_empty() {
        return String::new();
    }

    let mut idx = 0;
    let numbered: Vec<String> = conditions
        .iter()
        .map(|fragment| {
            if fragment.contains("$N") {
                idx += 1;
                fragment.replace("$N", &format!("${}", idx))
            } else {
                (*fragment).to_string()
            }
        })
        .collect();

    format!("WHERE {}", numbered.join(" AND "))
}

#[cfg(test)]
mod tests {
    use super::build_where_clause;

    #[test]
    fn no_filters_means_no_where_clause() {
        assert_eq!(build_where_clause(&[]), "");
    }

    #[test]
    fn placeholders_are_numbered_in_order() {
        let clause = build_where_clause(&[
            "vehicle_type = $N",
            "price_per_day >= $N",
            "price_per_day <= $N",
        ]);
        assert_eq!(
            clause,
            "WHERE vehicle_type = $1 AND price_per_day >= $2 AND price_per_day <= $3"
        );
    }

    #[test]
    fn one_fragment_binds_one_parameter_even_with_repeats() {
        let clause = build_where_clause(&["(make ILIKE $N OR model ILIKE $N)", "seats = $N"]);
        assert_eq!(clause, "WHERE (make ILIKE $1 OR model ILIKE $1) AND seats = $2");
    }

    #[test]
    fn literal_fragments_do_not_consume_an_index() {
        let clause = build_where_clause(&["vehicle_type = $N", "is_available = TRUE"]);
        assert_eq!(clause, "WHERE vehicle_type = $1 AND is_available = TRUE");
    }
}
