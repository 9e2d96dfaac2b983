use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::couriers::{CreateCourierRequest, UpdateCourierRequest};
use crate::error::{AppError, AppResult};
use crate::models::Courier;

#[derive(Clone)]
pub struct CourierRepo {
    pool: DbPool,
}

impl CourierRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateCourierRequest) -> AppResult<Courier> {
        let courier = sqlx::query_as::<_, Courier>(
            "INSERT INTO couriers (id, name, is_available) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(input.is_available.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(courier)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Courier>> {
        let courier = sqlx::query_as::<_, Courier>("SELECT * FROM couriers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(courier)
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Courier>> {
        let couriers = sqlx::query_as::<_, Courier>(
            "SELECT * FROM couriers ORDER BY created_at DESC, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(couriers)
    }

    pub async fn update(&self, id: Uuid, patch: UpdateCourierRequest) -> AppResult<Courier> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE couriers SET ");
        {
            let mut sets = qb.separated(", ");
            if let Some(name) = &patch.name {
                sets.push("name = ").push_bind_unseparated(name.as_str());
            }
            if let Some(is_available) = patch.is_available {
                sets.push("is_available = ")
                    .push_bind_unseparated(is_available);
            }
            sets.push("updated_at = now()");
        }
        qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        let courier = qb
            .build_query_as::<Courier>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("Courier"))?;
        Ok(courier)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Courier> {
        let courier =
            sqlx::query_as::<_, Courier>("DELETE FROM couriers WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(AppError::NotFound("Courier"))?;
        Ok(courier)
    }
}
