use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::deliveries::{CreateDeliveryRequest, UpdateDeliveryRequest};
use crate::error::{AppError, AppResult};
use crate::models::Delivery;

#[derive(Clone)]
pub struct DeliveryRepo {
    pool: DbPool,
}

impl DeliveryRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateDeliveryRequest) -> AppResult<Delivery> {
        let delivery = sqlx::query_as::<_, Delivery>(
            "INSERT INTO deliveries (id, order_id, courier_id, pick_up_at, delivered_at) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(input.order_id)
        .bind(input.courier_id)
        .bind(input.pick_up_at)
        .bind(input.delivered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| AppError::from_db(err, "referenced order or courier does not exist"))?;
        Ok(delivery)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Delivery>> {
        let delivery = sqlx::query_as::<_, Delivery>("SELECT * FROM deliveries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(delivery)
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Delivery>> {
        let deliveries = sqlx::query_as::<_, Delivery>(
            "SELECT * FROM deliveries ORDER BY created_at DESC, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(deliveries)
    }

    pub async fn update(&self, id: Uuid, patch: UpdateDeliveryRequest) -> AppResult<Delivery> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE deliveries SET ");
        {
            let mut sets = qb.separated(", ");
            if let Some(order_id) = patch.order_id {
                sets.push("order_id = ").push_bind_unseparated(order_id);
            }
            if let Some(courier_id) = patch.courier_id {
                sets.push("courier_id = ").push_bind_unseparated(courier_id);
            }
            if let Some(pick_up_at) = patch.pick_up_at {
                sets.push("pick_up_at = ").push_bind_unseparated(pick_up_at);
            }
            if let Some(delivered_at) = patch.delivered_at {
                sets.push("delivered_at = ")
                    .push_bind_unseparated(delivered_at);
            }
            sets.push("updated_at = now()");
        }
        qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        let delivery = qb
            .build_query_as::<Delivery>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| AppError::from_db(err, "referenced order or courier does not exist"))?
            .ok_or(AppError::NotFound("Delivery"))?;
        Ok(delivery)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Delivery> {
        let delivery =
            sqlx::query_as::<_, Delivery>("DELETE FROM deliveries WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(AppError::NotFound("Delivery"))?;
        Ok(delivery)
    }
}
