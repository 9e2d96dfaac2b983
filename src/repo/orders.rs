use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::orders::{CreateOrderRequest, UpdateOrderRequest};
use crate::error::{AppError, AppResult};
use crate::models::{Order, OrderStatus};

#[derive(Clone)]
pub struct OrderRepo {
    pool: DbPool,
}

impl OrderRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Creates an order, consuming product stock when the input names a
    /// product and a quantity. The decrement is a conditional update run
    /// in the same transaction as the insert, so two concurrent orders
    /// cannot jointly overdraw the product: whichever commits second
    /// finds the stock already reduced and fails the `stock >= qty`
    /// predicate.
    pub async fn create(&self, input: CreateOrderRequest) -> AppResult<Order> {
        let mut tx = self.pool.begin().await?;

        if let (Some(product_id), Some(quantity)) = (input.product_id, input.quantity) {
            let updated = sqlx::query(
                "UPDATE products SET stock = stock - $1, updated_at = now() WHERE id = $2 AND stock >= $1",
            )
            .bind(quantity)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

            if updated.rows_affected() == 0 {
                // Distinguish a missing product from an overdraw. The
                // transaction is dropped without commit, rolling back.
                let row: Option<(i32,)> =
                    sqlx::query_as("SELECT stock FROM products WHERE id = $1")
                        .bind(product_id)
                        .fetch_optional(&mut *tx)
                        .await?;
                return Err(match row {
                    Some((available,)) => AppError::InsufficientStock {
                        requested: quantity,
                        available,
                    },
                    None => AppError::ProductNotFound,
                });
            }
        }

        let status = input.status.unwrap_or(OrderStatus::Paid);
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (id, user_id, product_id, quantity, status) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(input.user_id)
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| AppError::from_db(err, "referenced user or product does not exist"))?;

        tx.commit().await?;
        Ok(order)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(order)
    }

    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        user_id: Option<Uuid>,
        status: Option<OrderStatus>,
    ) -> AppResult<Vec<Order>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM orders");
        let mut has_where = false;
        if let Some(user_id) = user_id {
            qb.push(" WHERE user_id = ").push_bind(user_id);
            has_where = true;
        }
        if let Some(status) = status {
            qb.push(if has_where { " AND " } else { " WHERE " });
            qb.push("status = ").push_bind(status);
        }
        qb.push(" ORDER BY created_at DESC, id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let orders = qb.build_query_as::<Order>().fetch_all(&self.pool).await?;
        Ok(orders)
    }

    /// Field updates only; stock is not re-adjusted when quantity or
    /// product change after creation.
    pub async fn update(&self, id: Uuid, patch: UpdateOrderRequest) -> AppResult<Order> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE orders SET ");
        {
            let mut sets = qb.separated(", ");
            if let Some(user_id) = patch.user_id {
                sets.push("user_id = ").push_bind_unseparated(user_id);
            }
            if let Some(product_id) = patch.product_id {
                sets.push("product_id = ").push_bind_unseparated(product_id);
            }
            if let Some(quantity) = patch.quantity {
                sets.push("quantity = ").push_bind_unseparated(quantity);
            }
            if let Some(status) = patch.status {
                sets.push("status = ").push_bind_unseparated(status);
            }
            sets.push("updated_at = now()");
        }
        qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        let order = qb
            .build_query_as::<Order>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| AppError::from_db(err, "referenced user or product does not exist"))?
            .ok_or(AppError::NotFound("Order"))?;
        Ok(order)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Order> {
        let order = sqlx::query_as::<_, Order>("DELETE FROM orders WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("Order"))?;
        Ok(order)
    }
}
