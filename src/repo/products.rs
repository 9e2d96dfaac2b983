use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::products::{CreateProductRequest, UpdateProductRequest};
use crate::error::{AppError, AppResult};
use crate::models::Product;

#[derive(Clone)]
pub struct ProductRepo {
    pool: DbPool,
}

impl ProductRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateProductRequest) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (id, name, description, price, stock) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.stock.unwrap_or(0))
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    /// Optional `search` is a case-insensitive substring match over name
    /// and description.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
        search: Option<&str>,
    ) -> AppResult<Vec<Product>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM products");
        if let Some(term) = search.filter(|t| !t.is_empty()) {
            let pattern = format!("%{term}%");
            qb.push(" WHERE name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern);
        }
        qb.push(" ORDER BY created_at DESC, id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let products = qb
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    pub async fn update(&self, id: Uuid, patch: UpdateProductRequest) -> AppResult<Product> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE products SET ");
        {
            let mut sets = qb.separated(", ");
            if let Some(name) = &patch.name {
                sets.push("name = ").push_bind_unseparated(name.as_str());
            }
            if let Some(description) = &patch.description {
                sets.push("description = ")
                    .push_bind_unseparated(description.as_deref());
            }
            if let Some(price) = patch.price {
                sets.push("price = ").push_bind_unseparated(price);
            }
            if let Some(stock) = patch.stock {
                sets.push("stock = ").push_bind_unseparated(stock);
            }
            sets.push("updated_at = now()");
        }
        qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        let product = qb
            .build_query_as::<Product>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("Product"))?;
        Ok(product)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Product> {
        let product =
            sqlx::query_as::<_, Product>("DELETE FROM products WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(AppError::NotFound("Product"))?;
        Ok(product)
    }

    /// Atomic stock adjustment computed by the store, negative delta for
    /// consumption. Overdraw trips the stock check constraint.
    pub async fn adjust_stock(&self, id: Uuid, delta: i32) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET stock = stock + $1, updated_at = now() WHERE id = $2 RETURNING *",
        )
        .bind(delta)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| AppError::from_db(err, "stock cannot be negative"))?
        .ok_or(AppError::NotFound("Product"))?;
        Ok(product)
    }
}
