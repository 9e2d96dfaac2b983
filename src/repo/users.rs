use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::db::DbPool;
use crate::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::error::{AppError, AppResult};
use crate::models::User;

#[derive(Clone)]
pub struct UserRepo {
    pool: DbPool,
}

impl UserRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateUserRequest) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password, name, address) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&input.email)
        .bind(&input.password)
        .bind(&input.name)
        .bind(&input.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| AppError::from_db(err, "Email is already taken"))?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC, id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Partial update: absent fields are untouched, explicit nulls clear
    /// nullable columns. `updated_at` is always refreshed.
    pub async fn update(&self, id: Uuid, patch: UpdateUserRequest) -> AppResult<User> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut sets = qb.separated(", ");
            if let Some(email) = &patch.email {
                sets.push("email = ").push_bind_unseparated(email.as_str());
            }
            if let Some(password) = &patch.password {
                sets.push("password = ").push_bind_unseparated(password.as_str());
            }
            if let Some(name) = &patch.name {
                sets.push("name = ").push_bind_unseparated(name.as_deref());
            }
            if let Some(address) = &patch.address {
                sets.push("address = ").push_bind_unseparated(address.as_deref());
            }
            sets.push("updated_at = now()");
        }
        qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        let user = qb
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| AppError::from_db(err, "Email is already taken"))?
            .ok_or(AppError::NotFound("User"))?;
        Ok(user)
    }

    /// Deletes the row and returns its pre-deletion snapshot.
    pub async fn delete(&self, id: Uuid) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("User"))?;
        Ok(user)
    }
}
