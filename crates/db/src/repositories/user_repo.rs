//! Repository for the `users` table.

use cutroom_core::hydration::Hydration;
use sqlx::PgPool;

use super::{new_id, ChannelRepo};
use crate::models::graph::UserGraph;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, tier, trial, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning it hydrated as a root.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<UserGraph, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, username, email, password_hash, tier, trial)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(new_id())
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.tier)
            .bind(input.trial)
            .fetch_one(pool)
            .await?;
        Self::hydrate(pool, user, Hydration::Root).await
    }

    /// Find a bare user row by ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a user hydrated to the given depth.
    pub async fn get(
        pool: &PgPool,
        id: &str,
        depth: Hydration,
    ) -> Result<Option<UserGraph>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(user) => Ok(Some(Self::hydrate(pool, user, depth).await?)),
            None => Ok(None),
        }
    }

    /// List all users, each hydrated as a root.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserGraph>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC");
        let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;

        let mut graphs = Vec::with_capacity(users.len());
        for user in users {
            graphs.push(Self::hydrate(pool, user, Hydration::Root).await?);
        }
        Ok(graphs)
    }

    /// Update a user. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always stamped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateUser,
    ) -> Result<Option<UserGraph>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                tier = COALESCE($5, tier),
                trial = COALESCE($6, trial),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.tier)
            .bind(input.trial)
            .fetch_optional(pool)
            .await?;

        match user {
            Some(user) => Ok(Some(Self::hydrate(pool, user, Hydration::Root).await?)),
            None => Ok(None),
        }
    }

    /// Delete a user row. Returns `true` if a row was removed.
    ///
    /// Owned channels must be removed first; the foreign key does not cascade.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach relationships to a user row according to `depth`.
    ///
    /// Only a root user lists its channels, and those channels are bare rows.
    pub async fn hydrate(
        pool: &PgPool,
        user: User,
        depth: Hydration,
    ) -> Result<UserGraph, sqlx::Error> {
        let channels = match depth.children() {
            Some(_) => Some(ChannelRepo::list_rows_by_owner(pool, &user.id).await?),
            None => None,
        };
        Ok(UserGraph { user, channels })
    }
}
