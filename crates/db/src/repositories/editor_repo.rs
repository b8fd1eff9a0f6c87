//! Repository for the `editors` table.

use sqlx::PgPool;

use super::new_id;
use crate::models::editor::{CreateEditor, Editor, UpdateEditor};

const COLUMNS: &str = "id, username, email, password_hash, tier, trial, created_at, updated_at";

/// Provides CRUD operations for editors. Editors have no nested relationships
/// of their own, so reads return bare rows.
pub struct EditorRepo;

impl EditorRepo {
    pub async fn create(pool: &PgPool, input: &CreateEditor) -> Result<Editor, sqlx::Error> {
        let query = format!(
            "INSERT INTO editors (id, username, email, password_hash, tier, trial)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Editor>(&query)
            .bind(new_id())
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.tier)
            .bind(input.trial)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Editor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM editors WHERE id = $1");
        sqlx::query_as::<_, Editor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Editor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM editors ORDER BY created_at DESC");
        sqlx::query_as::<_, Editor>(&query).fetch_all(pool).await
    }

    /// Editors associated with a video, oldest account first.
    pub async fn list_by_video(pool: &PgPool, video_id: &str) -> Result<Vec<Editor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM editors
             WHERE id IN (SELECT editor_id FROM video_editors WHERE video_id = $1)
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Editor>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateEditor,
    ) -> Result<Option<Editor>, sqlx::Error> {
        let query = format!(
            "UPDATE editors SET
                username = COALESCE($2, username),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                tier = COALESCE($5, tier),
                trial = COALESCE($6, trial),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Editor>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.tier)
            .bind(input.trial)
            .fetch_optional(pool)
            .await
    }

    /// Delete an editor and its video associations.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM editors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
