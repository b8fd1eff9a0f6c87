//! Repository for the `iterations` table.

use cutroom_core::hydration::Hydration;
use sqlx::PgPool;

use super::{new_id, VideoRepo};
use crate::models::graph::IterationGraph;
use crate::models::iteration::{CreateIteration, Iteration, UpdateIteration};

/// Column list for iterations queries.
const COLUMNS: &str = "id, video_id, url, length, status, notes, created_at, updated_at";

/// Provides CRUD operations for iterations.
pub struct IterationRepo;

impl IterationRepo {
    /// Insert a new iteration, returning it hydrated as a root.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIteration,
    ) -> Result<IterationGraph, sqlx::Error> {
        let query = format!(
            "INSERT INTO iterations (id, video_id, url, length, status, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let iteration = sqlx::query_as::<_, Iteration>(&query)
            .bind(new_id())
            .bind(&input.video_id)
            .bind(&input.url)
            .bind(input.length)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(pool)
            .await?;
        Self::hydrate(pool, iteration, Hydration::Root).await
    }

    /// Find a bare iteration row by ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Iteration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM iterations WHERE id = $1");
        sqlx::query_as::<_, Iteration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch an iteration hydrated to the given depth.
    pub async fn get(
        pool: &PgPool,
        id: &str,
        depth: Hydration,
    ) -> Result<Option<IterationGraph>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(iteration) => Ok(Some(Self::hydrate(pool, iteration, depth).await?)),
            None => Ok(None),
        }
    }

    /// List all iterations, each hydrated as a root.
    pub async fn list(pool: &PgPool) -> Result<Vec<IterationGraph>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM iterations ORDER BY created_at DESC");
        let iterations = sqlx::query_as::<_, Iteration>(&query)
            .fetch_all(pool)
            .await?;
        Self::hydrate_all(pool, iterations).await
    }

    /// List the iterations of one video, each hydrated as a root.
    pub async fn list_by_video(
        pool: &PgPool,
        video_id: &str,
    ) -> Result<Vec<IterationGraph>, sqlx::Error> {
        let iterations = Self::list_rows_by_video(pool, video_id).await?;
        Self::hydrate_all(pool, iterations).await
    }

    /// Bare iteration rows of one video, oldest first.
    pub async fn list_rows_by_video(
        pool: &PgPool,
        video_id: &str,
    ) -> Result<Vec<Iteration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM iterations
             WHERE video_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Iteration>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }

    /// Most recently created iteration of a video, if any.
    pub async fn latest_for_video(
        pool: &PgPool,
        video_id: &str,
    ) -> Result<Option<Iteration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM iterations
             WHERE video_id = $1
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Iteration>(&query)
            .bind(video_id)
            .fetch_optional(pool)
            .await
    }

    /// Update an iteration. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateIteration,
    ) -> Result<Option<IterationGraph>, sqlx::Error> {
        let query = format!(
            "UPDATE iterations SET
                url = COALESCE($2, url),
                length = COALESCE($3, length),
                status = COALESCE($4, status),
                notes = COALESCE($5, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let iteration = sqlx::query_as::<_, Iteration>(&query)
            .bind(id)
            .bind(&input.url)
            .bind(input.length)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await?;

        match iteration {
            Some(iteration) => Ok(Some(Self::hydrate(pool, iteration, Hydration::Root).await?)),
            None => Ok(None),
        }
    }

    /// Append a note to an iteration's notes, newline-separated.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn append_note(pool: &PgPool, id: &str, content: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE iterations SET
                notes = CASE WHEN notes = '' THEN $2 ELSE notes || E'\\n' || $2 END,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(content)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an iteration. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM iterations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach the parent video (as an ancestor) to an iteration row.
    pub async fn hydrate(
        pool: &PgPool,
        iteration: Iteration,
        depth: Hydration,
    ) -> Result<IterationGraph, sqlx::Error> {
        let video = match depth.parent() {
            Some(parent_depth) => {
                let video = VideoRepo::find_by_id(pool, &iteration.video_id)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Some(Box::new(VideoRepo::hydrate(pool, video, parent_depth).await?))
            }
            None => None,
        };
        Ok(IterationGraph { iteration, video })
    }

    async fn hydrate_all(
        pool: &PgPool,
        iterations: Vec<Iteration>,
    ) -> Result<Vec<IterationGraph>, sqlx::Error> {
        let mut graphs = Vec::with_capacity(iterations.len());
        for iteration in iterations {
            graphs.push(Self::hydrate(pool, iteration, Hydration::Root).await?);
        }
        Ok(graphs)
    }
}
