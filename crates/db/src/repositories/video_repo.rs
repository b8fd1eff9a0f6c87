//! Repository for the `videos` table and the `video_editors` association.

use cutroom_core::hydration::Hydration;
use cutroom_core::status::VIDEO_STATUS_PUBLISHED;
use sqlx::PgPool;

use super::{new_id, ChannelRepo, EditorRepo, IterationRepo};
use crate::models::graph::VideoGraph;
use crate::models::video::{CreateVideo, UpdateVideo, Video};

/// Column list for videos queries.
const COLUMNS: &str = "id, channel_id, status, resources, title, description, keywords, \
    category, privacy_status, external_id, created_at, updated_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video and associate its initial editors, returning it
    /// hydrated as a root.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<VideoGraph, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos
                (id, channel_id, status, resources, title, description, keywords,
                 category, privacy_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(new_id())
            .bind(&input.channel_id)
            .bind(&input.status)
            .bind(&input.resources)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.keywords)
            .bind(&input.category)
            .bind(input.privacy_status)
            .fetch_one(pool)
            .await?;

        for editor_id in &input.editor_ids {
            Self::add_editor(pool, &video.id, editor_id).await?;
        }

        Self::hydrate(pool, video, Hydration::Root).await
    }

    /// Find a bare video row by ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a video hydrated to the given depth.
    pub async fn get(
        pool: &PgPool,
        id: &str,
        depth: Hydration,
    ) -> Result<Option<VideoGraph>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(video) => Ok(Some(Self::hydrate(pool, video, depth).await?)),
            None => Ok(None),
        }
    }

    /// List all videos, each hydrated as a root.
    pub async fn list(pool: &PgPool) -> Result<Vec<VideoGraph>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY created_at DESC");
        let videos = sqlx::query_as::<_, Video>(&query).fetch_all(pool).await?;
        Self::hydrate_all(pool, videos).await
    }

    /// List the videos of one channel, each hydrated as a root.
    pub async fn list_by_channel(
        pool: &PgPool,
        channel_id: &str,
    ) -> Result<Vec<VideoGraph>, sqlx::Error> {
        let videos = Self::list_rows_by_channel(pool, channel_id).await?;
        Self::hydrate_all(pool, videos).await
    }

    /// List the videos of every channel a user owns, each hydrated as a root.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Vec<VideoGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE channel_id IN (SELECT id FROM channels WHERE owner_id = $1)
             ORDER BY created_at DESC"
        );
        let videos = sqlx::query_as::<_, Video>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await?;
        Self::hydrate_all(pool, videos).await
    }

    /// Bare video rows of one channel, oldest first.
    pub async fn list_rows_by_channel(
        pool: &PgPool,
        channel_id: &str,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE channel_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(channel_id)
            .fetch_all(pool)
            .await
    }

    /// Update a video. Only non-`None` fields are applied.
    ///
    /// Editors listed in the patch are added if not already associated;
    /// existing associations are never removed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateVideo,
    ) -> Result<Option<VideoGraph>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                status = COALESCE($2, status),
                resources = COALESCE($3, resources),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                keywords = COALESCE($6, keywords),
                category = COALESCE($7, category),
                privacy_status = COALESCE($8, privacy_status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.resources)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.keywords)
            .bind(&input.category)
            .bind(input.privacy_status)
            .fetch_optional(pool)
            .await?;

        let Some(video) = video else {
            return Ok(None);
        };

        if let Some(editor_ids) = &input.editor_ids {
            for editor_id in editor_ids {
                Self::add_editor(pool, &video.id, editor_id).await?;
            }
        }

        Ok(Some(Self::hydrate(pool, video, Hydration::Root).await?))
    }

    /// Record a successful upload: status becomes `published` and the
    /// platform identifier is stored.
    pub async fn mark_published(
        pool: &PgPool,
        id: &str,
        external_id: &str,
    ) -> Result<Option<VideoGraph>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                status = $2,
                external_id = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(VIDEO_STATUS_PUBLISHED)
            .bind(external_id)
            .fetch_optional(pool)
            .await?;

        match video {
            Some(video) => Ok(Some(Self::hydrate(pool, video, Hydration::Root).await?)),
            None => Ok(None),
        }
    }

    /// Associate an editor with a video. Returns `true` if the association
    /// is new, `false` if it already existed.
    pub async fn add_editor(
        pool: &PgPool,
        video_id: &str,
        editor_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO video_editors (video_id, editor_id)
             VALUES ($1, $2)
             ON CONFLICT (video_id, editor_id) DO NOTHING",
        )
        .bind(video_id)
        .bind(editor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a video. Returns `true` if a row was removed.
    ///
    /// Editor associations go with it; iterations block the delete.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach relationships to a video row according to `depth`.
    ///
    /// The channel is loaded as an ancestor (with its owner, without its
    /// video list). Iterations and editors are loaded whenever the video
    /// itself is hydrated, including as an iteration's ancestor.
    pub async fn hydrate(
        pool: &PgPool,
        video: Video,
        depth: Hydration,
    ) -> Result<VideoGraph, sqlx::Error> {
        let channel = match depth.parent() {
            Some(parent_depth) => {
                let channel = ChannelRepo::find_by_id(pool, &video.channel_id)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Some(Box::new(
                    ChannelRepo::hydrate(pool, channel, parent_depth).await?,
                ))
            }
            None => None,
        };

        let (iterations, editors) = match depth.leaf_lists() {
            Some(_) => (
                Some(IterationRepo::list_rows_by_video(pool, &video.id).await?),
                Some(EditorRepo::list_by_video(pool, &video.id).await?),
            ),
            None => (None, None),
        };

        Ok(VideoGraph {
            video,
            channel,
            iterations,
            editors,
        })
    }

    async fn hydrate_all(
        pool: &PgPool,
        videos: Vec<Video>,
    ) -> Result<Vec<VideoGraph>, sqlx::Error> {
        let mut graphs = Vec::with_capacity(videos.len());
        for video in videos {
            graphs.push(Self::hydrate(pool, video, Hydration::Root).await?);
        }
        Ok(graphs)
    }
}
