//! Repository for the `channels` table.

use cutroom_core::hydration::Hydration;
use sqlx::PgPool;

use super::{new_id, UserRepo, VideoRepo};
use crate::models::channel::{Channel, CreateChannel, UpdateChannel};
use crate::models::graph::ChannelGraph;

/// Column list for channels queries.
const COLUMNS: &str = "id, name, api_key, owner_id, created_at, updated_at";

/// Provides CRUD operations for channels.
pub struct ChannelRepo;

impl ChannelRepo {
    /// Insert a new channel, returning it hydrated as a root.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChannel,
    ) -> Result<ChannelGraph, sqlx::Error> {
        let query = format!(
            "INSERT INTO channels (id, name, api_key, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let channel = sqlx::query_as::<_, Channel>(&query)
            .bind(new_id())
            .bind(&input.name)
            .bind(&input.api_key)
            .bind(&input.owner_id)
            .fetch_one(pool)
            .await?;
        Self::hydrate(pool, channel, Hydration::Root).await
    }

    /// Find a bare channel row by ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Channel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM channels WHERE id = $1");
        sqlx::query_as::<_, Channel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a channel hydrated to the given depth.
    pub async fn get(
        pool: &PgPool,
        id: &str,
        depth: Hydration,
    ) -> Result<Option<ChannelGraph>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(channel) => Ok(Some(Self::hydrate(pool, channel, depth).await?)),
            None => Ok(None),
        }
    }

    /// List all channels, each hydrated as a root.
    pub async fn list(pool: &PgPool) -> Result<Vec<ChannelGraph>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM channels ORDER BY created_at DESC");
        let channels = sqlx::query_as::<_, Channel>(&query).fetch_all(pool).await?;
        Self::hydrate_all(pool, channels).await
    }

    /// List the channels owned by a user, each hydrated as a root.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Vec<ChannelGraph>, sqlx::Error> {
        let channels = Self::list_rows_by_owner(pool, owner_id).await?;
        Self::hydrate_all(pool, channels).await
    }

    /// Bare channel rows owned by a user, oldest first.
    pub async fn list_rows_by_owner(
        pool: &PgPool,
        owner_id: &str,
    ) -> Result<Vec<Channel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM channels
             WHERE owner_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Channel>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a channel. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateChannel,
    ) -> Result<Option<ChannelGraph>, sqlx::Error> {
        let query = format!(
            "UPDATE channels SET
                name = COALESCE($2, name),
                api_key = COALESCE($3, api_key),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let channel = sqlx::query_as::<_, Channel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.api_key)
            .fetch_optional(pool)
            .await?;

        match channel {
            Some(channel) => Ok(Some(Self::hydrate(pool, channel, Hydration::Root).await?)),
            None => Ok(None),
        }
    }

    /// Delete a channel. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while the channel still has videos.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM channels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach relationships to a channel row according to `depth`.
    ///
    /// The owner is loaded as an ancestor (never with its channel list);
    /// videos are listed only for a root channel.
    pub async fn hydrate(
        pool: &PgPool,
        channel: Channel,
        depth: Hydration,
    ) -> Result<ChannelGraph, sqlx::Error> {
        let owner = match depth.parent() {
            Some(parent_depth) => {
                let user = UserRepo::find_by_id(pool, &channel.owner_id)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Some(Box::new(UserRepo::hydrate(pool, user, parent_depth).await?))
            }
            None => None,
        };

        let videos = match depth.children() {
            Some(_) => Some(VideoRepo::list_rows_by_channel(pool, &channel.id).await?),
            None => None,
        };

        Ok(ChannelGraph {
            channel,
            owner,
            videos,
        })
    }

    async fn hydrate_all(
        pool: &PgPool,
        channels: Vec<Channel>,
    ) -> Result<Vec<ChannelGraph>, sqlx::Error> {
        let mut graphs = Vec::with_capacity(channels.len());
        for channel in channels {
            graphs.push(Self::hydrate(pool, channel, Hydration::Root).await?);
        }
        Ok(graphs)
    }
}
