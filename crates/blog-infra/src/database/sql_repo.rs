//! SQL post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use blog_core::domain::{NewPost, Post, PostQuery};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::sql_base::{SqlBaseRepository, query_error};

/// SQL post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(query_error)?;

        let model = post::ActiveModel::from(new_post)
            .insert(&txn)
            .await
            .map_err(query_error)?;

        txn.commit().await.map_err(query_error)?;
        tracing::debug!(post_id = model.post_id, "Inserted blog post");

        Ok(model.into())
    }

    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(not_after = ?query.not_after, limit = query.limit, "Listing blog posts");

        let mut select = PostEntity::find();
        if let Some(bound) = query.not_after {
            select = select.filter(post::Column::Timestamp.lte(DateTimeWithTimeZone::from(bound)));
        }

        let result = select
            .order_by_desc(post::Column::Timestamp)
            .limit(query.limit)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_content(
        &self,
        id: i32,
        content: String,
        edited_at: DateTime<Utc>,
    ) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(query_error)?;

        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)?;

        let mut active = existing.into_active_model();
        active.content = Set(content);
        active.edit_timestamp = Set(Some(edited_at.into()));
        let model = active.update(&txn).await.map_err(query_error)?;

        txn.commit().await.map_err(query_error)?;
        tracing::debug!(post_id = id, "Updated blog post");

        Ok(model.into())
    }
}
