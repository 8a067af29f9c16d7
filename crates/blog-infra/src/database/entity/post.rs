//! Blog post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogposts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub post_id: i32,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub timestamp: DateTimeWithTimeZone,
    pub edit_timestamp: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.post_id,
            author: model.author,
            content: model.content,
            created_at: model.timestamp.into(),
            edited_at: model.edit_timestamp.map(Into::into),
        }
    }
}

/// Conversion from an unsaved Domain Post to a SeaORM ActiveModel.
/// The primary key is left to the database.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            post_id: NotSet,
            author: Set(post.author),
            content: Set(post.content),
            timestamp: Set(post.created_at.into()),
            edit_timestamp: Set(None),
        }
    }
}
