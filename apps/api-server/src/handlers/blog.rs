//! Blog post handlers: one resource, four verbs.

use actix_web::{HttpResponse, web};

use blog_core::domain::Post;
use blog_shared::dto::{
    CreatePostForm, DeletePostForm, EditPostForm, ListPostsQuery, PostResponse,
};

use crate::middleware::error::AppResult;
use crate::middleware::form::FormFields;
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author,
        content: post.content,
        timestamp: post.created_at,
    }
}

/// GET /api/blog
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let posts = state
        .blog
        .list(
            query.password.as_deref(),
            query.time.as_deref(),
            query.limit.as_deref(),
        )
        .await?;

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/blog
pub async fn create_post(
    state: web::Data<AppState>,
    form: FormFields<CreatePostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let post = state
        .blog
        .create(form.password.as_deref(), form.content.as_deref())
        .await?;
    tracing::info!(post_id = post.id, "Blog post created");

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// PUT /api/blog
pub async fn edit_post(
    state: web::Data<AppState>,
    form: FormFields<EditPostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let post = state
        .blog
        .edit(
            form.password.as_deref(),
            form.post_id.as_deref(),
            form.content.as_deref(),
        )
        .await?;
    tracing::info!(post_id = post.id, "Blog post edited");

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/blog
pub async fn delete_post(
    state: web::Data<AppState>,
    form: FormFields<DeletePostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    state
        .blog
        .delete(form.password.as_deref(), form.post_id.as_deref())
        .await?;
    tracing::info!(post_id = ?form.post_id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
