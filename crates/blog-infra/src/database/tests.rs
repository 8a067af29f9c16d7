#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::sql_repo::SqlPostRepository;
    use blog_core::domain::{NewPost, Post, PostQuery};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use chrono::{TimeDelta, Utc};
    use sea_orm::prelude::DateTimeWithTimeZone;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction, Value};

    fn model(post_id: i32, content: &str, age_minutes: i64) -> post::Model {
        let timestamp = Utc::now() - TimeDelta::minutes(age_minutes);
        post::Model {
            post_id,
            author: "Steffo".to_owned(),
            content: content.to_owned(),
            timestamp: timestamp.into(),
            edit_timestamp: None,
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(7, "Content", 5)]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(7).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.content, "Content");
        assert_eq!(post.edited_at, None);
    }

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let stored = model(1, "hello", 0);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let post = repo
            .create(NewPost {
                author: "Steffo".to_owned(),
                content: "hello".to_owned(),
                created_at: stored.timestamp.into(),
            })
            .await
            .unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.author, "Steffo");
        assert_eq!(post.content, "hello");
    }

    #[tokio::test]
    async fn test_list_filters_orders_and_limits_in_sql() {
        let bound = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(2, "newer", 1), model(1, "older", 10)]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let posts = repo
            .list(PostQuery {
                not_after: Some(bound),
                limit: 50,
            })
            .await
            .unwrap();

        let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);

        assert_eq!(
            repo.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "blogposts"."post_id", "blogposts"."author", "blogposts"."content", "blogposts"."timestamp", "blogposts"."edit_timestamp" FROM "blogposts" WHERE "blogposts"."timestamp" <= $1 ORDER BY "blogposts"."timestamp" DESC LIMIT $2"#,
                vec![
                    Value::from(DateTimeWithTimeZone::from(bound)),
                    Value::from(50u64),
                ],
            )]
        );
    }

    #[tokio::test]
    async fn test_list_without_bound_has_no_filter() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "scheduled", -60)]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let posts = repo
            .list(PostQuery {
                not_after: None,
                limit: 1,
            })
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);

        assert_eq!(
            repo.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "blogposts"."post_id", "blogposts"."author", "blogposts"."content", "blogposts"."timestamp", "blogposts"."edit_timestamp" FROM "blogposts" ORDER BY "blogposts"."timestamp" DESC LIMIT $1"#,
                vec![Value::from(1u64)],
            )]
        );
    }

    #[tokio::test]
    async fn test_update_content_stamps_edit_time() {
        let original = model(3, "before", 30);
        let edited_at = Utc::now();
        let mut updated = original.clone();
        updated.content = "after".to_owned();
        updated.edit_timestamp = Some(edited_at.into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![original.clone()], vec![updated]])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let post = repo
            .update_content(3, "after".to_owned(), edited_at)
            .await
            .unwrap();

        assert_eq!(post.content, "after");
        assert_eq!(post.edited_at, Some(edited_at));
        assert_eq!(post.created_at, original.timestamp);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let result = repo.update_content(99, "x".to_owned(), Utc::now()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SqlPostRepository::new(db);

        let result = BaseRepository::<Post, i32>::delete(&repo, 99).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
