#[cfg(test)]
mod tests {
    use crate::database::entity::{blog, user};
    use crate::database::postgres_repo::{PostgresBlogRepository, PostgresUserRepository};
    use bloglist_core::domain::{Blog, User};
    use bloglist_core::error::RepoError;
    use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};
    use crate::database::postgres_base::map_db_err;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn blog_model(user_id: uuid::Uuid, title: &str, likes: i64) -> blog::Model {
        let now = chrono::Utc::now();
        blog::Model {
            id: uuid::Uuid::new_v4(),
            user_id,
            title: title.to_owned(),
            author: "Edsger W. Dijkstra".to_owned(),
            url: "http://www.cs.utexas.edu/~EWD/".to_owned(),
            likes,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_blog_by_id() {
        let user_id = uuid::Uuid::new_v4();
        let model = blog_model(user_id, "Canonical string reduction", 12);
        let blog_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result: Option<Blog> = repo.find_by_id(blog_id).await.unwrap();

        let blog = result.unwrap();
        assert_eq!(blog.id, blog_id);
        assert_eq!(blog.user_id, user_id);
        assert_eq!(blog.likes, 12);
    }

    #[tokio::test]
    async fn test_find_blogs_by_user_id() {
        let user_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                blog_model(user_id, "Go To Statement Considered Harmful", 5),
                blog_model(user_id, "Canonical string reduction", 12),
            ]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let blogs = repo.find_by_user_id(user_id).await.unwrap();

        assert_eq!(blogs.len(), 2);
        assert!(blogs.iter().all(|b| b.user_id == user_id));
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let now = chrono::Utc::now();
        let user_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                username: "root".to_owned(),
                name: "Superuser".to_owned(),
                password_hash: "$argon2id$v=19$hash".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user: User = repo.find_by_username("root").await.unwrap().unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.name, "Superuser");
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = BaseRepository::<Blog, _>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_all_blogs_oldest_first() {
        let user_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                blog_model(user_id, "React patterns", 7),
                blog_model(user_id, "Type wars", 2),
            ]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let blogs = BaseRepository::<Blog, _>::find_all(&repo).await.unwrap();
        assert_eq!(blogs[0].title, "React patterns");

        let log = format!("{:?}", repo.db.into_transaction_log());
        assert!(log.contains("ORDER BY"), "{log}");
        assert!(log.contains("created_at"), "{log}");
    }

    #[tokio::test]
    async fn test_find_all_users_oldest_first() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let users = BaseRepository::<User, _>::find_all(&repo).await.unwrap();
        assert!(users.is_empty());

        let log = format!("{:?}", repo.db.into_transaction_log());
        assert!(log.contains("ORDER BY"), "{log}");
    }

    #[tokio::test]
    async fn test_save_inserts_when_no_row_was_updated() {
        let model = blog_model(uuid::Uuid::new_v4(), "Type wars", 2);

        // The UPDATE ... RETURNING matches nothing, then the INSERT returns the row.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new(), vec![model.clone()]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let saved = repo.save(Blog::from(model.clone())).await.unwrap();
        assert_eq!(saved.id, model.id);
        assert_eq!(saved.title, "Type wars");

        let log = format!("{:?}", repo.db.into_transaction_log());
        let update = log.find("UPDATE").unwrap();
        let insert = log.find("INSERT").unwrap();
        assert!(update < insert, "{log}");
    }

    #[tokio::test]
    async fn test_save_updates_existing_row() {
        let mut model = blog_model(uuid::Uuid::new_v4(), "Type wars", 2);
        model.likes = 3;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let saved = repo.save(Blog::from(model)).await.unwrap();
        assert_eq!(saved.likes, 3);

        let log = format!("{:?}", repo.db.into_transaction_log());
        assert!(!log.contains("INSERT"), "{log}");
    }

    #[tokio::test]
    async fn test_query_failure_maps_to_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "relation \"blogs\" does not exist".to_owned(),
            )])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = BaseRepository::<Blog, _>::find_all(&repo).await;
        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    #[test]
    fn test_connection_failure_maps_to_connection_error() {
        let err = map_db_err(DbErr::Conn(RuntimeErr::Internal("refused".to_owned())));
        assert!(matches!(err, RepoError::Connection(_)));
    }
}
