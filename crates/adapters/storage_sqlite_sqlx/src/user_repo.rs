//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use plantcare_app::ports::UserRepository;
use plantcare_domain::error::PlantCareError;
use plantcare_domain::id::UserId;
use plantcare_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let colour: String = row.try_get("colour")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(User { id, name, colour }))
    }
}

const INSERT: &str = "INSERT INTO users (id, name, colour) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, colour FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, colour FROM users ORDER BY name, id";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.name)
                .bind(&user.colour)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUserRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteUserRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_create_and_retrieve_user() {
        let repo = setup().await;
        let user = User::builder().name("Reid").build().unwrap();

        repo.create(user.clone()).await.unwrap();

        let fetched = repo.get_by_id(user.id).await.unwrap();
        assert_eq!(fetched, Some(user));
    }

    #[tokio::test]
    async fn should_return_none_when_user_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(UserId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_users_sorted_by_name() {
        let repo = setup().await;
        for name in ["Sam", "Alex"] {
            repo.create(User::builder().name(name).build().unwrap())
                .await
                .unwrap();
        }

        let all = repo.get_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alex", "Sam"]);
    }
}
