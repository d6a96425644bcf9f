//! `SQLite` implementation of [`PlantRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use plantcare_app::ports::PlantRepository;
use plantcare_domain::error::PlantCareError;
use plantcare_domain::id::{PlantId, UserId};
use plantcare_domain::plant::Plant;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Plant`].
struct Wrapper(Plant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Plant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let name: String = row.try_get("name")?;

        let id = PlantId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let user_id =
            UserId::from_str(&user_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Plant { id, user_id, name }))
    }
}

const INSERT: &str = "INSERT INTO plants (id, user_id, name) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, user_id, name FROM plants WHERE id = ?";
const SELECT_BY_USER: &str =
    "SELECT id, user_id, name FROM plants WHERE user_id = ? ORDER BY name, id";
const UPDATE_NAME: &str = "UPDATE plants SET name = ? WHERE id = ? RETURNING id, user_id, name";

/// `SQLite`-backed plant repository.
pub struct SqlitePlantRepository {
    pool: SqlitePool,
}

impl SqlitePlantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlantRepository for SqlitePlantRepository {
    fn create(&self, plant: Plant) -> impl Future<Output = Result<Plant, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(plant.id.to_string())
                .bind(plant.user_id.to_string())
                .bind(&plant.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(plant)
        }
    }

    fn get_by_id(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send {
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

    fn get_by_user_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Plant>, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_USER)
                .bind(user_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update_name(
        &self,
        id: PlantId,
        name: String,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE_NAME)
                .bind(name)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use crate::user_repo::SqliteUserRepository;
    use plantcare_app::ports::UserRepository;
    use plantcare_domain::user::User;

    async fn setup() -> (SqlitePlantRepository, UserId) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let owner = User::builder().name("Owner").build().unwrap();
        let owner_id = owner.id;
        SqliteUserRepository::new(pool.clone())
            .create(owner)
            .await
            .unwrap();

        (SqlitePlantRepository::new(pool), owner_id)
    }

    fn plant(name: &str, owner: UserId) -> Plant {
        Plant::builder().name(name).user_id(owner).build().unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_plant() {
        let (repo, owner) = setup().await;
        let p = plant("Monstera", owner);

        repo.create(p.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(p.id).await.unwrap(), Some(p));
    }

    #[tokio::test]
    async fn should_return_none_when_plant_not_found() {
        let (repo, _) = setup().await;
        assert!(repo.get_by_id(PlantId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_plants_of_user_sorted_by_name() {
        let (repo, owner) = setup().await;
        repo.create(plant("Zamioculcas", owner)).await.unwrap();
        repo.create(plant("Aloe", owner)).await.unwrap();

        let plants = repo.get_by_user_id(owner).await.unwrap();

        let names: Vec<&str> = plants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Aloe", "Zamioculcas"]);
        assert!(repo.get_by_user_id(UserId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_rename_plant_and_keep_owner() {
        let (repo, owner) = setup().await;
        let p = plant("Before", owner);
        repo.create(p.clone()).await.unwrap();

        let renamed = repo
            .update_name(p.id, "After".to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(renamed.name, "After");
        assert_eq!(renamed.user_id, owner);
        assert_eq!(repo.get_by_id(p.id).await.unwrap().unwrap().name, "After");
    }

    #[tokio::test]
    async fn should_return_none_when_renaming_missing_plant() {
        let (repo, _) = setup().await;
        let result = repo
            .update_name(PlantId::new(), "Ghost".to_string())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_reject_plant_of_unknown_user() {
        let (repo, _) = setup().await;
        let result = repo.create(plant("Orphan", UserId::new())).await;
        assert!(matches!(result, Err(PlantCareError::Storage(_))));
    }
}
