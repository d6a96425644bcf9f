//! Storage port — repository traits for users and plants.

use std::future::Future;
use std::sync::Arc;

use plantcare_domain::error::PlantCareError;
use plantcare_domain::id::{PlantId, UserId};
use plantcare_domain::plant::Plant;
use plantcare_domain::user::User;

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Persist a new user.
    fn create(&self, user: User) -> impl Future<Output = Result<User, PlantCareError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PlantCareError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, PlantCareError>> + Send;
}

/// Repository for persisting and querying [`Plant`]s.
pub trait PlantRepository {
    /// Persist a new plant.
    fn create(&self, plant: Plant) -> impl Future<Output = Result<Plant, PlantCareError>> + Send;

    /// Get a plant by its unique identifier.
    fn get_by_id(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send;

    /// Get every plant owned by `user_id`.
    fn get_by_user_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Plant>, PlantCareError>> + Send;

    /// Rename a plant, returning the updated record or `None` if it does not exist.
    fn update_name(
        &self,
        id: PlantId,
        name: String,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send;
}

impl<T: UserRepository + Send + Sync> UserRepository for Arc<T> {
    fn create(&self, user: User) -> impl Future<Output = Result<User, PlantCareError>> + Send {
        (**self).create(user)
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, PlantCareError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, PlantCareError>> + Send {
        (**self).get_all()
    }
}

impl<T: PlantRepository + Send + Sync> PlantRepository for Arc<T> {
    fn create(&self, plant: Plant) -> impl Future<Output = Result<Plant, PlantCareError>> + Send {
        (**self).create(plant)
    }

    fn get_by_id(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_by_user_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Plant>, PlantCareError>> + Send {
        (**self).get_by_user_id(user_id)
    }

    fn update_name(
        &self,
        id: PlantId,
        name: String,
    ) -> impl Future<Output = Result<Option<Plant>, PlantCareError>> + Send {
        (**self).update_name(id, name)
    }
}
