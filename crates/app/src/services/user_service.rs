//! User service — use-cases for managing plant owners.

use plantcare_domain::error::{NotFoundError, PlantCareError};
use plantcare_domain::id::UserId;
use plantcare_domain::user::User;

use crate::ports::UserRepository;

/// Application service for creating and reading users.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository + Sync> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a user with a palette colour.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::Validation`] if `name` is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, name))]
    pub async fn create_user(&self, name: impl Into<String>) -> Result<User, PlantCareError> {
        let user = User::builder().name(name).build()?;
        tracing::debug!(user_id = %user.id, colour = %user.colour, "creating user");
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, PlantCareError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("User", id).into())
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, PlantCareError> {
        self.repo.get_all().await
    }
}
