//! Plant — a tracked entity owned by a user.

use serde::{Deserialize, Serialize};

use crate::error::{PlantCareError, validate_name};
use crate::id::{PlantId, UserId};

/// A plant record as persisted. Only `name` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub user_id: UserId,
    pub name: String,
}

impl Plant {
    /// Create a builder for constructing a [`Plant`].
    #[must_use]
    pub fn builder() -> PlantBuilder {
        PlantBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), PlantCareError> {
        validate_name(&self.name)?;
        Ok(())
    }
}

/// Step-by-step builder for [`Plant`].
#[derive(Debug, Default)]
pub struct PlantBuilder {
    id: Option<PlantId>,
    user_id: Option<UserId>,
    name: Option<String>,
}

impl PlantBuilder {
    #[must_use]
    pub fn id(mut self, id: PlantId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Plant`].
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<Plant, PlantCareError> {
        let plant = Plant {
            id: self.id.unwrap_or_default(),
            user_id: self.user_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        plant.validate()?;
        Ok(plant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn should_build_valid_plant_when_name_provided() {
        let owner = UserId::new();
        let plant = Plant::builder()
            .name("Monstera")
            .user_id(owner)
            .build()
            .unwrap();
        assert_eq!(plant.name, "Monstera");
        assert_eq!(plant.user_id, owner);
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = Plant::builder().name(" \t").build();
        assert!(matches!(
            result,
            Err(PlantCareError::Validation(ValidationError::EmptyName))
        ));
    }
}
