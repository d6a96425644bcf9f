//! User — the owner of plants.

use serde::{Deserialize, Serialize};

use crate::error::{PlantCareError, validate_name};
use crate::id::UserId;

/// Colours handed out to new users, as `#RRGGBB`.
pub const PALETTE: [&str; 16] = [
    "#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5", "#2196F3", "#03A9F4", "#00BCD4",
    "#009688", "#4CAF50", "#8BC34A", "#CDDC39", "#FFEB3B", "#FFC107", "#FF9800", "#FF5722",
];

/// A person owning plants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub colour: String,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
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

/// Pick the palette colour for a user id.
///
/// Ids are random, so this spreads users over the palette.
#[must_use]
pub fn palette_colour(id: UserId) -> &'static str {
    let last = id.as_uuid().as_bytes()[15];
    PALETTE[usize::from(last) % PALETTE.len()]
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    name: Option<String>,
    colour: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// Without an explicit colour one is taken from [`PALETTE`].
    ///
    /// # Errors
    ///
    /// Returns [`PlantCareError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<User, PlantCareError> {
        let id = self.id.unwrap_or_default();
        let user = User {
            id,
            name: self.name.unwrap_or_default(),
            colour: self
                .colour
                .unwrap_or_else(|| palette_colour(id).to_string()),
        };
        user.validate()?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn should_assign_palette_colour_when_none_given() {
        let user = User::builder().name("Reid").build().unwrap();
        assert!(PALETTE.contains(&user.colour.as_str()));
    }

    #[test]
    fn should_keep_explicit_colour() {
        let user = User::builder()
            .name("Reid")
            .colour("#000000")
            .build()
            .unwrap();
        assert_eq!(user.colour, "#000000");
    }

    #[test]
    fn should_pick_same_colour_for_same_id() {
        let id = UserId::new();
        assert_eq!(palette_colour(id), palette_colour(id));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = User::builder().build();
        assert!(matches!(
            result,
            Err(PlantCareError::Validation(ValidationError::EmptyName))
        ));
    }
}
