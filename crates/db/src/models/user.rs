use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::validation::validate_required;
use serde::{Deserialize, Serialize};

/// A document in the `users` index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// DTO for signing up. A missing email is synthesized from the name.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: Option<String>,
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required("name", &self.name)?;
        if let Some(email) = &self.email {
            validate_required("email", email)?;
        }
        Ok(())
    }
}

/// DTO for updating a user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUser {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_required("name", name)?;
        }
        if let Some(email) = &self.email {
            validate_required("email", email)?;
        }
        Ok(())
    }
}

impl User {
    pub fn apply(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

/// Body of `POST /users/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
}
