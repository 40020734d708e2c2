//! Repository for the `users` index.

use std::sync::Arc;

use marquee_core::login::{names_match, normalize_name, synthesize_email};
use marquee_core::types::DbId;
use marquee_store::{DocumentStore, Query};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use super::collection::Collection;
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::DbError;

/// Index holding user documents.
pub const USER_INDEX: &str = "users";

fn mappings() -> Value {
    json!({
        "properties": {
            "id": { "type": "integer" },
            "name": { "type": "text" },
            "email": { "type": "keyword" }
        }
    })
}

/// Result of a name-based login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: User,
    /// `true` when no user matched and a new one was created.
    pub created: bool,
}

/// CRUD over users plus login-or-create.
pub struct UserRepo {
    docs: Collection,
    /// Serializes login-or-create within this process.
    login_lock: Mutex<()>,
}

impl UserRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            docs: Collection::new(store, USER_INDEX, mappings()),
            login_lock: Mutex::new(()),
        }
    }

    pub async fn bootstrap(&self) -> Result<(), DbError> {
        self.docs.bootstrap().await
    }

    pub async fn reinitialize(&self) -> Result<(), DbError> {
        self.docs.reinitialize().await
    }

    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        self.docs.all().await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<User>, DbError> {
        self.docs.find(id).await
    }

    /// Insert a user under the next sequential id.
    ///
    /// When no email is supplied one is synthesized from the name.
    pub async fn create(&self, input: CreateUser) -> Result<User, DbError> {
        let name = normalize_name(&input.name).to_string();
        let email = input.email.unwrap_or_else(|| synthesize_email(&name));
        let user = User {
            id: self.docs.next_id(),
            name,
            email,
        };
        self.docs.put(user.id, &user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: DbId, input: UpdateUser) -> Result<Option<User>, DbError> {
        let Some(mut user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        user.apply(input);
        self.docs.put(id, &user).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(Some(user))
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        let deleted = self.docs.delete(id).await?;
        if deleted {
            tracing::info!(user_id = id, "User deleted");
        }
        Ok(deleted)
    }

    /// Users whose name contains every word of `name`.
    ///
    /// Matching is analyzed full text, so callers compare the exact name
    /// themselves.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<User>, DbError> {
        // Words without a letter or digit analyze to no tokens and would
        // match nothing.
        let query = Query::all(
            name.split_whitespace()
                .filter(|word| word.chars().any(char::is_alphanumeric))
                .map(|word| Query::matching("name", word)),
        );
        self.docs.search(&query).await
    }

    /// Return the user whose name matches `name` case-insensitively, or
    /// create one with a synthesized email.
    ///
    /// The lookup-then-create is serialized within this process only; two
    /// servers sharing a store can still create duplicates.
    pub async fn login_or_create(&self, name: &str) -> Result<LoginOutcome, DbError> {
        let name = normalize_name(name);
        let _guard = self.login_lock.lock().await;

        let existing = self
            .find_by_name(name)
            .await?
            .into_iter()
            .find(|user| names_match(&user.name, name));

        if let Some(user) = existing {
            tracing::info!(user_id = user.id, "Existing user logged in");
            return Ok(LoginOutcome {
                user,
                created: false,
            });
        }

        let user = self
            .create(CreateUser {
                name: name.to_string(),
                email: None,
            })
            .await?;
        Ok(LoginOutcome {
            user,
            created: true,
        })
    }
}
