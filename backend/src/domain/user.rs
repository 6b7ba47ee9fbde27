//! User data model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must be a positive integer")]
    InvalidId,
}

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Access the raw integer key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.parse::<i64>().map_err(|_| UserValidationError::InvalidId)?;
        Self::new(raw)
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Field bundle used to materialise a [`User`] from storage.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application user.
///
/// Users own messages and take part in the directional follow relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user from persisted fields.
    pub fn new(draft: UserDraft) -> Self {
        let UserDraft {
            id,
            name,
            email,
            created_at,
            updated_at,
        } = draft;
        Self {
            id,
            name,
            email,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Fields accepted when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Create payload. Values are stored as given, empty strings included.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Partial update for a user. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    name: Option<String>,
    email: Option<String>,
}

impl UserChanges {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// True when the update would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Produce the updated user, stamping `updated_at` when anything changed.
    pub fn apply(&self, user: &User, now: DateTime<Utc>) -> User {
        if self.is_empty() {
            return user.clone();
        }
        User {
            id: user.id,
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            email: self.email.clone().unwrap_or_else(|| user.email.clone()),
            created_at: user.created_at,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ada() -> User {
        let at = Utc::now();
        User::new(UserDraft {
            id: UserId::new(1).expect("valid id"),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            created_at: at,
            updated_at: at,
        })
    }

    #[rstest]
    #[case("0")]
    #[case("-4")]
    #[case("abc")]
    #[case("")]
    fn user_id_rejects_non_positive_or_garbage(#[case] raw: &str) {
        assert_eq!(raw.parse::<UserId>(), Err(UserValidationError::InvalidId));
    }

    #[rstest]
    fn user_id_parses_digits() {
        let id: UserId = "42".parse().expect("valid id");
        assert_eq!(id.get(), 42);
    }

    #[rstest]
    #[case("", "a@b.c")]
    #[case("Ada", "  ")]
    fn new_user_keeps_empty_values(#[case] name: &str, #[case] email: &str) {
        let new_user = NewUser::new(name, email);
        assert_eq!(new_user.name(), name);
        assert_eq!(new_user.email(), email);
    }

    #[rstest]
    fn partial_update_keeps_unspecified_fields(ada: User) {
        let changes = UserChanges::new(None, Some("countess@example.com".to_owned()));
        let later = ada.created_at() + chrono::Duration::seconds(5);

        let updated = changes.apply(&ada, later);

        assert_eq!(updated.name(), "Ada");
        assert_eq!(updated.email(), "countess@example.com");
        assert_eq!(updated.created_at(), ada.created_at());
        assert_eq!(updated.updated_at(), later);
    }

    #[rstest]
    fn empty_update_is_a_no_op(ada: User) {
        let changes = UserChanges::default();
        assert!(changes.is_empty());
        assert_eq!(changes.apply(&ada, Utc::now()), ada);
    }

    #[rstest]
    fn update_may_clear_name(ada: User) {
        let changes = UserChanges::new(Some(String::new()), None);

        let updated = changes.apply(&ada, Utc::now());

        assert_eq!(updated.name(), "");
        assert_eq!(updated.email(), ada.email());
    }
}
