//! User account model.
//!
//! Users are created outside this service; the favourites core only reads
//! them. The password is held so the record mirrors the table, but it is
//! never serialised and is redacted from `Debug` output.

use std::fmt;

use super::UserId;

/// A registered user.
///
/// ## Invariants
/// - `email` is unique across users (enforced by the store).
/// - `password` never leaves the process: there is no `Serialize` impl and
///   the `Debug` impl prints a placeholder.
///
/// # Examples
/// ```
/// use starbase::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), "luke@rebellion.org", "hunter2", true);
/// assert_eq!(user.email(), "luke@rebellion.org");
/// assert!(!format!("{user:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    password: String,
    is_active: bool,
}

impl User {
    /// Build a user from its stored columns.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        password: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
            is_active,
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Unique email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Stored password value. Callers must not expose it.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Whether the account is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User with id {} and email {}", self.id, self.email)
    }
}
