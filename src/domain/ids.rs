//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix carried by every anonymized user identifier
pub const ANON_USER_PREFIX: &str = "anon_user_";

/// Anonymized user identifier newtype wrapper
///
/// Identifies the submitter of a single record. Generated identifiers are
/// fresh per record, so an id is not a stable per-person identity.
///
/// # Examples
///
/// ```
/// use healthpulse::domain::ids::UserId;
/// use std::str::FromStr;
///
/// let user_id = UserId::from_str("anon_user_k3j9x0q2m").unwrap();
/// assert_eq!(user_id.as_str(), "anon_user_k3j9x0q2m");
/// assert!(user_id.is_anonymized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from a string
    ///
    /// Returns `Err` if the identifier is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("User ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Builds an anonymized identifier from a random suffix
    pub fn anonymized(suffix: &str) -> Self {
        Self(format!("{ANON_USER_PREFIX}{suffix}"))
    }

    /// Returns the user ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier uses the anonymized `anon_user_` form
    pub fn is_anonymized(&self) -> bool {
        self.0.starts_with(ANON_USER_PREFIX) && self.0.len() > ANON_USER_PREFIX.len()
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
