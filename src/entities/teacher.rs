//! Teacher entity - A single identity in the teacher directory.
//!
//! Teachers are loaded from seed data and never mutated or deleted by this crate.

use serde::{Deserialize, Serialize};

/// Teacher directory model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique, stable identifier
    pub id: String,
    /// Display name (e.g., "Marie Dupont")
    pub name: String,
    /// Contact email, unique within the owning school
    pub email: String,
    /// Identifier of the school this teacher belongs to
    pub school_id: String,
    /// RFC 3339 creation timestamp carried through from the seed data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Teacher {
    /// Builds a teacher without a creation timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        school_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            school_id: school_id.into(),
            created_at: None,
        }
    }

    /// Case-insensitive substring match on name or email.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}
