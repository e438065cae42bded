//! Teacher directory - the authoritative, ordered list of teacher identities.
//!
//! The directory is built once from seed data and then only read. Its order is
//! the row order of every per-teacher view.

use crate::{
    entities::Teacher,
    errors::{Error, Result},
};
use std::collections::HashSet;
use tracing::debug;

/// Ordered collection of teachers with unique ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    teachers: Vec<Teacher>,
}

impl Directory {
    /// Builds a directory, keeping the given order.
    ///
    /// # Errors
    /// Returns an error if:
    /// - two teachers share an id (`Error::DuplicateTeacher`)
    /// - two teachers of the same school share an email, compared
    ///   case-insensitively (`Error::DuplicateEmail`)
    pub fn new(teachers: Vec<Teacher>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();

        for teacher in &teachers {
            if !ids.insert(teacher.id.as_str()) {
                return Err(Error::DuplicateTeacher {
                    id: teacher.id.clone(),
                });
            }
            if !emails.insert((teacher.school_id.as_str(), teacher.email.to_lowercase())) {
                return Err(Error::DuplicateEmail {
                    email: teacher.email.clone(),
                    school_id: teacher.school_id.clone(),
                });
            }
        }

        debug!("Teacher directory built with {} entries", teachers.len());
        Ok(Self { teachers })
    }

    /// Looks up a teacher by id.
    #[must_use]
    pub fn get(&self, teacher_id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == teacher_id)
    }

    /// Teachers in directory order.
    pub fn iter(&self) -> std::slice::Iter<'_, Teacher> {
        self.teachers.iter()
    }

    /// Number of teachers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    /// Whether the directory has no teachers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    /// Teachers whose name or email contains `query`, ignoring case.
    ///
    /// A blank query returns every teacher. The result keeps directory order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Teacher> {
        let needle = query.trim().to_lowercase();
        self.teachers
            .iter()
            .filter(|t| needle.is_empty() || t.matches_lowercase(&needle))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Teacher;
    type IntoIter = std::slice::Iter<'a, Teacher>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
