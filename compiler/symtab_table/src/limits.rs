//! Contains the [`Limits`] configuring how long identifiers and tags may be.

use crate::error::{NameProblem, TagTooLong};

/// The longest identifier accepted by default, in bytes.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 99;

/// The longest type or element-kind tag accepted by default, in bytes.
pub const DEFAULT_MAX_TAG_LENGTH: usize = 9;

/// Length limits enforced by [`crate::scope::ScopeStack::declare`].
///
/// Overlong input is rejected, never truncated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_new::new,
)]
pub struct Limits {
    /// The maximum length of an identifier, in bytes.
    pub max_name_length: usize,

    /// The maximum length of a type tag or element-kind tag, in bytes.
    pub max_tag_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NAME_LENGTH, DEFAULT_MAX_TAG_LENGTH)
    }
}

impl Limits {
    /// Checks that `name` is a non-empty identifier within the limit.
    ///
    /// # Errors
    ///
    /// Returns the [`NameProblem`] describing why the name is rejected.
    pub const fn check_name(&self, name: &str) -> Result<(), NameProblem> {
        if name.is_empty() {
            return Err(NameProblem::Empty);
        }

        if name.len() > self.max_name_length {
            return Err(NameProblem::TooLong {
                length: name.len(),
                max: self.max_name_length,
            });
        }

        Ok(())
    }

    /// Returns `true` if `tag` fits in the tag limit.
    #[must_use]
    pub const fn tag_fits(&self, tag: &str) -> bool {
        tag.len() <= self.max_tag_length
    }

    /// Checks `tag`, spelled as the front end wrote it, for the declaration
    /// of `name` at `line`.
    ///
    /// # Errors
    ///
    /// Returns [`TagTooLong`] if the tag does not fit in the limit.
    pub fn check_tag(
        &self,
        name: &str,
        tag: &str,
        line: usize,
    ) -> Result<(), TagTooLong> {
        if self.tag_fits(tag) {
            return Ok(());
        }

        Err(TagTooLong {
            name: name.to_owned(),
            tag: tag.to_owned(),
            line,
            max: self.max_tag_length,
        })
    }
}
