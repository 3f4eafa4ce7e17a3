//! Identity types for batchop resources.
//!
//! A ResourceId names either a collection (`content://contacts/rows`) or a
//! single stored entity inside it (`content://contacts/rows/42`). It is:
//! - Non-empty
//! - Immutable once parsed
//! - Opaque to the engine, apart from its final path segment

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Opaque identifier of a collection or stored entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    raw: String,
    path_start: usize,
}

impl ResourceId {
    /// Parse a resource identifier.
    ///
    /// Accepts `scheme://authority/path...` as well as bare paths such as
    /// `rows/42`.
    pub fn parse(input: impl Into<String>) -> CoreResult<Self> {
        let raw = input.into();
        if raw.trim().is_empty() {
            return Err(CoreError::invalid_resource_id(
                raw,
                crate::messages::ERR_TARGET_REQUIRED,
            ));
        }

        let path_start = match raw.find("://") {
            Some(scheme_end) => {
                if scheme_end == 0 {
                    return Err(CoreError::invalid_resource_id(raw, "missing scheme"));
                }
                let authority_start = scheme_end + 3;
                raw[authority_start..]
                    .find('/')
                    .map(|i| authority_start + i)
                    .unwrap_or(raw.len())
            }
            None => 0,
        };

        Ok(Self { raw, path_start })
    }

    /// Get the identifier as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the path portion, excluding scheme, authority, query and fragment.
    pub fn path(&self) -> &str {
        let path = &self.raw[self.path_start..];
        let end = path.find(['?', '#']).unwrap_or(path.len());
        &path[..end]
    }

    /// Iterate over the non-empty path segments.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.path().split('/').filter(|s| !s.is_empty())
    }

    /// Get the final path segment, if the identifier has a path.
    pub fn last_path_segment(&self) -> Option<&str> {
        self.path_segments().last()
    }

    /// Build the identifier of a row inside this collection.
    pub fn with_appended_id(&self, id: u64) -> Self {
        let path = self.path();
        let raw = if path.ends_with('/') {
            format!("{}{}", &self.raw[..self.path_start + path.len()], id)
        } else {
            format!("{}/{}", &self.raw[..self.path_start + path.len()], id)
        };
        Self {
            raw,
            path_start: self.path_start,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for ResourceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ResourceId {
    type Error = CoreError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
