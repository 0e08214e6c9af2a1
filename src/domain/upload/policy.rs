// SPDX-License-Identifier: MPL-2.0
//! Rules an upload attempt is checked against.

use std::collections::BTreeSet;

/// MIME types the classifier accepts.
pub const IMAGE_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Largest accepted upload (10 MiB). A file of exactly this size is accepted.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Allowed MIME types and size limit for an upload.
///
/// Type matching is exact: the host reports lowercase MIME types, and
/// `IMAGE/PNG` is not treated as `image/png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    allowed_mime_types: BTreeSet<String>,
    max_size_bytes: u64,
}

impl ValidationPolicy {
    /// Creates a policy from an explicit type set and size limit.
    pub fn new<I, S>(allowed_mime_types: I, max_size_bytes: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_mime_types: allowed_mime_types.into_iter().map(Into::into).collect(),
            max_size_bytes,
        }
    }

    /// Returns whether `mime_type` is a member of the allowed set.
    #[must_use]
    pub fn allows(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.contains(mime_type)
    }

    #[must_use]
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Returns the allowed types in sorted order.
    pub fn allowed_mime_types(&self) -> impl Iterator<Item = &str> {
        self.allowed_mime_types.iter().map(String::as_str)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(IMAGE_MIME_TYPES, MAX_UPLOAD_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_classifier_limits() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.max_size_bytes(), 10_485_760);
        for mime in IMAGE_MIME_TYPES {
            assert!(policy.allows(mime), "{mime} should be allowed");
        }
        assert!(!policy.allows("image/bmp"));
        assert!(!policy.allows(""));
    }

    #[test]
    fn type_matching_is_exact() {
        let policy = ValidationPolicy::default();
        assert!(!policy.allows("IMAGE/PNG"));
        assert!(!policy.allows("image/png "));
        assert!(!policy.allows("image/jpg"));
    }

    #[test]
    fn duplicate_types_collapse_into_a_set() {
        let policy = ValidationPolicy::new(["image/png", "image/png", "image/gif"], 1);
        assert_eq!(
            policy.allowed_mime_types().collect::<Vec<_>>(),
            vec!["image/gif", "image/png"]
        );
    }
}
