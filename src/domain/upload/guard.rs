// SPDX-License-Identifier: MPL-2.0
//! The upload guard: decides whether a form submission may go through.

use super::policy::{IMAGE_MIME_TYPES, ValidationPolicy};
use super::{SelectedFile, UploadAttempt};
use std::fmt;

/// Why an upload attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The form was submitted without a file.
    NoFileSelected,
    /// The file's MIME type is not in the allowed set.
    UnsupportedType,
    /// The file exceeds the size limit.
    FileTooLarge,
}

impl RejectionReason {
    /// Returns the i18n message key for this reason.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RejectionReason::NoFileSelected => "upload-error-no-file",
            RejectionReason::UnsupportedType => "upload-error-unsupported-type",
            RejectionReason::FileTooLarge => "upload-error-too-large",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NoFileSelected => write!(f, "No file selected"),
            RejectionReason::UnsupportedType => write!(f, "Unsupported file type"),
            RejectionReason::FileTooLarge => write!(f, "File too large"),
        }
    }
}

impl std::error::Error for RejectionReason {}

/// Outcome of running the guard on one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(RejectionReason),
}

impl ValidationResult {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Result<(), RejectionReason>> for ValidationResult {
    fn from(result: Result<(), RejectionReason>) -> Self {
        match result {
            Ok(()) => ValidationResult::Accepted,
            Err(reason) => ValidationResult::Rejected(reason),
        }
    }
}

impl ValidationPolicy {
    /// Checks an attempt, stopping at the first failing rule.
    ///
    /// Rules run in order: a file must be present, its type must be allowed,
    /// then its size must not exceed the limit.
    pub fn check(&self, attempt: &UploadAttempt) -> Result<(), RejectionReason> {
        let file = attempt.file().ok_or(RejectionReason::NoFileSelected)?;

        if !self.allows(file.mime_type()) {
            return Err(RejectionReason::UnsupportedType);
        }

        if file.size_bytes() > self.max_size_bytes() {
            return Err(RejectionReason::FileTooLarge);
        }

        Ok(())
    }
}

/// Runs the guard on `attempt`.
#[must_use]
pub fn evaluate(attempt: &UploadAttempt, policy: &ValidationPolicy) -> ValidationResult {
    policy.check(attempt).into()
}

/// Returns whether `mime_type` is one of the classifier's image types.
#[must_use]
pub fn is_image_mime_type(mime_type: &str) -> bool {
    IMAGE_MIME_TYPES.contains(&mime_type)
}

/// Returns whether `file` declares one of the classifier's image types.
#[must_use]
pub fn is_valid_image(file: &SelectedFile) -> bool {
    is_image_mime_type(file.mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::upload::MAX_UPLOAD_BYTES;

    fn attempt(mime: &str, size: u64) -> UploadAttempt {
        UploadAttempt::with_file(SelectedFile::new("upload", mime, size))
    }

    #[test]
    fn missing_file_is_rejected_first() {
        let result = evaluate(&UploadAttempt::empty(), &ValidationPolicy::default());
        assert_eq!(result, ValidationResult::Rejected(RejectionReason::NoFileSelected));
    }

    #[test]
    fn unsupported_type_wins_over_size() {
        let policy = ValidationPolicy::default();
        for size in [0, 1, MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES + 1, u64::MAX] {
            for mime in ["application/pdf", "image/bmp", "", "text/plain", "image/svg+xml"] {
                assert_eq!(
                    evaluate(&attempt(mime, size), &policy),
                    ValidationResult::Rejected(RejectionReason::UnsupportedType),
                    "{mime} at {size} bytes"
                );
            }
        }
    }

    #[test]
    fn oversized_images_are_rejected() {
        let policy = ValidationPolicy::default();
        for mime in IMAGE_MIME_TYPES {
            for size in [MAX_UPLOAD_BYTES + 1, 12 * 1024 * 1024, u64::MAX] {
                assert_eq!(
                    evaluate(&attempt(mime, size), &policy),
                    ValidationResult::Rejected(RejectionReason::FileTooLarge)
                );
            }
        }
    }

    #[test]
    fn images_within_limit_are_accepted() {
        let policy = ValidationPolicy::default();
        for mime in IMAGE_MIME_TYPES {
            for size in [0, 1, 2 * 1024 * 1024, MAX_UPLOAD_BYTES - 1, MAX_UPLOAD_BYTES] {
                assert!(evaluate(&attempt(mime, size), &policy).is_accepted());
            }
        }
    }

    #[test]
    fn check_and_evaluate_agree() {
        let policy = ValidationPolicy::default();
        let rejected = attempt("image/png", MAX_UPLOAD_BYTES + 1);
        assert_eq!(policy.check(&rejected), Err(RejectionReason::FileTooLarge));
        assert_eq!(
            evaluate(&rejected, &policy).reason(),
            Some(RejectionReason::FileTooLarge)
        );
        assert_eq!(evaluate(&attempt("image/gif", 10), &policy).reason(), None);
    }

    #[test]
    fn custom_policy_narrows_allowed_types() {
        let policy = ValidationPolicy::new(["image/png"], 100);
        assert_eq!(
            evaluate(&attempt("image/jpeg", 10), &policy),
            ValidationResult::Rejected(RejectionReason::UnsupportedType)
        );
        assert_eq!(
            evaluate(&attempt("image/png", 101), &policy),
            ValidationResult::Rejected(RejectionReason::FileTooLarge)
        );
    }

    #[test]
    fn image_predicate_is_stable() {
        for mime in ["image/jpeg", "image/webp", "image/tiff", "", "IMAGE/JPEG"] {
            assert_eq!(is_image_mime_type(mime), is_image_mime_type(mime));
        }
        assert!(is_image_mime_type("image/webp"));
        assert!(!is_image_mime_type("image/tiff"));
        assert!(is_valid_image(&SelectedFile::new("a.gif", "image/gif", 1)));
        assert!(!is_valid_image(&SelectedFile::new("a.txt", "text/plain", 1)));
    }

    #[test]
    fn reasons_have_distinct_keys() {
        let keys = [
            RejectionReason::NoFileSelected.i18n_key(),
            RejectionReason::UnsupportedType.i18n_key(),
            RejectionReason::FileTooLarge.i18n_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }
}
