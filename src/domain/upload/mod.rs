// SPDX-License-Identifier: MPL-2.0
//! Upload domain types.
//!
//! An [`UploadAttempt`] is built when the upload form is submitted, checked
//! once against a [`ValidationPolicy`] by the guard and then dropped. Nothing
//! here survives between two submissions.

pub mod guard;
pub mod policy;

pub use guard::{evaluate, is_image_mime_type, is_valid_image, RejectionReason, ValidationResult};
pub use policy::{ValidationPolicy, IMAGE_MIME_TYPES, MAX_UPLOAD_BYTES};

/// A file picked in the upload input, as the host environment reports it.
///
/// The MIME type is the declared one (derived by the host from the file
/// name), not sniffed from the content. Unknown types are reported as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    mime_type: String,
    size_bytes: u64,
}

impl SelectedFile {
    /// Creates a selected file description.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Returns the file name shown in the input label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// The contents of the upload form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadAttempt {
    file: Option<SelectedFile>,
}

impl UploadAttempt {
    /// Creates an attempt from the input's current selection.
    #[must_use]
    pub fn new(file: Option<SelectedFile>) -> Self {
        Self { file }
    }

    /// Creates an attempt where no file was selected.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an attempt carrying `file`.
    #[must_use]
    pub fn with_file(file: SelectedFile) -> Self {
        Self { file: Some(file) }
    }

    #[must_use]
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        self.file.as_ref().map(SelectedFile::mime_type)
    }

    #[must_use]
    pub fn size_bytes(&self) -> Option<u64> {
        self.file.as_ref().map(SelectedFile::size_bytes)
    }

    /// Consumes the attempt and returns the selected file, if any.
    #[must_use]
    pub fn into_file(self) -> Option<SelectedFile> {
        self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attempt_has_no_derived_attributes() {
        let attempt = UploadAttempt::empty();
        assert!(attempt.file().is_none());
        assert_eq!(attempt.mime_type(), None);
        assert_eq!(attempt.size_bytes(), None);
    }

    #[test]
    fn attempt_derives_type_and_size_from_file() {
        let attempt = UploadAttempt::with_file(SelectedFile::new("carrot.png", "image/png", 2048));
        assert_eq!(attempt.mime_type(), Some("image/png"));
        assert_eq!(attempt.size_bytes(), Some(2048));
        assert_eq!(attempt.into_file().map(|f| f.name().to_string()), Some("carrot.png".into()));
    }
}
