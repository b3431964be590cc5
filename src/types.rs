//! Core types for the synthetic request environment.

/// Key-value pair type for sub-environment stores (faster than HashMap for
/// small collections).
pub type ParamList = Vec<(String, String)>;

// =============================================================================
// Staging error
// =============================================================================

/// Outcome of staging a source file as a simulated upload.
///
/// Failures are carried inside the [`UploadDescriptor`], never thrown: the
/// import handler branches on the numeric code using its own upload-error
/// vocabulary, exactly as it would for a real multipart submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingError {
    /// Staging succeeded.
    Ok,
    /// No temporary file could be allocated.
    NoTempFile,
    /// The source file could not be read.
    UnreadableSource,
    /// The staged copy could not be written.
    WriteFailure,
}

impl StagingError {
    /// Numeric code in the handler's native upload-error vocabulary.
    #[inline]
    pub fn code(&self) -> u8 {
        match self {
            StagingError::Ok => 0,
            StagingError::UnreadableSource => 4,
            StagingError::NoTempFile => 6,
            StagingError::WriteFailure => 7,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, StagingError::Ok)
    }
}

impl std::fmt::Display for StagingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StagingError::Ok => write!(f, "ok"),
            StagingError::NoTempFile => write!(f, "missing a temporary folder"),
            StagingError::UnreadableSource => write!(f, "no file was uploaded"),
            StagingError::WriteFailure => write!(f, "failed to write file to disk"),
        }
    }
}

// =============================================================================
// Upload descriptor
// =============================================================================

/// Represents one simulated file upload, shaped like an entry a real
/// multipart form submission would produce.
///
/// The staged file at `tmp_name` is exclusively owned by this descriptor and
/// is not explicitly removed; stale copies are left to OS temp cleanup.
#[derive(Debug, Clone)]
pub struct UploadDescriptor {
    /// Original filename (basename of the source path).
    pub name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// Staged-file path; empty when staging failed.
    pub tmp_name: String,
    /// Byte size of the staged copy; absent when staging failed.
    pub size: Option<u64>,
    /// Staging outcome.
    pub error: StagingError,
}

impl UploadDescriptor {
    /// Descriptor for a failed staging attempt. The staged path is left
    /// empty so the handler branches on the error code alone.
    pub fn failed(name: String, mime_type: String, error: StagingError) -> Self {
        Self {
            name,
            mime_type,
            tmp_name: String::new(),
            size: None,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_error_codes() {
        assert_eq!(StagingError::Ok.code(), 0);
        assert_eq!(StagingError::UnreadableSource.code(), 4);
        assert_eq!(StagingError::NoTempFile.code(), 6);
        assert_eq!(StagingError::WriteFailure.code(), 7);
    }

    #[test]
    fn test_staging_error_is_ok() {
        assert!(StagingError::Ok.is_ok());
        assert!(!StagingError::NoTempFile.is_ok());
        assert!(!StagingError::UnreadableSource.is_ok());
        assert!(!StagingError::WriteFailure.is_ok());
    }

    #[test]
    fn test_failed_descriptor_has_no_staged_path() {
        let desc = UploadDescriptor::failed(
            "members.csv".to_string(),
            "text/csv".to_string(),
            StagingError::UnreadableSource,
        );

        assert!(desc.tmp_name.is_empty());
        assert_eq!(desc.size, None);
        assert_eq!(desc.error, StagingError::UnreadableSource);
    }
}
