//! Upload simulation.
//!
//! Stages a local source file as a temporary copy and produces an
//! [`UploadDescriptor`] with the same shape a real multipart upload would
//! have, including its failure states. Failures never surface as `Err`:
//! the handler consuming the descriptor branches on the error code, not on
//! the existence of the staged path.
//!
//! Resource lifetime: staged copies (including ones orphaned by a failed
//! read or write) are not removed here; they are left to OS temp cleanup.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::config::StagingConfig;
use crate::types::{StagingError, UploadDescriptor};

/// Stage `source` as a simulated upload with the given declared MIME type.
///
/// Single attempt per invocation; every failure is terminal and lands in
/// the descriptor's error field.
pub async fn stage(source: &Path, declared_type: &str, config: &StagingConfig) -> UploadDescriptor {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = declared_type.to_string();

    // Uniquely named temp file in the designated directory, falling back
    // to the system temp directory.
    let tmp_name = config
        .staging_dir()
        .join(format!("php{}", Uuid::new_v4().simple()))
        .to_string_lossy()
        .into_owned();

    let mut staged = match File::create(&tmp_name).await {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(source = %source.display(), error = %e, "stage: temp allocation failed");
            return UploadDescriptor::failed(name, mime_type, StagingError::NoTempFile);
        }
    };

    let data = match tokio::fs::read(source).await {
        Ok(data) => data,
        Err(e) => {
            // The allocated temp file stays behind.
            tracing::debug!(source = %source.display(), error = %e, "stage: source unreadable");
            return UploadDescriptor::failed(name, mime_type, StagingError::UnreadableSource);
        }
    };

    if let Err(e) = staged.write_all(&data).await {
        tracing::debug!(tmp_name = %tmp_name, error = %e, "stage: write failed");
        return UploadDescriptor::failed(name, mime_type, StagingError::WriteFailure);
    }
    if let Err(e) = staged.flush().await {
        tracing::debug!(tmp_name = %tmp_name, error = %e, "stage: write failed");
        return UploadDescriptor::failed(name, mime_type, StagingError::WriteFailure);
    }

    let size = match tokio::fs::metadata(&tmp_name).await {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::debug!(tmp_name = %tmp_name, error = %e, "stage: staged copy unreadable");
            return UploadDescriptor::failed(name, mime_type, StagingError::WriteFailure);
        }
    };

    tracing::debug!(
        name = %name,
        tmp_name = %tmp_name,
        size = size,
        "stage: staged upload"
    );

    UploadDescriptor {
        name,
        mime_type,
        tmp_name,
        size: Some(size),
        error: StagingError::Ok,
    }
}
