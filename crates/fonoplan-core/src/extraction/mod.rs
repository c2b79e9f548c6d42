pub mod content_stream;

use serde::{Deserialize, Serialize};

use crate::error::FonoplanError;
use crate::model::UploadedReference;

/// Maximum accepted size for one uploaded reference document (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";

/// Best-effort text recovered from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub text: String,
    /// False when `text` is a placeholder rather than recovered content.
    pub succeeded: bool,
}

/// Trait for document text-extraction backends.
///
/// Extraction never fails: unreadable input degrades to a placeholder
/// message with `succeeded` set to false.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Extraction;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// One file as handed over by the file-selection surface, before validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub source_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Reject non-PDF or oversized files before extraction is attempted.
pub fn validate_upload(
    source_name: &str,
    mime_type: &str,
    size_bytes: u64,
) -> Result<(), FonoplanError> {
    if mime_type != PDF_MIME {
        return Err(FonoplanError::InvalidUpload {
            reason: format!("{source_name}: only PDF files are accepted (got {mime_type})"),
        });
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(FonoplanError::InvalidUpload {
            reason: format!("{source_name}: file exceeds the 50 MB limit"),
        });
    }
    Ok(())
}

/// Validate and extract a batch of uploaded files, strictly in input order.
///
/// The whole batch is rejected if any file fails validation (mirroring the
/// upload surface, which accepts all files or none). Extraction itself
/// cannot fail; a file with no recoverable text yields a placeholder
/// reference rather than aborting the batch.
pub fn ingest_references(
    files: &[UploadedFile],
    extractor: &dyn TextExtractor,
) -> Result<Vec<UploadedReference>, FonoplanError> {
    for file in files {
        validate_upload(&file.source_name, &file.mime_type, file.bytes.len() as u64)?;
    }

    let mut references = Vec::with_capacity(files.len());
    for file in files {
        let extraction = extractor.extract(&file.bytes);
        references.push(UploadedReference {
            source_name: file.source_name.clone(),
            extracted_text: extraction.text,
            extraction_succeeded: extraction.succeeded,
        });
    }
    Ok(references)
}
