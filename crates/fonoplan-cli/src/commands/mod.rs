pub mod extract;
pub mod generate;
pub mod prompt;

use std::path::{Path, PathBuf};

use fonoplan_core::error::FonoplanError;
use fonoplan_core::extraction::content_stream::ContentStreamExtractor;
use fonoplan_core::extraction::{ingest_references, UploadedFile, PDF_MIME};
use fonoplan_core::model::SessionRequest;

/// Load a session request from JSON and attach the extracted reference
/// documents in the order they were given on the command line.
pub(crate) fn load_request(
    session_file: &Path,
    refs: &[PathBuf],
) -> Result<SessionRequest, FonoplanError> {
    let json_bytes = std::fs::read(session_file)?;
    let mut request: SessionRequest = serde_json::from_slice(&json_bytes)?;

    let mut files = Vec::with_capacity(refs.len());
    for path in refs {
        let bytes = std::fs::read(path)?;
        files.push(UploadedFile {
            source_name: file_name(path),
            mime_type: mime_from_extension(path),
            bytes,
        });
    }

    let mut references = ingest_references(&files, &ContentStreamExtractor::new())?;
    request.references.append(&mut references);
    Ok(request)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn mime_from_extension(path: &Path) -> String {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        PDF_MIME.to_string()
    } else {
        "application/octet-stream".to_string()
    }
}
