//! Pre-submit validation. Runs before any network traffic; the first
//! failing check wins and nothing else is evaluated.

use thiserror::Error;

use crate::submission::request::SubmissionRequest;

/// Hard cap on resume size: 16 binary megabytes, the same figure the
/// service enforces as its request limit.
pub const MAX_RESUME_BYTES: u64 = 16 * 1024 * 1024;

/// Formats the service can extract text from.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf", "docx"];

/// Validation failures. `Display` is the exact inline message shown next to
/// the form control that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a resume file.")]
    MissingFile,

    #[error("Please enter a job description.")]
    MissingDescription,

    #[error("File size must be less than 16MB.")]
    FileTooLarge,

    #[error("Invalid file format. Please upload PDF, DOCX, or TXT files.")]
    UnsupportedFormat,
}

/// Checks a submission in order: file selected, description non-empty after
/// trimming, size within the cap, extension supported.
pub fn validate(request: &SubmissionRequest) -> Result<(), ValidationError> {
    let resume = request.resume.as_ref().ok_or(ValidationError::MissingFile)?;

    if request.job_description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    if resume.size_bytes() > MAX_RESUME_BYTES {
        return Err(ValidationError::FileTooLarge);
    }

    match resume.extension() {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(ValidationError::UnsupportedFormat),
    }
}
