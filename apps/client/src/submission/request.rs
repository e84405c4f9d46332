use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

/// A resume file selected for submission: the user-visible file name plus
/// the raw bytes that will become the multipart `resume` part.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content: Bytes,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reads a resume from disk, keeping the on-disk file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read(path)
            .with_context(|| format!("Failed to read resume file '{}'", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("resume")
            .to_string();
        Ok(Self::new(file_name, content))
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }

    /// Lower-cased extension, if the file name has one.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

/// One form submission. Built fresh per submit, consumed by the controller,
/// and dropped once the request resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionRequest {
    /// `None` models "no file selected"; validation turns that into
    /// `MissingFile` before anything is sent.
    pub resume: Option<ResumeFile>,
    pub job_description: String,
}

impl SubmissionRequest {
    pub fn new(resume: Option<ResumeFile>, job_description: impl Into<String>) -> Self {
        Self {
            resume,
            job_description: job_description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercased() {
        let file = ResumeFile::new("Resume.PDF", Bytes::from_static(b"x"));
        assert_eq!(file.extension(), Some("pdf".to_string()));
    }

    #[test]
    fn test_extension_takes_last_segment() {
        let file = ResumeFile::new("cv.backup.docx", Bytes::from_static(b"x"));
        assert_eq!(file.extension(), Some("docx".to_string()));
    }

    #[test]
    fn test_no_extension() {
        let file = ResumeFile::new("resume", Bytes::from_static(b"x"));
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn test_size_bytes() {
        let file = ResumeFile::new("resume.txt", vec![0u8; 1024]);
        assert_eq!(file.size_bytes(), 1024);
    }
}
