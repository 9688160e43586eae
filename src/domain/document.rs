use std::path::{Path, PathBuf};

/// An uploaded file waiting to be turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub path: PathBuf,
    pub mime: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Pdf,
    Unstructured,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "text/plain" => Some(Self::Text),
            "application/pdf" => Some(Self::Pdf),
            "text/markdown" | "text/x-markdown" | "text/html" | "application/xhtml+xml"
            | "text/csv" | "application/json" | "application/xml" | "text/xml"
            | "application/rtf" | "text/rtf" => Some(Self::Unstructured),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Unstructured => "unstructured",
        }
    }
}

impl RawDocument {
    /// Builds a document whose MIME type is guessed from the file extension.
    /// Files with no recognizable extension get `application/octet-stream`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mime = mime_guess::from_path(&path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        Self { path, mime }
    }

    pub fn with_mime(path: impl Into<PathBuf>, mime: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mime: mime.into(),
        }
    }

    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_mime(&self.mime)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
