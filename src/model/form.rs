//! Form encoding for the form request primitive
//!
//! [`Bookstack::form`](crate::model::http::Bookstack::form) does not know how
//! a body is laid out. It asks a [`Form`] for the content type and the bytes,
//! which keeps uploads (book covers, attachments) pluggable.

use crate::error::AppError;
use std::path::Path;

/// Encoded form body together with the content type announcing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBody {
    /// Value sent in the `Content-Type` header
    pub content_type: String,
    /// Raw request body
    pub body: Vec<u8>,
}

/// Capability of turning a value into a request body
pub trait Form {
    /// Encodes the value, returning the content type and the body
    fn form(&self) -> Result<FormBody, AppError>;
}

impl Form for FormBody {
    fn form(&self) -> Result<FormBody, AppError> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        data: Vec<u8>,
    },
}

/// `multipart/form-data` encoder
///
/// # Example
///
/// ```
/// use bookstack_client::model::form::{Form, MultipartForm};
///
/// let form = MultipartForm::new()
///     .text("name", "Handbook")
///     .file("image", "cover.png", "image/png", vec![0x89, 0x50]);
/// let body = form.form().unwrap();
/// assert!(body.content_type.starts_with("multipart/form-data; boundary="));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    /// Creates an empty form with a random boundary
    #[must_use]
    pub fn new() -> Self {
        let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect();
        Self::with_boundary(format!("bookstack{}", nanoid::nanoid!(24, &alphabet)))
    }

    /// Creates an empty form using the given boundary
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    /// Boundary separating the parts
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Number of parts added so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True when no part has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Adds a text field
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a file field from memory
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        self.parts.push(Part::File {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        });
        self
    }

    /// Adds a file field read from disk
    ///
    /// The content type is guessed from the extension and falls back to
    /// `application/octet-stream`.
    pub async fn file_from_path(
        self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, AppError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        let content_type = content_type_for(path);
        Ok(self.file(name, filename, content_type, data))
    }

    fn encode(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            match part {
                Part::Text { name, value } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                            escape_quoted(name)
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    filename,
                    content_type,
                    data,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                            escape_quoted(name),
                            escape_quoted(filename)
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
                    body.extend_from_slice(data);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        body
    }
}

impl Form for MultipartForm {
    fn form(&self) -> Result<FormBody, AppError> {
        if self.parts.is_empty() {
            return Err(AppError::Form("multipart form has no parts".to_string()));
        }
        if self.boundary.is_empty() || self.boundary.len() > 70 {
            return Err(AppError::Form(format!(
                "invalid multipart boundary length: {}",
                self.boundary.len()
            )));
        }
        Ok(FormBody {
            content_type: format!("multipart/form-data; boundary={}", self.boundary),
            body: self.encode(),
        })
    }
}

fn escape_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(['\r', '\n'], " ")
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("txt" | "md") => "text/plain",
        Some("html" | "htm") => "text/html",
        _ => "application/octet-stream",
    }
}
