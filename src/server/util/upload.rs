//! Multipart form extraction.
//!
//! Collects every part of a `multipart/form-data` body into memory, separating plain
//! text fields from file parts. Size limits are enforced by the router's body limit
//! layer and by `FileStorage` when the file is persisted.

use std::collections::HashMap;

use axum::{body::Bytes, extract::Multipart};

use crate::server::error::AppError;

/// A file part received in a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name supplied by the client, if any.
    pub file_name: Option<String>,
    /// MIME type declared by the client.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// All parts of a multipart form, keyed by field name.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Reads the full multipart body.
    ///
    /// Parts with a file name are treated as files; all others as UTF-8 text. When a
    /// field name repeats, the last part wins.
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - All parts collected
    /// - `Err(AppError::MultipartErr)` - Body is malformed or exceeds the body limit
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                form.files.insert(
                    name,
                    UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    },
                );
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn required_text(&self, name: &str) -> Result<&str, AppError> {
        self.text(name)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
    }

    pub fn required_file(&mut self, name: &str) -> Result<UploadedFile, AppError> {
        self.files
            .remove(name)
            .filter(|file| !file.bytes.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("{} file is required", name)))
    }
}
