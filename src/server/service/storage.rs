//! Local filesystem storage for uploads and generated documents.
//!
//! Files are written beneath three directories which the router serves statically:
//! uploaded images under `/uploads`, profile reports under `/reports` and payment
//! invoices under `/invoices`. Stored references are these public paths.

use std::path::{Path, PathBuf};

use crate::server::{error::AppError, util::upload::UploadedFile};

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const UPLOADS_ROUTE: &str = "/uploads";
pub const REPORTS_ROUTE: &str = "/reports";
pub const INVOICES_ROUTE: &str = "/invoices";

/// Accepted image MIME types and the extension stored files receive.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/webp", "webp"),
];

#[derive(Clone, Debug)]
pub struct FileStorage {
    upload_dir: PathBuf,
    report_dir: PathBuf,
    invoice_dir: PathBuf,
}

impl FileStorage {
    pub fn new(upload_dir: PathBuf, report_dir: PathBuf, invoice_dir: PathBuf) -> Self {
        Self {
            upload_dir,
            report_dir,
            invoice_dir,
        }
    }

    /// Creates the storage directories if they do not exist yet.
    pub async fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.upload_dir, &self.report_dir, &self.invoice_dir] {
            tokio::fs::create_dir_all(dir).await?;
        }
        Ok(())
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    pub fn invoice_dir(&self) -> &Path {
        &self.invoice_dir
    }

    /// Stores an uploaded image under a generated name.
    ///
    /// # Arguments
    /// - `file` - Uploaded file part
    /// - `prefix` - Short label prepended to the generated name, e.g. `"land"`
    ///
    /// # Returns
    /// - `Ok(String)` - Public path of the stored file, e.g. `/uploads/land-<uuid>.png`
    /// - `Err(AppError::BadRequest)` - File too large or not a supported image type
    /// - `Err(AppError::IoErr)` - Failed to write the file
    pub async fn save_image(&self, file: UploadedFile, prefix: &str) -> Result<String, AppError> {
        if file.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(format!(
                "File exceeds the {} MiB upload limit",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        let content_type = file.content_type.as_deref().unwrap_or_default();
        let Some((_, extension)) = IMAGE_TYPES.iter().find(|(mime, _)| *mime == content_type)
        else {
            return Err(AppError::BadRequest(
                "Only PNG, JPEG and WebP images are accepted".to_string(),
            ));
        };

        let file_name = format!("{}-{}.{}", prefix, uuid::Uuid::new_v4(), extension);
        tokio::fs::write(self.upload_dir.join(&file_name), &file.bytes).await?;

        Ok(format!("{}/{}", UPLOADS_ROUTE, file_name))
    }

    /// Removes a previously stored upload given its public path.
    ///
    /// Missing files and paths outside `/uploads` are ignored; failures are logged.
    pub async fn remove_upload(&self, public_path: &str) {
        let Some(file_name) = file_name_under(public_path, UPLOADS_ROUTE) else {
            return;
        };

        if let Err(e) = tokio::fs::remove_file(self.upload_dir.join(file_name)).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove upload {}: {}", public_path, e);
            }
        }
    }

    /// Writes a rendered profile report and returns its public path.
    pub async fn save_report(&self, file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        tokio::fs::write(self.report_dir.join(file_name), bytes).await?;
        Ok(format!("{}/{}", REPORTS_ROUTE, file_name))
    }

    /// Writes a rendered invoice and returns its public path.
    pub async fn save_invoice(&self, file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        tokio::fs::write(self.invoice_dir.join(file_name), bytes).await?;
        Ok(format!("{}/{}", INVOICES_ROUTE, file_name))
    }

    /// Reads a stored invoice back given its public path.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - Invoice found
    /// - `Ok(None)` - Path is not an invoice path or the file no longer exists
    /// - `Err(AppError::IoErr)` - Any other read failure
    pub async fn read_invoice(&self, public_path: &str) -> Result<Option<Vec<u8>>, AppError> {
        let Some(file_name) = file_name_under(public_path, INVOICES_ROUTE) else {
            return Ok(None);
        };

        match tokio::fs::read(self.invoice_dir.join(file_name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Extracts the bare file name from `<route>/<name>`, rejecting traversal.
fn file_name_under<'a>(public_path: &'a str, route: &str) -> Option<&'a str> {
    let name = public_path.strip_prefix(route)?.strip_prefix('/')?;
    if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return None;
    }
    Some(name)
}
