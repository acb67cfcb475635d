// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multipart form parsing and uploaded file storage.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Public URL prefix of stored uploads.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Upload failures.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The request body was not a readable multipart form.
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),
    /// The file could not be written.
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes uploaded files into one directory under unique names.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Stores one file and returns its public path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn store(
        &self,
        original_name: Option<&str>,
        contents: &[u8],
    ) -> Result<String, UploadError> {
        let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let name: String = stored_file_name(original_name, millis, rand::random::<u32>());

        tokio::fs::write(self.dir.join(&name), contents).await?;
        info!(file = %name, bytes = contents.len(), "Stored upload");

        Ok(format!("{UPLOADS_ROUTE}/{name}"))
    }
}

/// Builds `<millis>-<random>[.ext]` from the client's file name.
#[must_use]
pub fn stored_file_name(original_name: Option<&str>, millis: i128, random: u32) -> String {
    original_name.and_then(sanitized_extension).map_or_else(
        || format!("{millis}-{random}"),
        |ext| format!("{millis}-{random}.{ext}"),
    )
}

/// Lowercased extension with everything but ASCII alphanumerics removed.
fn sanitized_extension(original_name: &str) -> Option<String> {
    let ext: String = Path::new(original_name)
        .extension()
        .and_then(OsStr::to_str)?
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    (!ext.is_empty()).then_some(ext)
}

/// A parsed multipart form.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: HashMap<String, String>,
}

impl UploadForm {
    /// Reads every part of `multipart`.
    ///
    /// Parts named in `file_fields` are stored through `store`; empty file
    /// parts are skipped. All other parts are read as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is malformed or a file cannot be written.
    pub async fn read(
        mut multipart: Multipart,
        store: &UploadStore,
        file_fields: &[&str],
    ) -> Result<Self, UploadError> {
        let mut form: Self = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name: String = field.name().unwrap_or_default().to_string();

            if file_fields.contains(&name.as_str()) {
                let original_name: Option<String> = field.file_name().map(str::to_string);
                let contents = field.bytes().await?;
                if contents.is_empty() {
                    debug!(field = %name, "Skipping empty file part");
                    continue;
                }
                let path: String = store.store(original_name.as_deref(), &contents).await?;
                form.files.insert(name, path);
            } else {
                let value: String = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Takes a text field.
    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Takes the public path of a stored file.
    pub fn take_file(&mut self, name: &str) -> Option<String> {
        self.files.remove(name)
    }
}
