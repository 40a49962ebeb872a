//! Logo validation and storage
//!
//! Logos arrive base64 encoded (optionally as a `data:` URL). A logo is
//! accepted when its extension is supported, it fits in [`MAX_FILE_SIZE`],
//! and the `image` crate detects a matching format and can decode it.
//! Accepted logos are stored under their content hash.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use shared::install::LogoUpload;
use thiserror::Error;

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogoError {
    #[error("Logo content is not valid base64")]
    InvalidEncoding,

    #[error("Logo file is empty")]
    Empty,

    #[error("Logo too large. Maximum size is 5MB")]
    TooLarge,

    #[error("Unsupported logo format '{0}'. Supported: png, jpg, jpeg, webp, gif")]
    UnsupportedFormat(String),

    #[error("Invalid image file: {0}")]
    InvalidImage(String),

    #[error("Logo content is {detected}, which does not match its '.{ext}' extension")]
    ExtensionMismatch { ext: String, detected: String },
}

/// A decoded logo that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedLogo {
    pub data: Vec<u8>,
    /// Lower-cased extension
    pub ext: String,
    /// SHA256 of the content, hex encoded
    pub hash: String,
}

impl ValidatedLogo {
    /// Content-addressed file name: `<sha256>.<ext>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.hash, self.ext)
    }
}

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Strip an optional `data:<mime>;base64,` prefix
fn strip_data_url(content: &str) -> &str {
    match content.split_once(";base64,") {
        Some((prefix, payload)) if prefix.starts_with("data:") => payload,
        _ => content,
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Decode and validate an uploaded logo
pub fn validate_logo(logo: &LogoUpload) -> Result<ValidatedLogo, LogoError> {
    let ext = extension_of(&logo.name).unwrap_or_default();
    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(LogoError::UnsupportedFormat(ext));
    }

    let data = STANDARD
        .decode(strip_data_url(logo.content.trim()))
        .map_err(|_| LogoError::InvalidEncoding)?;

    if data.is_empty() {
        return Err(LogoError::Empty);
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(LogoError::TooLarge);
    }

    // Stored under the uploaded extension
    let format = image::guess_format(&data).map_err(|e| LogoError::InvalidImage(e.to_string()))?;
    if !format.extensions_str().contains(&ext.as_str()) {
        return Err(LogoError::ExtensionMismatch {
            ext,
            detected: format!("{format:?}").to_lowercase(),
        });
    }
    image::load_from_memory_with_format(&data, format)
        .map_err(|e| LogoError::InvalidImage(e.to_string()))?;

    let hash = calculate_hash(&data);
    Ok(ValidatedLogo { data, ext, hash })
}

/// Write the logo into `dir`, returning the stored file name
///
/// Identical content maps to the same file, which is only written once.
pub fn store_logo(dir: &Path, logo: &ValidatedLogo) -> std::io::Result<String> {
    fs::create_dir_all(dir)?;
    let file_name = logo.file_name();
    let path: PathBuf = dir.join(&file_name);
    if !path.exists() {
        fs::write(&path, &logo.data)?;
    }
    Ok(file_name)
}
