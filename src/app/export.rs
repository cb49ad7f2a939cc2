//! Delivery of the assembled document: preview temp file, browser launch,
//! standalone export and the base64 data link.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::error::{AppError, Result};

const PREVIEW_FILE_NAME: &str = "pagepress-preview.html";

/// Well-known preview path in the system temp directory. Rewritten on every
/// configuration or text change; a browser tab pointed at it shows the
/// latest assembly on reload.
pub fn preview_file_path() -> PathBuf {
    std::env::temp_dir().join(PREVIEW_FILE_NAME)
}

/// Write the assembled document for the browser to pick up.
pub fn write_preview_file(html: &str) -> Result<PathBuf> {
    let path = preview_file_path();
    fs::write(&path, html)?;
    Ok(path)
}

/// Remove the temp preview file if it exists.
pub fn cleanup_preview_file() {
    let _ = fs::remove_file(preview_file_path());
}

/// Launch the default browser on a previously written preview file.
pub fn open_in_browser(path: &Path) -> Result<()> {
    open::that(path).map_err(|e| AppError::Export(format!("browser launch failed: {}", e)))
}

/// Write the assembled document to a user-chosen path.
pub fn export_html(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    Ok(())
}

/// Encode the document as a `data:` link, the same format a browser download
/// of the preview would use.
pub fn data_uri(html: &str) -> String {
    format!("data:text/html;base64,{}", BASE64.encode(html.as_bytes()))
}
