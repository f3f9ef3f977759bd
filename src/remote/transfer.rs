//! Multipart upload and blob download helpers.

use super::error::DownloadError;
use super::transport::RawResponse;

const FILENAME_TOKEN: &str = "filename=";

/// A downloaded resource body with the name the server gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Everything after the first `filename=` in a `content-disposition` value.
///
/// Quotes and any parameters that follow the filename are kept as-is; the backend
/// always sends `attachment; filename=<name>` with the name last.
pub fn filename_from_content_disposition(value: &str) -> Option<&str> {
    value
        .find(FILENAME_TOKEN)
        .map(|idx| &value[idx + FILENAME_TOKEN.len()..])
}

pub(super) fn download_from_response(resp: RawResponse) -> Result<Download, DownloadError> {
    let disposition = resp
        .header("content-disposition")
        .ok_or(DownloadError::MissingHeader)?;
    let filename = filename_from_content_disposition(disposition)
        .ok_or_else(|| DownloadError::MissingFilename(disposition.to_string()))?
        .to_string();
    Ok(Download {
        filename,
        bytes: resp.body,
    })
}

pub(super) fn upload_form(
    field: &'static str,
    filename: &str,
    bytes: Vec<u8>,
) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
    reqwest::multipart::Form::new().part(field, part)
}

/// Turns a server-supplied filename into something safe to create in the current
/// directory: surrounding quotes, trailing parameters and any directory parts are dropped.
pub fn sanitize_download_filename(raw: &str) -> String {
    let raw = raw.split(';').next().unwrap_or("").trim().trim_matches('"');
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim();
    if name.is_empty() || name == "." || name == ".." {
        "download".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
#[path = "../tests/remote/transfer_tests.rs"]
mod tests;
