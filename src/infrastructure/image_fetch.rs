// SPDX-License-Identifier: MPL-2.0
//! Remote project image downloads.

use crate::error::{Error, Result};
use futures_util::StreamExt;

/// Images larger than this are refused to keep memory bounded.
pub const MAX_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

/// Downloads the image at `url` and returns its encoded bytes.
///
/// Decoding is left to the image widget; a payload that fails to decode shows
/// up as a broken image, not as an error here.
pub async fn fetch_image(url: String) -> Result<Vec<u8>> {
    fetch_image_with_limit(url, MAX_IMAGE_BYTES).await
}

/// Like [`fetch_image`], refusing bodies longer than `limit` bytes.
///
/// The body is streamed and counted, so a response without a
/// `Content-Length` is cut off as soon as it passes the limit.
pub async fn fetch_image_with_limit(url: String, limit: u64) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    if let Some(length) = response.content_length() {
        if length > limit {
            return Err(too_large(length, limit));
        }
    }

    let mut bytes = Vec::new();
    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        downloaded += chunk.len() as u64;
        if downloaded > limit {
            return Err(too_large(downloaded, limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    tracing::debug!(%url, size = downloaded, "project image downloaded");
    Ok(bytes)
}

fn too_large(size: u64, limit: u64) -> Error {
    Error::Http(format!("image too large ({size} bytes, limit {limit})"))
}
