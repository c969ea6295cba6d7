//! Input acquisition: local files and HTTP sources.
//!
//! Both paths return the raw catalog bytes. Payloads that start with the
//! gzip magic are decompressed transparently, so `.dat.gz` sources work
//! the same as plain `.dat` files.

use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use crate::{Error, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read a catalog from a local path.
pub fn from_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    decompress_if_gzip(data)
}

/// Fetch a catalog from an HTTP(S) URL.
///
/// Any non-success status aborts the run before decoding begins.
pub fn from_url(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    log::debug!("fetching catalog from {}", url);
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    let data = response.bytes()?.to_vec();
    decompress_if_gzip(data)
}

fn decompress_if_gzip(data: Vec<u8>) -> Result<Vec<u8>> {
    if data.len() < 2 || data[..2] != GZIP_MAGIC {
        return Ok(data);
    }

    let mut decoder = GzDecoder::new(data.as_slice());
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
