use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Read a log file into text.
///
/// Non-UTF-8 content is decoded as Latin-1 (each byte maps to the same
/// Unicode code point) instead of being rejected.
pub fn load_text(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(match String::from_utf8(content) {
        Ok(text) => text,
        Err(err) => {
            debug!("{} is not UTF-8, decoding as Latin-1", path.display());
            err.into_bytes().iter().map(|&b| b as char).collect()
        }
    })
}
