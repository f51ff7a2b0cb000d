//! BDF header scanning
//!
//! Only the header of a BDF file is read: the scan stops at the first
//! `STARTCHAR` line, so glyph bitmaps are never parsed here. The font engine
//! reads the full file on its own.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Header fields the importer cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BdfHeader {
    /// `PIXEL_SIZE` property, `None` when absent or unparsable
    pub pixel_size: Option<u32>,
    pub copyright: Option<String>,
    pub notice: Option<String>,
    pub foundry: Option<String>,
}

impl BdfHeader {
    /// Pixel size with 0 standing for "unresolved"
    pub fn pixel_size_or_zero(&self) -> u32 {
        self.pixel_size.unwrap_or(0)
    }
}

/// Scan header lines until `STARTCHAR`
///
/// Invalid UTF-8 is replaced rather than treated as an error, since X11
/// fonts carry Latin-1 copyright strings.
pub fn read_header<R: Read>(reader: R) -> io::Result<BdfHeader> {
    let mut reader = BufReader::new(reader);
    let mut header = BdfHeader::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\r', '\n']);

        if line.starts_with("STARTCHAR") {
            break;
        }
        if let Some(rest) = line.strip_prefix("PIXEL_SIZE ") {
            if header.pixel_size.is_none() {
                header.pixel_size = rest
                    .split_whitespace()
                    .next()
                    .and_then(|value| value.parse::<u32>().ok())
                    .filter(|px| *px > 0);
            }
        } else if let Some(rest) = line.strip_prefix("COPYRIGHT ") {
            header.copyright = property_string(rest);
        } else if let Some(rest) = line.strip_prefix("NOTICE ") {
            header.notice = property_string(rest);
        } else if let Some(rest) = line.strip_prefix("FOUNDRY ") {
            header.foundry = property_string(rest);
        }
    }

    Ok(header)
}

/// Read the header of a BDF file on disk
pub fn read_header_from_path(path: &Path) -> io::Result<BdfHeader> {
    read_header(File::open(path)?)
}

/// Nominal pixel size of a BDF file, 0 when it cannot be determined
///
/// A missing or unreadable file is reported as unresolved; callers decide
/// whether to fall back or drop the resource.
pub fn pixel_size(path: &Path) -> u32 {
    match read_header_from_path(path) {
        Ok(header) => header.pixel_size_or_zero(),
        Err(e) => {
            tracing::debug!("Could not read BDF header {}: {}", path.display(), e);
            0
        }
    }
}

fn property_string(raw: &str) -> Option<String> {
    let value = raw.trim().trim_matches('"').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
