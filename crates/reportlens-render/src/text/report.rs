// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report loading. Reports are UTF-8, but exports from the reporting system
// occasionally carry stray bytes; those are dropped rather than failing the
// case.

use std::path::Path;

use reportlens_core::error::Result;
use tracing::{debug, instrument, warn};

/// Read a report file, dropping malformed UTF-8 sequences.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_report(path: impl AsRef<Path>) -> Result<String> {
    let bytes = std::fs::read(path.as_ref())?;
    let text = decode_permissive(&bytes);
    if text.len() != bytes.len() {
        warn!(
            dropped = bytes.len() - text.len(),
            "Report contained malformed UTF-8; invalid bytes dropped"
        );
    }
    debug!(chars = text.chars().count(), "Report loaded");
    Ok(text)
}

/// Decode bytes as UTF-8, keeping every valid run and skipping invalid ones.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_untouched() {
        let text = "骨扫描：未见异常。\nOK";
        assert_eq!(decode_permissive(text.as_bytes()), text);
    }

    #[test]
    fn invalid_bytes_are_dropped_not_replaced() {
        let mut bytes = "前".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice("后".as_bytes());
        // Truncated three-byte sequence at the end.
        bytes.extend_from_slice(&"显".as_bytes()[..2]);

        assert_eq!(decode_permissive(&bytes), "前后");
    }

    #[test]
    fn read_report_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("P001.txt");
        let mut bytes = b"line one\n".to_vec();
        bytes.push(0x80);
        bytes.extend_from_slice(b"line two");
        std::fs::write(&path, bytes).unwrap();

        assert_eq!(read_report(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn missing_report_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_report(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, reportlens_core::ReportlensError::Io(_)));
    }
}
