//! Derivation-path parsing.

use crate::derivation::HARDENED;
use crate::error::{Error, Result};

/// Parses a derivation path such as `m/44'/0'/0'/0/7` into child
/// indices.
///
/// The path must start at the root (`m` or `M`); each segment is a
/// decimal index below 2³¹, optionally suffixed with `'`, `h`, or `H`
/// to mark it hardened. `m` alone denotes the root itself and yields
/// no indices.
pub fn parse_path(path: &str) -> Result<Vec<u32>> {
    let mut segments = path.split('/');

    match segments.next() {
        Some("m") | Some("M") => {}
        _ => return Err(Error::InvalidEncoding("derivation path must start with m/")),
    }

    segments
        .map(|segment| {
            let (digits, hardened) = match segment.strip_suffix(['\'', 'h', 'H']) {
                Some(digits) => (digits, true),
                None => (segment, false),
            };

            let index: u32 = digits
                .parse()
                .map_err(|_| Error::InvalidEncoding("invalid path segment"))?;

            if index >= HARDENED {
                return Err(Error::InvalidEncoding("child index out of range"));
            }

            Ok(if hardened { index + HARDENED } else { index })
        })
        .collect()
}
