//! Bech32 and Bech32m (BIP173 / BIP350).
//!
//! A human-readable part, a separator `1`, and a data part in a
//! 32-character alphabet, protected by a BCH checksum that guarantees
//! detection of any error affecting at most 4 characters. Bech32m
//! differs only in the constant folded into the checksum; the variant
//! is recovered during decoding.

use crate::error::{Error, Result};

/// The data-part alphabet. The ordering is fixed by BIP173 and is not
/// alphabetical.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Generator coefficients of the BCH checksum polynomial.
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

const MAX_LENGTH: usize = 90;

/// Checksum flavor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Original BIP173 checksum, used by segwit v0 addresses.
    Bech32,
    /// BIP350 checksum, used by segwit v1+ addresses.
    Bech32m,
}

impl Variant {
    fn checksum_const(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc830a3,
        }
    }
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;

    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ value as u32;

        for (i, &g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }

    chk
}

/// Expands the HRP for checksumming: high bits of each character, a
/// zero separator, then the low bits.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hrp.len() * 2 + 1);
    out.extend(hrp.bytes().map(|b| b >> 5));
    out.push(0);
    out.extend(hrp.bytes().map(|b| b & 0x1f));

    out
}

fn create_checksum(hrp: &str, data: &[u8], variant: Variant) -> [u8; 6] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; 6]);

    let polymod = polymod(&values) ^ variant.checksum_const();

    let mut out = [0u8; 6];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = ((polymod >> (5 * (5 - i))) & 0x1f) as u8;
    }

    out
}

/// Encodes 5-bit groups under the given HRP.
///
/// The HRP must be non-empty lowercase ASCII in the printable range;
/// the output must fit the 90-character limit.
pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String> {
    if hrp.is_empty() {
        return Err(Error::InvalidEncoding("empty human-readable part"));
    }
    if !hrp
        .bytes()
        .all(|b| (33..=126).contains(&b) && !b.is_ascii_uppercase())
    {
        return Err(Error::InvalidEncoding("invalid human-readable part"));
    }
    if data.iter().any(|&d| d >= 32) {
        return Err(Error::InvalidEncoding("data value exceeds 5 bits"));
    }
    if hrp.len() + 1 + data.len() + 6 > MAX_LENGTH {
        return Err(Error::InvalidEncoding("encoded string too long"));
    }

    let checksum = create_checksum(hrp, data, variant);

    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    out.push_str(hrp);
    out.push('1');
    for &value in data.iter().chain(&checksum) {
        out.push(CHARSET[value as usize] as char);
    }

    Ok(out)
}

/// Decodes a Bech32/Bech32m string into its HRP, 5-bit data groups
/// (checksum stripped), and the variant that validated.
///
/// Mixed-case strings are rejected outright; decoding is otherwise
/// case-insensitive and the HRP is returned lowercased.
pub fn decode(input: &str) -> Result<(String, Vec<u8>, Variant)> {
    if input.len() > MAX_LENGTH {
        return Err(Error::InvalidEncoding("encoded string too long"));
    }

    let has_lower = input.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = input.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Error::InvalidEncoding("mixed-case string"));
    }

    let lowered = input.to_ascii_lowercase();

    let separator = lowered
        .rfind('1')
        .ok_or(Error::InvalidEncoding("missing separator"))?;
    if separator == 0 {
        return Err(Error::InvalidEncoding("empty human-readable part"));
    }
    if lowered.len() < separator + 1 + 6 {
        return Err(Error::InvalidEncoding("data part too short"));
    }

    let hrp = &lowered[..separator];
    if !hrp.bytes().all(|b| (33..=126).contains(&b)) {
        return Err(Error::InvalidEncoding("invalid human-readable part"));
    }

    let mut data = Vec::with_capacity(lowered.len() - separator - 1);
    for c in lowered[separator + 1..].chars() {
        let value = CHARSET
            .iter()
            .position(|&a| a as char == c)
            .ok_or(Error::InvalidCharacter(c))?;
        data.push(value as u8);
    }

    let mut values = hrp_expand(hrp);
    values.extend_from_slice(&data);

    let variant = match polymod(&values) {
        1 => Variant::Bech32,
        0x2bc830a3 => Variant::Bech32m,
        _ => return Err(Error::Checksum),
    };

    data.truncate(data.len() - 6);
    Ok((hrp.to_string(), data, variant))
}

/// Regroups bits between arbitrary widths (8→5 for encoding witness
/// programs, 5→8 for decoding them).
///
/// With `pad` set, a final partial group is zero-padded; without it, a
/// partial group or non-zero padding is an error, as BIP173 requires
/// when decoding.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max: u32 = (1 << to) - 1;

    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);

    for &value in data {
        if u32::from(value) >> from != 0 {
            return Err(Error::InvalidEncoding("input value out of range"));
        }

        acc = (acc << from) | u32::from(value);
        bits += from;

        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max) != 0 {
        return Err(Error::InvalidEncoding("invalid padding"));
    }

    Ok(out)
}
