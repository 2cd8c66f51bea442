//! Base58 and Base58Check.

use crate::error::{Error, Result};
use crate::hash::hash256;

/// The Bitcoin Base58 alphabet. Excludes `0`, `O`, `I`, and `l` to
/// avoid visually ambiguous characters.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encodes bytes as Base58. Each leading zero byte becomes a leading
/// `1`, preserving length information the base conversion would drop.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Base58 digits, least significant first.
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(ALPHABET[digit as usize] as char);
    }

    out
}

/// Decodes a Base58 string. Characters outside the alphabet produce
/// `Error::InvalidCharacter`.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let zeros = input.bytes().take_while(|&b| b == b'1').count();

    // Bytes, least significant first.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len() * 733 / 1000 + 1);
    for c in input[zeros..].chars() {
        let value = ALPHABET
            .iter()
            .position(|&a| a as char == c)
            .ok_or(Error::InvalidCharacter(c))?;

        let mut carry = value as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());

    Ok(out)
}

/// Encodes with a 4-byte double-SHA256 checksum appended.
pub fn encode_check(payload: &[u8]) -> String {
    let checksum = hash256(payload);

    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..4]);

    encode(&data)
}

/// Decodes and verifies the 4-byte checksum, returning the payload.
pub fn decode_check(input: &str) -> Result<Vec<u8>> {
    let mut data = decode(input)?;

    if data.len() < 4 {
        return Err(Error::Checksum);
    }

    let payload_len = data.len() - 4;
    let expected = hash256(&data[..payload_len]);
    if data[payload_len..] != expected[..4] {
        return Err(Error::Checksum);
    }

    data.truncate(payload_len);
    Ok(data)
}
