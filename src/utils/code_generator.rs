//! Short code generation.
//!
//! Codes are drawn from OS entropy to avoid accidental collisions; they are
//! not guaranteed unique. The storage layer's UNIQUE constraint is the
//! authority, and the shorten path regenerates on conflict.

use crate::error::AppError;
use serde_json::json;

/// Alphabet used for generated codes.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric code of exactly `length` characters.
///
/// The slight modulo bias when mapping bytes onto the 62-character alphabet
/// is acceptable: codes need to be collision-resistant, not cryptographic.
///
/// # Errors
///
/// Returns [`AppError::Unavailable`] if the system random source fails.
pub fn generate_code(length: usize) -> Result<String, AppError> {
    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::unavailable(
            "Random source unavailable",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(buffer
        .iter()
        .map(|&b| ALPHABET[b as usize % ALPHABET.len()] as char)
        .collect())
}
