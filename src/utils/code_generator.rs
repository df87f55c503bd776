//! Short code fingerprinting and collision perturbation.
//!
//! Codes are derived deterministically: the SHA-256 digest of the input is
//! rendered as lowercase hex and cut down to the configured length. When a
//! candidate is already taken, the input is perturbed by prepending the salt
//! and fingerprinted again.

use sha2::{Digest, Sha256};

/// Length of a full SHA-256 digest rendered as hex.
///
/// This is the longest code the fingerprint can produce.
pub const MAX_CODE_LENGTH: usize = 64;

/// Computes the candidate short code for `input`.
///
/// Hashes the exact UTF-8 bytes of `input` and keeps the first `length` hex
/// characters. Lengths above [`MAX_CODE_LENGTH`] yield the whole digest.
///
/// # Examples
///
/// ```
/// use slink::utils::code_generator::fingerprint;
///
/// assert_eq!(fingerprint("https://example.com", 6), "100680");
/// ```
pub fn fingerprint(input: &str, length: usize) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(length.min(MAX_CODE_LENGTH));
    code
}

/// Perturbs a colliding input by prepending the salt.
///
/// Pure function of `(salt, input)`; applying it `n` times prefixes the
/// salt `n` times.
pub fn salted(salt: &str, input: &str) -> String {
    let mut out = String::with_capacity(salt.len() + input.len());
    out.push_str(salt);
    out.push_str(input);
    out
}
