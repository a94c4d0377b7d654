//! PBKDF2-HMAC-SHA256 password hashing and verification.
//!
//! The salt is a random hex string and is stored next to the hash; the
//! derivation runs over the salt's text bytes so the stored value can be fed
//! back in unchanged when a login is checked.

use hmac::Hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Key-derivation parameters, normally built by
/// [`Settings::hash_params`](crate::settings::Settings::hash_params).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Derived key length in bytes (hex output is twice as long).
    pub key_len: usize,
    /// Random salt length in bytes (hex salt is twice as long).
    pub salt_len: usize,
    pub iterations: u32,
}

/// Salt and derived hash, both hex encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    pub salt: String,
    pub hash: String,
}

/// Hash `password`, generating a fresh salt when `salt` is `None`.
pub fn hash_password(password: &str, salt: Option<&str>, params: &HashParams) -> PasswordDigest {
    let salt = match salt {
        Some(salt) => salt.to_owned(),
        None => random_hex(params.salt_len),
    };

    let mut key = vec![0u8; params.key_len];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(
        password.as_bytes(),
        salt.as_bytes(),
        params.iterations,
        &mut key,
    );

    PasswordDigest {
        salt,
        hash: hex::encode(key),
    }
}

/// Recompute the hash of `password` with the stored salt and compare it to
/// `expected_hash` in constant time.
pub fn verify_password(
    password: &str,
    salt: &str,
    expected_hash: &str,
    params: &HashParams,
) -> bool {
    let digest = hash_password(password, Some(salt), params);
    constant_time_eq(digest.hash.as_bytes(), expected_hash.as_bytes())
}

/// `n` random bytes from the thread-local CSPRNG, hex encoded.
pub(crate) fn random_hex(n: usize) -> String {
    let mut bytes = vec![0u8; n];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Equality whose running time depends only on the input lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
