//! Opaque session tokens.

use crate::types::Timestamp;

/// Generate a session token from `n_bytes` random bytes, hex encoded.
pub fn new_token(n_bytes: usize) -> String {
    crate::password::random_hex(n_bytes)
}

/// Whether a token issued at `issued_at` is still valid at `now`.
///
/// A token is live while strictly less than `lifetime` has elapsed; at the
/// boundary it is already expired.
pub fn session_alive(issued_at: Timestamp, now: Timestamp, lifetime: chrono::Duration) -> bool {
    now - issued_at < lifetime
}
