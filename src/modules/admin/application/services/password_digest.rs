use sha2::{Digest, Sha256};

pub type PasswordDigest = [u8; 32];

/// SHA-256 of a password; the configured password is only kept in this form.
pub fn digest_password(password: &str) -> PasswordDigest {
    Sha256::digest(password.as_bytes()).into()
}
