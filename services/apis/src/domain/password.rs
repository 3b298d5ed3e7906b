use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use std::sync::OnceLock;

/// Hash `plaintext` with Argon2id and a fresh random salt. The result is a
/// PHC string carrying its own salt and parameters.
pub fn hash_password(plaintext: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Check `plaintext` against a stored PHC string. A malformed hash never verifies.
pub fn verify_password(plaintext: &str, hashed: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hashed) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// Stand-in hash for logins naming an unknown user, built once with the same
/// parameters as stored hashes.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY: OnceLock<Option<String>> = OnceLock::new();
    DUMMY
        .get_or_init(|| hash_password("unknown-user-placeholder").ok())
        .as_deref()
}

/// Pay the cost of one verification without any account to check against,
/// so an unknown username takes as long as a wrong password.
pub fn spend_verification(plaintext: &str) {
    if let Some(hashed) = dummy_hash() {
        std::hint::black_box(verify_password(plaintext, hashed));
    }
}
