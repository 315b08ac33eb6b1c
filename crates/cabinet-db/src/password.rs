use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

/// Hashes `password` with Argon2id and a fresh random salt, returning the PHC
/// string that gets stored in the account.
pub fn hash_password(password: &str) -> Result<String, crate::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(Into::into)
}

/// Checks `password` against a stored hash. A mismatch is `Ok(false)`; only a
/// malformed stored hash is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, crate::Error> {
    let parsed = PasswordHash::new(stored).map_err(crate::Error::StoredPasswordUnparsable)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
