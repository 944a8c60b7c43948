/**
 * Password Hashing
 *
 * bcrypt is CPU bound, so both hashing and verification run on tokio's
 * blocking thread pool.
 */

use crate::backend::error::BackendError;

/// Hash a plaintext password with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BackendError::internal(format!("Password hashing task failed: {}", e)))??;
    Ok(hashed)
}

/// Check a plaintext password against a stored bcrypt hash
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| BackendError::internal(format!("Password verification task failed: {}", e)))??;
    Ok(valid)
}
