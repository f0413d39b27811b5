//! Argon2 password hashing.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use bloglist_core::domain::MIN_PASSWORD_LEN;
use bloglist_core::ports::{AuthError, PasswordService};

/// Cost of new Argon2id hashes. Defaults to the `argon2` crate's recommended
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
        }
    }
}

/// Argon2id with a random salt per hash.
///
/// Verification reads the parameters from the stored PHC string, so hashes
/// written under an older [`PasswordConfig`] keep verifying after a cost change.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new(config: PasswordConfig) -> Result<Self, AuthError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| AuthError::Hashing(format!("invalid argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordService for Argon2PasswordService {
    /// Registration validates the length first; a shorter password here is a
    /// caller bug and is refused rather than hashed.
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Hashing("password below minimum length".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// A stored hash that does not parse is an error, a mismatch is `Ok(false)`.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> PasswordConfig {
        PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new(cheap()).unwrap();

        let hash = service.hash("salainen").unwrap();

        assert!(service.verify("salainen", &hash).unwrap());
        assert!(!service.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hash_records_configured_cost() {
        let service = Argon2PasswordService::new(cheap()).unwrap();

        let hash = service.hash("sal").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("m=1024,t=1"));
    }

    #[test]
    fn test_hash_verifies_after_cost_change() {
        let old = Argon2PasswordService::new(cheap()).unwrap();
        let hash = old.hash("salainen").unwrap();

        let new = Argon2PasswordService::new(PasswordConfig {
            memory_kib: 2048,
            iterations: 2,
        })
        .unwrap();

        assert!(new.verify("salainen", &hash).unwrap());
    }

    #[test]
    fn test_invalid_cost_is_rejected() {
        let result = Argon2PasswordService::new(PasswordConfig {
            memory_kib: 1024,
            iterations: 0,
        });
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }

    #[test]
    fn test_short_password_is_not_hashed() {
        let service = Argon2PasswordService::new(cheap()).unwrap();
        assert!(service.hash("ab").is_err());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let service = Argon2PasswordService::new(cheap()).unwrap();
        assert!(matches!(
            service.verify("abc", "not-a-phc-string"),
            Err(AuthError::Hashing(_))
        ));
    }
}
