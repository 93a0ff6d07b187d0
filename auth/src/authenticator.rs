use jsonwebtoken::Algorithm;

use crate::jwt::Claims;
use crate::jwt::JwtCodec;
use crate::jwt::JwtError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type discriminator returned alongside every issued token.
pub const TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining password verification and token
/// minting.
///
/// Holds the process-wide signing material; constructed once at startup and
/// shared read-only afterwards.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: JwtCodec,
}

/// A freshly minted bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    /// Wrong password. Callers must surface this identically to an unknown
    /// account so the two cases cannot be told apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    /// * `algorithm` - Signing algorithm (HMAC family only)
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm is not HS256/HS384/HS512
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            codec: JwtCodec::new(secret, algorithm)?,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Fails closed on malformed stored hashes.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and mint a bearer token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - Claims to encode into the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Jwt` - Token minting failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(claims)?)
    }

    /// Mint a bearer token for already-verified claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_token(&self, claims: &Claims) -> Result<IssuedToken, JwtError> {
        Ok(IssuedToken {
            access_token: self.codec.encode(claims)?,
            token_type: TOKEN_TYPE,
        })
    }

    /// Decode and validate a bearer token back into claims.
    ///
    /// # Errors
    /// * `TokenExpired` / `InvalidToken` / `MissingClaim` - Token validation
    ///   failed; resolvers surface all of these identically
    pub fn resolve_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.codec.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::Role;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, Algorithm::HS256).expect("Failed to build authenticator")
    }

    #[test]
    fn test_authenticate_success() {
        let auth = authenticator();

        let password = "my_password";
        let hash = auth.hash_password(password).expect("Failed to hash");

        let claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
        let issued = auth
            .authenticate(password, &hash, &claims)
            .expect("Authentication failed");

        assert!(!issued.access_token.is_empty());
        assert_eq!(issued.token_type, "bearer");

        let resolved = auth
            .resolve_token(&issued.access_token)
            .expect("Token resolution failed");
        assert_eq!(resolved.sub, "alice");
        assert_eq!(resolved.role, Some(Role::Agent));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let auth = authenticator();

        let hash = auth.hash_password("my_password").expect("Failed to hash");
        let claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);

        let result = auth.authenticate("wrong_password", &hash, &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        // A corrupted stored hash behaves exactly like a wrong password.
        let auth = authenticator();
        let claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);

        let result = auth.authenticate("my_password", "corrupted-hash", &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_resolve_invalid_token() {
        let auth = authenticator();

        let result = auth.resolve_token("invalid.token.here");
        assert!(result.is_err());
    }
}
