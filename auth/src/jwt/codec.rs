use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signed-token codec with the algorithm pinned at construction.
///
/// Validation always runs against the pinned algorithm, never the one a
/// token's header declares, so a token re-signed under a different algorithm
/// is rejected outright.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtCodec {
    /// Create a new codec from a shared secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `algorithm` - Signing algorithm; only the HMAC family is accepted
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm is not HS256/HS384/HS512
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Result<Self, JwtError> {
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(JwtError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        })
    }

    /// Encode claims into a compact, URL-safe signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// The signature is checked against the pinned algorithm and the shared
    /// secret; expiry is compared against current UTC with zero leeway. A
    /// decoded token must still carry a non-empty subject and account id.
    ///
    /// # Errors
    /// * `TokenExpired` - The `exp` claim has passed
    /// * `InvalidToken` - Bad signature, malformed token, or claims that do
    ///   not deserialize (including unrecognized role values)
    /// * `MissingClaim` - Subject or account id is empty
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.sub.is_empty() {
            return Err(JwtError::MissingClaim("sub"));
        }
        if claims.id.is_empty() {
            return Err(JwtError::MissingClaim("id"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::jwt::claims::Role;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn codec() -> JwtCodec {
        JwtCodec::new(SECRET, Algorithm::HS256).expect("Failed to build codec")
    }

    #[test]
    fn test_encode_and_decode_roundtrip() {
        let claims = Claims::for_agent("agent-1", "alice", Role::Admin, 20);

        let token = codec().encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = codec().decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_invalid_token() {
        let result = codec().decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let other = JwtCodec::new(b"secret2_at_least_32_bytes_long_key!", Algorithm::HS256)
            .expect("Failed to build codec");

        let claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
        let token = codec().encode(&claims).expect("Failed to encode token");

        let result = other.decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_other_algorithm() {
        // Same secret, different algorithm: the pinned algorithm wins over
        // whatever the token header declares.
        let hs384 = JwtCodec::new(SECRET, Algorithm::HS384).expect("Failed to build codec");

        let claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
        let token = hs384.encode(&claims).expect("Failed to encode token");

        let result = codec().decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let mut claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
        claims.exp = Utc::now().timestamp() - 5;

        let token = codec().encode(&claims).expect("Failed to encode token");

        let result = codec().decode(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_not_yet_expired_token() {
        let mut claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
        claims.exp = Utc::now().timestamp() + 60;

        let token = codec().encode(&claims).expect("Failed to encode token");

        let decoded = codec().decode(&token).expect("Failed to decode token");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn test_decode_rejects_empty_identity_claims() {
        let mut claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
        claims.sub = String::new();
        let token = codec().encode(&claims).expect("Failed to encode token");
        assert!(matches!(
            codec().decode(&token),
            Err(JwtError::MissingClaim("sub"))
        ));

        let mut claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
        claims.id = String::new();
        let token = codec().encode(&claims).expect("Failed to encode token");
        assert!(matches!(
            codec().decode(&token),
            Err(JwtError::MissingClaim("id"))
        ));
    }

    #[test]
    fn test_non_hmac_algorithm_is_rejected() {
        let result = JwtCodec::new(SECRET, Algorithm::RS256);
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }
}
