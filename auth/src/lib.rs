//! Authentication building blocks for the listing backend.
//!
//! Provides the security-sensitive primitives the service composes:
//! - Password hashing (Argon2id, fresh salt per call)
//! - Signed bearer tokens with a pinned HMAC algorithm and typed claims
//! - Credential verification + token minting coordination
//!
//! Nothing in this crate performs I/O; the service supplies account storage
//! through its own ports and adapts these primitives.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, JwtCodec, Role};
//! use jsonwebtoken::Algorithm;
//!
//! let codec = JwtCodec::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256).unwrap();
//! let claims = Claims::for_agent("d4f1b3a0-0000-0000-0000-000000000000", "alice", Role::Agent, 20);
//! let token = codec.encode(&claims).unwrap();
//! let decoded = codec.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, Role};
//! use jsonwebtoken::Algorithm;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256).unwrap();
//!
//! // Register: hash the password for storage.
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and mint a bearer token.
//! let claims = Claims::for_agent("agent-1", "alice", Role::Agent, 20);
//! let issued = auth.authenticate("password123", &hash, &claims).unwrap();
//! assert_eq!(issued.token_type, "bearer");
//!
//! // Per request: resolve the token back into claims.
//! let resolved = auth.resolve_token(&issued.access_token).unwrap();
//! assert_eq!(resolved.role, Some(Role::Agent));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use authenticator::TOKEN_TYPE;
pub use jwt::Claims;
pub use jwt::JwtCodec;
pub use jwt::JwtError;
pub use jwt::Role;
pub use jwt::UnknownRole;
pub use password::PasswordError;
pub use password::PasswordHasher;
