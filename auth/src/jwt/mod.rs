pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use claims::Role;
pub use claims::UnknownRole;
pub use codec::JwtCodec;
pub use errors::JwtError;
