//! HS256 JSON Web Tokens over a typed value store
//!
//! This crate provides:
//! - [`ValueStore`], a named value map with insertion coercion and typed reads
//! - [`Header`] and [`Claims`] built on it, with reserved-field accessors
//! - [`Token`] sign/verify in the compact `header.claims.mac` form, using
//!   HMAC-SHA256 and standard padded base64
//! - a configured [`Hs256`] signer built through [`Jwt::hs256`]
//!
//! ```
//! use hsjwt::{Jwt, Token};
//!
//! let mut token = Token::new();
//! token.claims.set_issuer("issuer");
//! token.claims.set("admin", true);
//! let compact = token.sign("secret").unwrap();
//!
//! let verified = Jwt::hs256().with_secret("secret").decode(&compact).unwrap();
//! assert_eq!(verified.claims.issuer().unwrap(), "issuer");
//! assert!(verified.claims.get_bool("admin").unwrap());
//! ```

pub mod api;
pub mod claims;
mod compact;
pub mod config;
pub mod crypto;
mod encoding;
mod engine;
mod error;
pub mod header;
pub mod store;
pub mod token;
mod traits;
pub mod value;

pub use api::{Hs256, Hs256Builder, Jwt, recommended_secret_len};
pub use claims::Claims;
pub use config::{EngineConfig, VerifyOrder};
pub use error::*;
pub use header::Header;
pub use store::ValueStore;
pub use token::Token;
pub use traits::Signer;
pub use value::{Scalar, Value};
