//! Builder API
//!
//! `Jwt::hs256().with_secret(..)` yields a configured [`Hs256`] signer.

pub mod builder;
pub mod hs256_builder;
pub mod keys;

pub use builder::{Hs256Builder, Jwt};
pub use hs256_builder::Hs256;
pub use keys::recommended_secret_len;
