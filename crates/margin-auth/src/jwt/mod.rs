//! JWT signing configuration, issuance, and validation.

pub mod claims;
pub mod issuer;
pub mod signing;
pub mod validator;

pub use claims::Claims;
pub use issuer::{IssuedToken, TokenIssuer};
pub use signing::SigningConfig;
pub use validator::TokenValidator;
