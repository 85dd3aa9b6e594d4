//! # margin-auth
//!
//! Stateless bearer-token authentication for Margin.
//!
//! ## Modules
//!
//! - `jwt`: signing configuration, token issuance, and validation
//! - `resolver`: turning a validated token into a stored user, or into the
//!   bare email carried through a signup flow

pub mod jwt;
pub mod resolver;

pub use jwt::{Claims, IssuedToken, SigningConfig, TokenIssuer, TokenValidator};
pub use resolver::{CurrentUserResolver, SignupTokenResolver};
