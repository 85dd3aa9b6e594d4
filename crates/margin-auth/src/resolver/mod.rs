//! Identity resolution on top of token validation.
//!
//! Both resolvers share [`TokenValidator`](crate::jwt::TokenValidator) and
//! differ only in what they do with an accepted subject.

pub mod current_user;
pub mod signup;

pub use current_user::CurrentUserResolver;
pub use signup::SignupTokenResolver;
