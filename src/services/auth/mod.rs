pub mod password;
pub mod principal;
pub mod token_service;

pub use password::{Argon2Encoder, PasswordEncoder, PlainTextEncoder};
pub use principal::Principal;
pub use token_service::{IssuedToken, TokenError, TokenService};
