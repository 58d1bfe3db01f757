// orderdesk/src/auth/mod.rs

//! Authentication and authorization building blocks.
//!
//! The HTTP layer decodes the session cookie with [`token::TokenIssuer`] into a
//! [`principal::Principal`], and every service checks that principal against the
//! permission table in [`guard`].

pub mod guard;
pub mod password;
pub mod principal;
pub mod token;
