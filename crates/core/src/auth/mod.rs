//! # Mock Auth
//!
//! Login and signup forms with presence-only validation. Nothing is sent
//! anywhere and nothing is stored: a valid submission is handed to a
//! [`CredentialAcceptor`], which only decides where to go next.

pub mod acceptor;
pub mod forms;

pub use acceptor::{Acceptance, CredentialAcceptor, Credentials, MockAcceptor};
pub use forms::{FormErrors, FormField, LoginForm, SignupForm};
