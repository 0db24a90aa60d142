//! Credential acceptance stub

use super::forms::{LoginForm, SignupForm};
use serde::Serialize;

/// A validated submission
#[derive(Debug, Clone, Copy)]
pub enum Credentials<'a> {
    Login(&'a LoginForm),
    Signup(&'a SignupForm),
}

/// Outcome of an accepted submission
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Acceptance {
    /// Route to navigate to
    pub redirect_to: &'static str,
    /// One-shot notice for the next page
    pub message: &'static str,
}

/// Decides what happens to validated credentials
///
/// There is no authentication backend; implementations must not create
/// sessions or store anything.
pub trait CredentialAcceptor: Send + Sync {
    fn accept(&self, credentials: Credentials<'_>) -> Acceptance;
}

/// Accepts everything: login goes to the shop, signup to the login page
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAcceptor;

impl CredentialAcceptor for MockAcceptor {
    fn accept(&self, credentials: Credentials<'_>) -> Acceptance {
        match credentials {
            Credentials::Login(form) => {
                tracing::info!(email = %form.email, "Mock sign-in accepted");
                Acceptance {
                    redirect_to: "/",
                    message: "Signed in successfully!",
                }
            }
            Credentials::Signup(form) => {
                tracing::info!(
                    email = %form.email,
                    full_name = %form.full_name,
                    "Mock signup accepted"
                );
                Acceptance {
                    redirect_to: "/login",
                    message: "Account created successfully!",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_goes_to_shop() {
        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "engine".to_string(),
        };
        let acceptance = form.submit(&MockAcceptor).unwrap();
        assert_eq!(acceptance.redirect_to, "/");
        assert_eq!(acceptance.message, "Signed in successfully!");
    }

    #[test]
    fn test_signup_goes_to_login() {
        let form = SignupForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine".to_string(),
            accept_terms: true,
        };
        let acceptance = form.submit(&MockAcceptor).unwrap();
        assert_eq!(acceptance.redirect_to, "/login");
    }
}
