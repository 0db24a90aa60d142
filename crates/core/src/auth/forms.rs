//! Login and signup form data and validation

use super::acceptor::{Acceptance, CredentialAcceptor, Credentials};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A field that can carry a validation message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Email,
    Password,
    AcceptTerms,
}

impl FormField {
    /// Message shown when the field is left empty
    pub fn required_message(&self) -> &'static str {
        match self {
            Self::FullName => "Full name is required",
            Self::Email => "Email is required",
            Self::Password => "Password is required",
            Self::AcceptTerms => "You must accept the terms",
        }
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    fn require(&mut self, field: FormField, present: bool) {
        if !present {
            self.0.insert(field, field.required_message());
        }
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Sign-in form
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.require(FormField::Email, !self.email.is_empty());
        errors.require(FormField::Password, !self.password.is_empty());
        errors.into_result()
    }

    /// Validate, then hand the credentials to `acceptor`
    pub fn submit(&self, acceptor: &dyn CredentialAcceptor) -> Result<Acceptance, FormErrors> {
        self.validate()?;
        Ok(acceptor.accept(Credentials::Login(self)))
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation form
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// HTML checkboxes are only submitted when ticked
    #[serde(default, deserialize_with = "checkbox")]
    pub accept_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.require(FormField::FullName, !self.full_name.is_empty());
        errors.require(FormField::Email, !self.email.is_empty());
        errors.require(FormField::Password, !self.password.is_empty());
        errors.require(FormField::AcceptTerms, self.accept_terms);
        errors.into_result()
    }

    /// Validate, then hand the credentials to `acceptor`
    pub fn submit(&self, acceptor: &dyn CredentialAcceptor) -> Result<Acceptance, FormErrors> {
        self.validate()?;
        Ok(acceptor.accept(Credentials::Signup(self)))
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("accept_terms", &self.accept_terms)
            .finish()
    }
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(!matches!(value.as_str(), "" | "off" | "false"))
}
