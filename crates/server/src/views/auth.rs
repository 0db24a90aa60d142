//! Login and signup forms
//!
//! Entered values are written back into the inputs so a failed submission
//! never clears the form. Passwords are never echoed.

use super::html::{escape, field_error};
use storefront_core::auth::{FormErrors, FormField, LoginForm, SignupForm};

pub fn login(form: &LoginForm, errors: &FormErrors) -> String {
    format!(
        r#"<div class="auth-card">
  <div class="auth-head"><span class="logo">S</span><h2>Welcome Back</h2><p>Please enter your details to sign in.</p></div>
  <form method="post" action="/login" novalidate>
    <label>Email Address
      <input type="email" name="email" placeholder="name@example.com" value="{email}">
    </label>
    {email_error}
    <label>Password
      <input type="password" name="password" placeholder="••••••••">
    </label>
    {password_error}
    <button type="submit" class="primary">Sign In</button>
  </form>
  <p class="auth-switch">Don't have an account? <a href="/signup">Create one</a></p>
</div>"#,
        email = escape(&form.email),
        email_error = field_error(errors.get(FormField::Email)),
        password_error = field_error(errors.get(FormField::Password)),
    )
}

pub fn signup(form: &SignupForm, errors: &FormErrors) -> String {
    format!(
        r#"<div class="auth-card">
  <div class="auth-head"><span class="logo">S</span><h2>Create Account</h2><p>Join our community of premium shoppers.</p></div>
  <form method="post" action="/signup" novalidate>
    <label>Full Name
      <input type="text" name="full_name" placeholder="John Doe" value="{full_name}">
    </label>
    {full_name_error}
    <label>Email Address
      <input type="email" name="email" placeholder="name@example.com" value="{email}">
    </label>
    {email_error}
    <label>Password
      <input type="password" name="password" placeholder="••••••••">
    </label>
    {password_error}
    <label class="checkbox">
      <input type="checkbox" name="accept_terms"{checked}> I agree to the Terms of Service and Privacy Policy.
    </label>
    {terms_error}
    <button type="submit" class="primary">Create Account</button>
  </form>
  <p class="auth-switch">Already have an account? <a href="/login">Sign in</a></p>
</div>"#,
        full_name = escape(&form.full_name),
        full_name_error = field_error(errors.get(FormField::FullName)),
        email = escape(&form.email),
        email_error = field_error(errors.get(FormField::Email)),
        password_error = field_error(errors.get(FormField::Password)),
        checked = if form.accept_terms { " checked" } else { "" },
        terms_error = field_error(errors.get(FormField::AcceptTerms)),
    )
}
