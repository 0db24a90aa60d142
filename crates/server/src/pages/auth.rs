//! Login and signup pages
//!
//! Valid submissions are handed to the configured [`CredentialAcceptor`]
//! and redirect with a one-shot notice. Invalid ones re-render the form
//! with per-field messages.
//!
//! [`CredentialAcceptor`]: storefront_core::auth::CredentialAcceptor

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use storefront_core::auth::{Acceptance, FormErrors, LoginForm, SignupForm};
use storefront_core::state::StoreAction;

use crate::app::AppState;
use crate::views::{auth, layout};

pub async fn login_page(State(state): State<AppState>) -> Html<String> {
    let flash = state.store.take_flash().await;
    Html(layout::auth_page(
        "Sign In",
        flash.as_deref(),
        &auth::login(&LoginForm::default(), &FormErrors::default()),
    ))
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match form.submit(state.acceptor.as_ref()) {
        Ok(acceptance) => accepted(&state, acceptance).await,
        Err(errors) => {
            tracing::debug!(fields = errors.len(), "Login form rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(layout::auth_page("Sign In", None, &auth::login(&form, &errors))),
            )
                .into_response()
        }
    }
}

pub async fn signup_page(State(state): State<AppState>) -> Html<String> {
    let flash = state.store.take_flash().await;
    Html(layout::auth_page(
        "Create Account",
        flash.as_deref(),
        &auth::signup(&SignupForm::default(), &FormErrors::default()),
    ))
}

pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    match form.submit(state.acceptor.as_ref()) {
        Ok(acceptance) => accepted(&state, acceptance).await,
        Err(errors) => {
            tracing::debug!(fields = errors.len(), "Signup form rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(layout::auth_page(
                    "Create Account",
                    None,
                    &auth::signup(&form, &errors),
                )),
            )
                .into_response()
        }
    }
}

async fn accepted(state: &AppState, acceptance: Acceptance) -> Response {
    state
        .store
        .dispatch(StoreAction::Flash(acceptance.message.to_string()))
        .await;
    Redirect::to(acceptance.redirect_to).into_response()
}
