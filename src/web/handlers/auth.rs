//! Registration, login and logout.

use crate::{
    core::{session, user},
    errors::{Error, Result},
    forms::{FormErrors, LoginForm, RegistrationForm},
    web::{
        AppState,
        flash::Notice,
        outcome::{Outcome, Page, Redirect},
        session::{RequestContext, clear_session_cookie, session_cookie},
        views,
    },
};
use axum::{Form, extract::State};

/// Shown after a successful sign-up.
pub const REGISTERED: &str = "Your account has been created! You are now able to log in";
/// Shown for any failed login, whatever the reason.
pub const LOGIN_FAILED: &str = "Login Unsuccessful. Please check email and password";

fn register_page(context: &RequestContext, form: &RegistrationForm, errors: &FormErrors) -> Page {
    Page::new(
        "Register",
        None,
        context.flash.as_ref(),
        &views::register_form(form, errors),
    )
}

fn login_page(context: &RequestContext, form: &LoginForm, errors: &FormErrors) -> Page {
    Page::new("Login", None, context.flash.as_ref(), &views::login_form(form, errors))
}

/// `GET /register`
pub async fn show_register(context: RequestContext) -> Outcome {
    if context.is_authenticated() {
        return Redirect::to("/home").into();
    }
    register_page(&context, &RegistrationForm::default(), &FormErrors::default()).into()
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    context: RequestContext,
    Form(form): Form<RegistrationForm>,
) -> Result<Outcome> {
    if context.is_authenticated() {
        return Ok(Redirect::to("/home").into());
    }

    match user::register(&state.db, &form).await {
        Ok(_) => Ok(Redirect::to("/login")
            .notice(Notice::success(REGISTERED))
            .into()),
        Err(Error::Validation { errors }) => Ok(register_page(&context, &form, &errors).into()),
        Err(e) => Err(e),
    }
}

/// `GET /login`
pub async fn show_login(context: RequestContext) -> Outcome {
    if context.is_authenticated() {
        return Redirect::to("/home").into();
    }
    login_page(&context, &LoginForm::default(), &FormErrors::default()).into()
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    context: RequestContext,
    Form(form): Form<LoginForm>,
) -> Result<Outcome> {
    if context.is_authenticated() {
        return Ok(Redirect::to("/home").into());
    }

    let credentials = match form.clean() {
        Ok(credentials) => credentials,
        Err(errors) => return Ok(login_page(&context, &form, &errors).into()),
    };

    let Some(user) = user::authenticate(&state.db, &credentials).await? else {
        tracing::warn!("Failed login attempt for {}", credentials.email);
        let body = views::login_form(&form, &FormErrors::default());
        return Ok(Page::with_notice("Login", None, &Notice::danger(LOGIN_FAILED), &body).into());
    };

    let lifetime = session::lifetime(&state.config, credentials.remember);
    let new_session =
        session::create_session(&state.db, user.id, credentials.remember, lifetime).await?;
    let max_age = credentials.remember.then_some(lifetime);

    Ok(Redirect::to("/home")
        .cookie(session_cookie(
            &new_session.token,
            max_age,
            state.config.secure_cookies,
        ))
        .into())
}

/// `GET /logout`
pub async fn logout(State(state): State<AppState>, context: RequestContext) -> Result<Redirect> {
    if let Some(token) = &context.session_token {
        session::delete_session(&state.db, token).await?;
    }
    if let Some(user) = &context.user {
        tracing::info!("User {} logged out", user.id);
    }
    Ok(Redirect::to("/home").cookie(clear_session_cookie()))
}
