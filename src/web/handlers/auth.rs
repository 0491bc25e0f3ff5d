//! Authentication handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::auth;
use crate::db::UserRepository;
use crate::web::dto::{FormView, LoginForm, PageResponse, RegisterForm, ValidatedForm};
use crate::web::flash::{self, FlashLevel};
use crate::web::messages;

use super::AppState;

/// GET /register - Registration form.
pub async fn register_form(jar: SignedCookieJar) -> (SignedCookieJar, Json<PageResponse<FormView>>) {
    let (jar, messages) = flash::take(jar);
    let form = FormView::new("/register", &["username", "password"]);
    (jar, Json(PageResponse::new(form, messages)))
}

/// POST /register - Create an account and log it in.
///
/// A session already carried by the browser is closed first.
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ValidatedForm(form): ValidatedForm<RegisterForm>,
) -> Response {
    let repo = UserRepository::new(state.db.pool());

    match auth::register(&repo, &form.username, &form.password).await {
        Ok(user_id) => {
            state.end_session(&jar);
            let token = auth::start_session(&*state.sessions, user_id);
            let jar = state.set_session_cookie(jar, token);
            let jar = state.flash(jar, FlashLevel::Success, messages::REGISTERED);
            (jar, Redirect::to("/")).into_response()
        }
        Err(e) => {
            let jar = state.flash(jar, FlashLevel::Error, messages::describe(&e));
            (jar, Redirect::to("/register")).into_response()
        }
    }
}

/// GET /login - Login form.
pub async fn login_form(jar: SignedCookieJar) -> (SignedCookieJar, Json<PageResponse<FormView>>) {
    let (jar, messages) = flash::take(jar);
    let form = FormView::new("/login", &["username", "password"]);
    (jar, Json(PageResponse::new(form, messages)))
}

/// POST /login - Verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> Response {
    let repo = UserRepository::new(state.db.pool());

    match auth::login(&repo, &*state.sessions, &form.username, &form.password).await {
        Ok(token) => {
            state.end_session(&jar);
            let jar = state.set_session_cookie(jar, token);
            let jar = state.flash(jar, FlashLevel::Success, messages::LOGGED_IN);
            (jar, Redirect::to("/")).into_response()
        }
        Err(e) => {
            let jar = state.flash(jar, FlashLevel::Error, messages::describe(&e));
            (jar, Redirect::to("/login")).into_response()
        }
    }
}

/// GET /logout - Close the session.
pub async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let jar = match state.session_token(&jar) {
        Some(token) => {
            auth::logout(&*state.sessions, &token);
            state.clear_session_cookie(jar)
        }
        None => jar,
    };
    let jar = state.flash(jar, FlashLevel::Info, messages::LOGGED_OUT);
    (jar, Redirect::to("/")).into_response()
}
