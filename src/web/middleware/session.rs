//! Session guard middleware.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};

use crate::auth;
use crate::web::flash::FlashLevel;
use crate::web::handlers::AppState;
use crate::web::messages;

/// The authenticated user of a guarded request.
///
/// Inserted as a request extension by [`require_login`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

/// Guard for routes that need a logged-in user.
///
/// Anonymous requests are redirected to `/login` with a flash message and
/// never reach the handler.
pub async fn require_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let token = state.session_token(&jar);
    match auth::require_authenticated(&*state.sessions, token.as_deref()) {
        Ok(id) => {
            req.extensions_mut().insert(CurrentUser { id });
            next.run(req).await
        }
        Err(_) => {
            tracing::debug!(path = %req.uri().path(), "Anonymous access to guarded route");
            let jar = state.flash(jar, FlashLevel::Error, messages::LOGIN_REQUIRED);
            (jar, Redirect::to("/login")).into_response()
        }
    }
}

/// The logged-in user, if any, on routes open to everyone.
#[derive(Debug, Clone, Copy)]
pub struct OptionalUser(pub Option<CurrentUser>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, Key::from_ref(state));
        let token = state.session_token(&jar);
        let user = auth::require_authenticated(&*state.sessions, token.as_deref())
            .ok()
            .map(|id| CurrentUser { id });
        Ok(OptionalUser(user))
    }
}
