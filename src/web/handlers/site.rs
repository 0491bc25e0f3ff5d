//! Landing page and gallery handlers.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::db::UserRepository;
use crate::web::dto::{GalleryView, IndexView, PageResponse};
use crate::web::error::ApiError;
use crate::web::flash;
use crate::web::middleware::OptionalUser;

use super::AppState;

/// GET / - Site information and the current user.
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(current): OptionalUser,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Json<PageResponse<IndexView>>), ApiError> {
    let user = match current {
        Some(current) => UserRepository::new(state.db.pool())
            .get_by_id(current.id)
            .await?
            .map(|u| u.summary()),
        None => None,
    };

    let view = IndexView {
        site_name: state.site.name.clone(),
        description: state.site.description.clone(),
        user,
    };
    let (jar, messages) = flash::take(jar);
    Ok((jar, Json(PageResponse::new(view, messages))))
}

/// GET /photographies - Gallery images.
pub async fn photographies(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Json<PageResponse<GalleryView>>) {
    let view = GalleryView {
        images: state.site.gallery.clone(),
    };
    let (jar, messages) = flash::take(jar);
    (jar, Json(PageResponse::new(view, messages)))
}

/// GET /health - Liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}
