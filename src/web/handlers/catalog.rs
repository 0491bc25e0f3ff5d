//! Catalog handlers.
//!
//! Listings sit behind the login guard; detail pages are public.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::catalog::{CatalogRepository, EquipmentItem, EquipmentKind};
use crate::web::dto::PageResponse;
use crate::web::error::ApiError;
use crate::web::flash;

use super::AppState;

type ItemsPage = (SignedCookieJar, Json<PageResponse<Vec<EquipmentItem>>>);
type ItemPage = (SignedCookieJar, Json<PageResponse<EquipmentItem>>);

async fn list(state: &AppState, jar: SignedCookieJar, kind: EquipmentKind) -> Result<ItemsPage, ApiError> {
    let items = CatalogRepository::new(state.db.pool())
        .list_items(kind)
        .await?;
    let (jar, messages) = flash::take(jar);
    Ok((jar, Json(PageResponse::new(items, messages))))
}

async fn detail(
    state: &AppState,
    jar: SignedCookieJar,
    kind: EquipmentKind,
    id: i64,
) -> Result<ItemPage, ApiError> {
    let item = CatalogRepository::new(state.db.pool())
        .get_item(kind, id)
        .await?;
    let (jar, messages) = flash::take(jar);
    Ok((jar, Json(PageResponse::new(item, messages))))
}

/// GET /appareil_photo - All cameras.
pub async fn list_cameras(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<ItemsPage, ApiError> {
    list(&state, jar, EquipmentKind::Camera).await
}

/// GET /telescope - All telescopes.
pub async fn list_telescopes(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<ItemsPage, ApiError> {
    list(&state, jar, EquipmentKind::Telescope).await
}

/// GET /appareil/:id - One camera.
pub async fn camera_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<ItemPage, ApiError> {
    detail(&state, jar, EquipmentKind::Camera, id).await
}

/// GET /telescope/:id - One telescope.
pub async fn telescope_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<ItemPage, ApiError> {
    detail(&state, jar, EquipmentKind::Telescope, id).await
}
