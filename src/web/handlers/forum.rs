//! Forum handlers.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Extension, Json,
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::forum::{ForumCategory, ForumService};
use crate::web::dto::{
    CategoryView, FormView, NewThreadForm, NewThreadView, PageResponse, ReplyForm, ReplyView,
    ThreadView, ValidatedForm,
};
use crate::web::error::ApiError;
use crate::web::flash::{self, FlashLevel};
use crate::web::messages;
use crate::web::middleware::CurrentUser;
use crate::LentilleError;

use super::AppState;

type Page<T> = (SignedCookieJar, Json<PageResponse<T>>);

fn page<T: serde::Serialize>(jar: SignedCookieJar, data: T) -> Page<T> {
    let (jar, messages) = flash::take(jar);
    (jar, Json(PageResponse::new(data, messages)))
}

/// Redirect after a failed submission: back to the form, or to the forum
/// index when the target no longer exists.
fn failed_submission(
    state: &AppState,
    jar: SignedCookieJar,
    err: &LentilleError,
    form_url: String,
) -> Response {
    let jar = state.flash(jar, FlashLevel::Error, messages::describe(err));
    let target = match err {
        LentilleError::NotFound(_) => "/forum".to_string(),
        _ => form_url,
    };
    (jar, Redirect::to(&target)).into_response()
}

/// GET /forum - All categories.
pub async fn forum_index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Page<Vec<ForumCategory>>, ApiError> {
    let categories = ForumService::new(state.db.pool()).list_categories().await?;
    Ok(page(jar, categories))
}

/// GET /forum/category/:id - Threads of a category, newest first.
pub async fn category_view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<Page<CategoryView>, ApiError> {
    let service = ForumService::new(state.db.pool());
    let category = service.get_category(id).await?;
    let threads = service.list_threads(id).await?;
    Ok(page(jar, CategoryView { category, threads }))
}

/// GET /forum/thread/:id - Posts of a thread, oldest first.
pub async fn thread_view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<Page<ThreadView>, ApiError> {
    let service = ForumService::new(state.db.pool());
    let thread = service.get_thread(id).await?;
    let posts = service.list_posts(id).await?;
    Ok(page(jar, ThreadView { thread, posts }))
}

/// GET /forum/new_thread/:category_id - New thread form.
pub async fn new_thread_form(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<Page<NewThreadView>, ApiError> {
    let category = ForumService::new(state.db.pool())
        .get_category(category_id)
        .await?;
    let form = FormView::new(
        format!("/forum/new_thread/{}", category_id),
        &["title", "content"],
    );
    Ok(page(jar, NewThreadView { category, form }))
}

/// POST /forum/new_thread/:category_id - Open a thread with its first post.
pub async fn new_thread(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Extension(user): Extension<CurrentUser>,
    jar: SignedCookieJar,
    ValidatedForm(form): ValidatedForm<NewThreadForm>,
) -> Response {
    let result = ForumService::new(state.db.pool())
        .create_thread(category_id, user.id, &form.title, &form.content)
        .await;

    match result {
        Ok(thread_id) => {
            let jar = state.flash(jar, FlashLevel::Success, messages::THREAD_CREATED);
            (jar, Redirect::to(&format!("/forum/thread/{}", thread_id))).into_response()
        }
        Err(e) => failed_submission(
            &state,
            jar,
            &e,
            format!("/forum/new_thread/{}", category_id),
        ),
    }
}

/// GET /forum/reply/:thread_id - Reply form.
pub async fn reply_form(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
    jar: SignedCookieJar,
) -> Result<Page<ReplyView>, ApiError> {
    let thread = ForumService::new(state.db.pool())
        .get_thread(thread_id)
        .await?;
    let form = FormView::new(format!("/forum/reply/{}", thread_id), &["content"]);
    Ok(page(jar, ReplyView { thread, form }))
}

/// POST /forum/reply/:thread_id - Add a post to a thread.
pub async fn reply(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
    Extension(user): Extension<CurrentUser>,
    jar: SignedCookieJar,
    ValidatedForm(form): ValidatedForm<ReplyForm>,
) -> Response {
    let result = ForumService::new(state.db.pool())
        .reply(thread_id, user.id, &form.content)
        .await;

    match result {
        Ok(_) => {
            let jar = state.flash(jar, FlashLevel::Success, messages::REPLY_POSTED);
            (jar, Redirect::to(&format!("/forum/thread/{}", thread_id))).into_response()
        }
        Err(e) => failed_submission(
            &state,
            jar,
            &e,
            format!("/forum/reply/{}", thread_id),
        ),
    }
}
