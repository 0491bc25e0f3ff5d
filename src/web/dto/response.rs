//! View-model DTOs for the Lentille web layer.

use serde::Serialize;

use crate::db::UserSummary;
use crate::forum::{ForumCategory, ForumPost, ForumThread};
use crate::web::flash::FlashMessage;

/// Page response wrapper: view data plus pending flash messages.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    /// View data.
    pub data: T,
    /// Flash messages queued by the previous request.
    pub messages: Vec<FlashMessage>,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new page response.
    pub fn new(data: T, messages: Vec<FlashMessage>) -> Self {
        Self { data, messages }
    }
}

/// Landing page.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub site_name: String,
    pub description: String,
    /// Logged-in user, if any.
    pub user: Option<UserSummary>,
}

/// Photo gallery page.
#[derive(Debug, Serialize)]
pub struct GalleryView {
    pub images: Vec<String>,
}

/// Description of a form to submit.
#[derive(Debug, Serialize)]
pub struct FormView {
    /// Target URL of the POST.
    pub action: String,
    /// Expected field names.
    pub fields: Vec<&'static str>,
}

impl FormView {
    pub fn new(action: impl Into<String>, fields: &[&'static str]) -> Self {
        Self {
            action: action.into(),
            fields: fields.to_vec(),
        }
    }
}

/// Threads of one category.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub category: ForumCategory,
    pub threads: Vec<ForumThread>,
}

/// Posts of one thread.
#[derive(Debug, Serialize)]
pub struct ThreadView {
    pub thread: ForumThread,
    pub posts: Vec<ForumPost>,
}

/// Form for opening a thread in a category.
#[derive(Debug, Serialize)]
pub struct NewThreadView {
    pub category: ForumCategory,
    pub form: FormView,
}

/// Form for replying to a thread.
#[derive(Debug, Serialize)]
pub struct ReplyView {
    pub thread: ForumThread,
    pub form: FormView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::flash::FlashLevel;

    #[test]
    fn test_page_response_shape() {
        let page = PageResponse::new(
            GalleryView {
                images: vec!["m31.jpg".to_string()],
            },
            vec![FlashMessage::new(FlashLevel::Success, "Connexion réussie.")],
        );
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["data"]["images"][0], "m31.jpg");
        assert_eq!(json["messages"][0]["level"], "success");
        assert_eq!(json["messages"][0]["message"], "Connexion réussie.");
    }

    #[test]
    fn test_form_view() {
        let form = FormView::new("/login", &["username", "password"]);
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["action"], "/login");
        assert_eq!(json["fields"][1], "password");
    }
}
