//! Discussion forum for Lentille.
//!
//! Categories hold threads; every thread starts with one post and grows
//! through replies. Threads are listed newest first, posts oldest first.

mod post;
mod post_repository;
mod repository;
mod service;
mod thread;
mod thread_repository;
mod types;

pub use post::{ForumPost, NewPost};
pub use post_repository::PostRepository;
pub use repository::CategoryRepository;
pub use service::{ForumService, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
pub use thread::{ForumThread, NewThread};
pub use thread_repository::ThreadRepository;
pub use types::ForumCategory;
