//! Lentille - catalog and forum for photography and astronomy equipment.
//!
//! Visitors register, log in, browse cameras and telescopes, and discuss
//! them in a forum organised as categories, threads and posts.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod forum;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, login, logout, register, require_authenticated, verify_password, AuthSession,
    MemorySessionStore, PasswordError, SessionStore, ValidationError,
};
pub use catalog::{CatalogRepository, EquipmentItem, EquipmentKind, NewEquipmentItem};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{LentilleError, Result};
pub use forum::{ForumCategory, ForumPost, ForumService, ForumThread};
pub use web::WebServer;
