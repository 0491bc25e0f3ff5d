//! Web module for Lentille.
//!
//! Pages are served as JSON view-models; forms are submitted as
//! urlencoded bodies and answered with redirects and flash messages.

pub mod dto;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod messages;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
