#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod embedded;
pub mod error;
pub mod handlers;
pub mod json;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use embedded::{EmbeddedServer, start_embedded_server};
pub use error::HttpError;
pub use json::{JSON_CONTENT_TYPE, JsonResponse};
pub use routes::create_router;
pub use state::AppState;
