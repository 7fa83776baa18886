pub mod api_client;
pub mod auth_service;
pub mod download;

pub use api_client::{ApiClient, AuthApi, SoporteApi};
pub use auth_service::{AuthService, Session};
pub use download::trigger_download;
