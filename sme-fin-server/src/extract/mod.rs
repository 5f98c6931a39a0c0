pub mod auth;
pub mod form;

pub use auth::AuthSession;
pub use form::FormPayload;
