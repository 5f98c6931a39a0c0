//! HTTP surface of the SME financing onboarding service

pub mod config;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::{AppState, StateOptions};
