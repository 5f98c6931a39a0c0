pub mod auth;
pub mod financing;
pub mod health;
pub mod user;
