pub mod account;
pub mod account_owned;
pub mod account_status;
pub mod business_details;
pub mod financing_request;
pub mod identifiable;
pub mod otp_challenge;
pub mod personal_details;
pub mod text_capacity;
pub mod trade_license;

// Re-exports
pub use account::*;
pub use account_owned::*;
pub use account_status::*;
pub use business_details::*;
pub use financing_request::*;
pub use identifiable::*;
pub use otp_challenge::*;
pub use personal_details::*;
pub use text_capacity::{LICENSE_NUMBER_BYTES, NAME_BYTES};
pub use trade_license::*;
