pub mod financing;
pub mod otp;
pub mod registration;
pub mod validation;
pub mod views;

pub use financing::*;
pub use otp::*;
pub use registration::*;
pub use views::*;
