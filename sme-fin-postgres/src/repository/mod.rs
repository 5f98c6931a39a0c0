pub mod account_repository;
pub mod business_details_repository;
pub mod db_init;
pub mod financing_request_repository;
pub mod otp_challenge_repository;
pub mod personal_details_repository;
pub mod trade_license_repository;

pub use account_repository::AccountRepositoryImpl;
pub use business_details_repository::BusinessDetailsRepositoryImpl;
pub use financing_request_repository::FinancingRequestRepositoryImpl;
pub use otp_challenge_repository::OtpChallengeRepositoryImpl;
pub use personal_details_repository::PersonalDetailsRepositoryImpl;
pub use trade_license_repository::TradeLicenseRepositoryImpl;

#[cfg(test)]
pub mod test_utils;
