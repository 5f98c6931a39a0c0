pub mod clock;
pub mod domain;
pub mod error;
pub mod service;
pub mod session;
pub mod storage;

pub use clock::*;
pub use domain::*;
pub use error::*;
pub use service::{
    CompletionEvaluator, FinancingLedger, OtpCodeSource, OtpVerifier, RegistrationService,
    RepositorySet,
};
pub use session::*;
pub use storage::*;
