use chrono::{DateTime, Utc};
use sme_fin_db::models::{BusinessDetailsModel, PersonalDetailsModel, TradeLicenseModel};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::{bounded, first_violation, validate_phone, FieldRule, EMAIL_REGEX};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Default, Validate)]
pub struct PersonalDetailsInput {
    #[validate(length(max = 255, message = "Full name must be at most 255 characters"))]
    pub full_name: String,

    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        regex(path = *EMAIL_REGEX, message = "Invalid email format")
    )]
    pub email: String,

    #[validate(
        length(max = 32, message = "Phone number must be at most 32 characters"),
        custom(function = validate_phone)
    )]
    pub phone_number: String,
}

impl PersonalDetailsInput {
    pub fn check(&self) -> ApiResult<()> {
        first_violation(
            self.validate(),
            &[
                FieldRule::new("full_name", &self.full_name, "Full name is required"),
                FieldRule::new("email", &self.email, "Email is required"),
                FieldRule::new("phone_number", &self.phone_number, "Phone number is required"),
            ],
        )
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct BusinessDetailsInput {
    #[validate(length(max = 255, message = "Business name must be at most 255 characters"))]
    pub business_name: String,

    #[validate(length(max = 100, message = "Trade license number must be at most 100 characters"))]
    pub trade_license_number: String,
}

impl BusinessDetailsInput {
    pub fn check(&self) -> ApiResult<()> {
        first_violation(
            self.validate(),
            &[
                FieldRule::new("business_name", &self.business_name, "Business name is required"),
                FieldRule::new(
                    "trade_license_number",
                    &self.trade_license_number,
                    "Trade license number is required",
                ),
            ],
        )
    }
}

/// Trade license reference.
///
/// `file_url` may stay empty when a file is uploaded with the request; the
/// upload then supplies both the filename and the URL.
#[derive(Debug, Clone, Default, Validate)]
pub struct TradeLicenseInput {
    #[validate(length(max = 255, message = "Filename must be at most 255 characters"))]
    pub filename: String,

    pub file_url: String,
}

impl TradeLicenseInput {
    pub fn check(&self, has_upload: bool) -> ApiResult<()> {
        first_violation(
            self.validate(),
            &[FieldRule::new("filename", &self.filename, "Filename is required")],
        )?;
        if !has_upload && self.file_url.trim().is_empty() {
            return Err(ApiError::Validation(
                "File URL is required (or upload a file)".to_string(),
            ));
        }
        Ok(())
    }
}

/// All onboarding data submitted in one request.
#[derive(Debug, Clone, Default)]
pub struct FullRegistrationInput {
    pub personal: PersonalDetailsInput,
    pub business: BusinessDetailsInput,
    pub trade: TradeLicenseInput,
}

impl PersonalDetailsInput {
    pub fn to_record(&self, account_id: Uuid, now: DateTime<Utc>) -> ApiResult<PersonalDetailsModel> {
        Ok(PersonalDetailsModel {
            id: Uuid::new_v4(),
            account_id,
            full_name: bounded(&self.full_name, "Full name")?,
            email: bounded(&self.email, "Email")?,
            phone_number: bounded(&self.phone_number, "Phone number")?,
            created_at: now,
            updated_at: now,
        })
    }
}

impl BusinessDetailsInput {
    pub fn to_record(&self, account_id: Uuid, now: DateTime<Utc>) -> ApiResult<BusinessDetailsModel> {
        Ok(BusinessDetailsModel {
            id: Uuid::new_v4(),
            account_id,
            business_name: bounded(&self.business_name, "Business name")?,
            trade_license_number: bounded(&self.trade_license_number, "Trade license number")?,
            created_at: now,
            updated_at: now,
        })
    }
}

impl TradeLicenseInput {
    pub fn to_record(&self, account_id: Uuid, now: DateTime<Utc>) -> ApiResult<TradeLicenseModel> {
        Ok(TradeLicenseModel {
            id: Uuid::new_v4(),
            account_id,
            filename: bounded(&self.filename, "Filename")?,
            file_url: self.file_url.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// The three records of one submission, converted and ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecords {
    pub personal: PersonalDetailsModel,
    pub business: BusinessDetailsModel,
    pub trade: TradeLicenseModel,
}

impl FullRegistrationInput {
    /// Checks the three parts in order, stopping at the first violation.
    pub fn check(&self, has_upload: bool) -> ApiResult<()> {
        self.personal.check()?;
        self.business.check()?;
        self.trade.check(has_upload)
    }

    /// Checks every part and converts it into its storage record.
    ///
    /// Nothing past this point can reject a field, so a submission that
    /// passes here reaches storage whole.
    pub fn into_records(
        self,
        account_id: Uuid,
        has_upload: bool,
        now: DateTime<Utc>,
    ) -> ApiResult<RegistrationRecords> {
        self.check(has_upload)?;
        Ok(RegistrationRecords {
            personal: self.personal.to_record(account_id, now)?,
            business: self.business.to_record(account_id, now)?,
            trade: self.trade.to_record(account_id, now)?,
        })
    }
}
