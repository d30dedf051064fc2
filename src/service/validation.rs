//! Product payload validation, applied on create and update.

use crate::error::AppError;
use crate::model::ProductInput;

pub struct ProductValidator;

impl ProductValidator {
    /// Name must be non-empty and price non-negative.
    pub fn validate(input: &ProductInput) -> Result<(), AppError> {
        if input.name.is_empty() || input.price < 0.0 {
            return Err(AppError::Validation("Invalid product data".into()));
        }
        Ok(())
    }
}
