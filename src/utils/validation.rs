use crate::domain::model::MISSING_SERVICE;
use crate::utils::error::{FuelError, Result};

/// Unwraps a required collaborator, rejecting an absent one as a programmer error.
pub fn require_service<'a, T: ?Sized>(field_name: &str, value: Option<&'a T>) -> Result<&'a T> {
    value.ok_or_else(|| {
        tracing::error!(field = field_name, "{}", MISSING_SERVICE);
        FuelError::InvalidArgument {
            message: MISSING_SERVICE.to_string(),
        }
    })
}
