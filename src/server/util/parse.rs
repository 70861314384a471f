use crate::server::error::AppError;

/// Message returned when any required form field is missing or blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Semua field harus diisi";

/// Message returned when a request does not name the family it targets.
pub const FAMILY_ID_REQUIRED_MESSAGE: &str = "Family ID is required";

/// Normalizes an optional form value, treating blank strings as absent.
///
/// # Arguments
/// - `value` - Raw form value
///
/// # Returns
/// - `Some(String)` - The trimmed value when it contains non-whitespace characters
/// - `None` - The value was absent or blank
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Requires a form value to be present and non-blank.
///
/// # Returns
/// - `Ok(String)` - The trimmed value
/// - `Err(AppError::BadRequest)` - With the shared required-fields message
pub fn required_text(value: Option<String>) -> Result<String, AppError> {
    non_blank(value).ok_or_else(|| AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()))
}

/// Requires a numeric form value to be present.
pub fn required_number(value: Option<i32>) -> Result<i32, AppError> {
    value.ok_or_else(|| AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()))
}

/// Requires the `family_id` of read, update and delete requests.
pub fn required_family_id(value: Option<String>) -> Result<String, AppError> {
    non_blank(value).ok_or_else(|| AppError::BadRequest(FAMILY_ID_REQUIRED_MESSAGE.to_string()))
}
