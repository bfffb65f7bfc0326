use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s/?#%]+@[^@\s/?#%]+$").expect("email pattern is valid")
});

/// Checks that `email` looks like `local@domain` and is safe to put in a URL path
///
/// # Returns
/// * `Ok(&str)` - The trimmed address
/// * `Err(AppError::Validation)` - Otherwise
pub fn validate_email(email: &str) -> Result<&str, AppError> {
    let email = email.trim();
    if EMAIL_RE.is_match(email) {
        Ok(email)
    } else {
        Err(AppError::Validation(format!("not an email address: {email:?}")))
    }
}
