use crate::server::error::AppError;

/// Rejects empty or whitespace-only required strings before any data access.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(require_non_empty("", "title").is_err());
        assert!(require_non_empty("   ", "title").is_err());
    }

    #[test]
    fn accepts_real_values() {
        assert!(require_non_empty("Morning practice", "title").is_ok());
    }
}
