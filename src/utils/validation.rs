//! Input validation utilities

use crate::constants;
use crate::models::InputField;

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username
        .chars()
        .next()
        .map(|c| c.is_alphabetic())
        .unwrap_or(false)
    {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate question difficulty
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if constants::difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err("Invalid difficulty")
    }
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate a question's stdin shape descriptor
///
/// Every array field must take its length from an earlier scalar field.
pub fn validate_input_schema(schema: &[InputField]) -> Result<(), &'static str> {
    if schema.is_empty() {
        return Err("Input schema cannot be empty");
    }

    for (index, field) in schema.iter().enumerate() {
        if let InputField::Array { len_field } = field {
            if *len_field >= index {
                return Err("Array length field must reference an earlier field");
            }
            if !matches!(schema[*len_field], InputField::Scalar) {
                return Err("Array length field must reference a scalar field");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_difficulty() {
        assert!(validate_difficulty("easy").is_ok());
        assert!(validate_difficulty("hard").is_ok());
        assert!(validate_difficulty("expert").is_err());
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("candidate").is_ok());
        assert!(validate_role("interviewer").is_ok());
        assert!(validate_role("super_admin").is_ok());
        assert!(validate_role("admin").is_err());
    }

    #[test]
    fn test_validate_input_schema() {
        use InputField::*;

        assert!(validate_input_schema(&[Scalar, Array { len_field: 0 }, Scalar]).is_ok());
        assert!(validate_input_schema(&[]).is_err());
        // Forward reference
        assert!(validate_input_schema(&[Array { len_field: 0 }]).is_err());
        // References another array
        assert!(
            validate_input_schema(&[Scalar, Array { len_field: 0 }, Array { len_field: 1 }])
                .is_err()
        );
    }
}
