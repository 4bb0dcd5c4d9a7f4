#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("El usuario debe tener al menos 3 caracteres")]
    UsernameTooShort,

    #[error("El usuario debe tener menos de 20 caracteres")]
    UsernameTooLong,

    #[error("La contraseña debe tener al menos 8 caracteres")]
    PasswordTooShort,

    #[error("La contraseña debe tener menos de 80 caracteres")]
    PasswordTooLong,

    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
}

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 80;

pub fn validate_user(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if len < USERNAME_MIN {
        return Err(ValidationError::UsernameTooShort);
    }
    if len > USERNAME_MAX {
        return Err(ValidationError::UsernameTooLong);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    if len > PASSWORD_MAX {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

pub fn validate_password_confirmation(
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    validate_user(username)?;
    validate_password(password)
}

pub fn validate_register(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    validate_login(username, password)?;
    validate_password_confirmation(password, confirm_password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_bounds() {
        assert_eq!(validate_user("ab"), Err(ValidationError::UsernameTooShort));
        assert_eq!(validate_user("abc"), Ok(()));
        assert_eq!(validate_user(&"a".repeat(20)), Ok(()));
        assert_eq!(validate_user(&"a".repeat(21)), Err(ValidationError::UsernameTooLong));
        // Counted in characters, not bytes.
        assert_eq!(validate_user("ñúé"), Ok(()));
    }

    #[test]
    fn test_password_bounds() {
        assert_eq!(validate_password("1234567"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("12345678"), Ok(()));
        assert_eq!(validate_password(&"x".repeat(80)), Ok(()));
        assert_eq!(validate_password(&"x".repeat(81)), Err(ValidationError::PasswordTooLong));
    }

    #[test]
    fn test_login_order() {
        assert_eq!(
            validate_login("ab", "short"),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(
            validate_login("carla", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_login("carla", "contraseña1"), Ok(()));
    }

    #[test]
    fn test_register_mismatch() {
        let err = validate_register("carla", "contraseña1", "contraseña2").unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "Las contraseñas no coinciden");
        assert_eq!(validate_register("carla", "contraseña1", "contraseña1"), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::UsernameTooShort.to_string(),
            "El usuario debe tener al menos 3 caracteres"
        );
        assert_eq!(
            ValidationError::PasswordTooLong.to_string(),
            "La contraseña debe tener menos de 80 caracteres"
        );
    }
}
