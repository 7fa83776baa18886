use serde::{Deserialize, Serialize};

pub const MIN_USERNAME: usize = 3;
pub const MIN_PASSWORD: usize = 4;

/// Credenciales del formulario de login (se envían como multipart)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginValidationError {
    MissingFields,
    UsernameTooShort,
    PasswordTooShort,
}

impl LoginValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            LoginValidationError::MissingFields => "Por favor complete todos los campos",
            LoginValidationError::UsernameTooShort => "El usuario debe tener al menos 3 caracteres",
            LoginValidationError::PasswordTooShort => "La contraseña debe tener al menos 4 caracteres",
        }
    }
}

impl LoginForm {
    /// Solo se reporta la primera regla que falla
    pub fn validate(&self) -> Result<(), LoginValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(LoginValidationError::MissingFields);
        }
        if self.username.chars().count() < MIN_USERNAME {
            return Err(LoginValidationError::UsernameTooShort);
        }
        if self.password.chars().count() < MIN_PASSWORD {
            return Err(LoginValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Resumen del usuario autenticado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
}
