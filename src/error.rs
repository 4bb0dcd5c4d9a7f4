#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with `{success: false, message}`.
    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// The backend's own message when there is one, `fallback` otherwise.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_or() {
        let err = ApiError::Rejected("Usuario no encontrado".into());
        assert_eq!(err.message_or("Error"), "Usuario no encontrado");

        let err = ApiError::Status(502);
        assert_eq!(err.message_or("Error al cargar"), "Error al cargar");

        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.message_or("Error inesperado"), "Error inesperado");
    }
}
