// ============================================================================
// ERRORES - Fallos de comunicación con la API
// ============================================================================

use serde::Deserialize;

/// Error de una llamada HTTP a la API de soportes
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// El servidor no respondió (equivale al status 0 de fetch)
    #[error("No se puede conectar con el servidor: {0}")]
    Network(String),

    /// Respuesta no exitosa (no 2xx)
    #[error("{}", http_message(.status, .status_text, .detail))]
    Http {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    /// La respuesta llegó pero no se pudo interpretar
    #[error("Error procesando la respuesta: {0}")]
    Parse(String),

    /// No se pudo construir la petición
    #[error("Error preparando la petición: {0}")]
    Request(String),
}

fn http_message(status: &u16, status_text: &str, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("Error {}: {}", status, status_text),
    }
}

impl ApiError {
    /// Status HTTP asociado; los fallos de red cuentan como 0
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) => Some(0),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Parse(_) | ApiError::Request(_) => None,
        }
    }

    /// Campo `detail` devuelto por el backend, si lo hubo
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Mensaje para el usuario: el `detail` del servidor o el mensaje genérico
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Construye un error HTTP a partir del cuerpo crudo de la respuesta
    pub fn from_response_body(status: u16, status_text: &str, body: &str) -> Self {
        ApiError::Http {
            status,
            status_text: status_text.to_string(),
            detail: extract_detail(body),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extrae `detail` solo cuando es un string (FastAPI manda arrays en los 422)
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_used_verbatim() {
        let err = ApiError::from_response_body(
            400,
            "Bad Request",
            r#"{"detail":"Ya existe un soporte registrado con la cédula 12345"}"#,
        );
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            "Ya existe un soporte registrado con la cédula 12345"
        );
        assert_eq!(
            err.user_message("Error al crear el soporte"),
            "Ya existe un soporte registrado con la cédula 12345"
        );
    }

    #[test]
    fn validation_array_detail_is_ignored() {
        let err = ApiError::from_response_body(
            422,
            "Unprocessable Entity",
            r#"{"detail":[{"loc":["body","nombre"],"msg":"field required"}]}"#,
        );
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "Error 422: Unprocessable Entity");
        assert_eq!(err.user_message("genérico"), "genérico");
    }

    #[test]
    fn non_json_body_has_no_detail() {
        let err = ApiError::from_response_body(502, "Bad Gateway", "<html>nginx</html>");
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn network_error_reports_status_zero() {
        assert_eq!(ApiError::Network("fetch failed".into()).status(), Some(0));
        assert_eq!(ApiError::Parse("eof".into()).status(), None);
    }
}
