// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP a la API de soportes
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    DeleteResponse, ExcelFile, ExportFormat, FileData, LoginForm, LoginResponse, NewSoporte,
    Soporte, UploadResponse,
};
use crate::state::SessionContext;

/// Operaciones sobre el recurso `/soportes`
#[async_trait(?Send)]
pub trait SoporteApi {
    async fn list_soportes(&self) -> Result<Vec<Soporte>, ApiError>;
    async fn get_soporte(&self, id: i64) -> Result<Soporte, ApiError>;
    async fn create_soporte(&self, nuevo: &NewSoporte) -> Result<Soporte, ApiError>;
    async fn delete_soporte(&self, id: i64) -> Result<DeleteResponse, ApiError>;
    async fn export_soportes(&self, format: ExportFormat) -> Result<Vec<u8>, ApiError>;
    async fn upload_excel(&self, file: &ExcelFile, limite: u32) -> Result<UploadResponse, ApiError>;
}

/// Autenticación contra `/auth/login`
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Option<SessionContext>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session: None,
        }
    }

    /// Adjunta `Authorization` a cada request mientras haya sesión
    pub fn with_session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.as_ref().and_then(SessionContext::authorization_header) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await
    }

    async fn send_request(request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convierte respuestas no 2xx en `ApiError::Http` con el `detail` del backend
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    log::warn!("⚠️ [API] HTTP {} {}: {}", status, status_text, body);
    Err(ApiError::from_response_body(status, &status_text, &body))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn new_form_data() -> Result<FormData, ApiError> {
    FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))
}

#[async_trait(?Send)]
impl SoporteApi for ApiClient {
    async fn list_soportes(&self) -> Result<Vec<Soporte>, ApiError> {
        let url = self.url("soportes/");
        log::debug!("📋 [API] GET {}", url);
        let response = Self::send(self.authorize(Request::get(&url))).await?;
        parse_json(response).await
    }

    async fn get_soporte(&self, id: i64) -> Result<Soporte, ApiError> {
        let url = self.url(&format!("soportes/{}", id));
        log::debug!("🔍 [API] GET {}", url);
        let response = Self::send(self.authorize(Request::get(&url))).await?;
        parse_json(response).await
    }

    async fn create_soporte(&self, nuevo: &NewSoporte) -> Result<Soporte, ApiError> {
        let url = self.url("soportes/");
        log::info!("📝 [API] POST {} (cédula {})", url, nuevo.cedula);
        let request = self
            .authorize(Request::post(&url))
            .json(nuevo)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = Self::send_request(request).await?;
        parse_json(response).await
    }

    async fn delete_soporte(&self, id: i64) -> Result<DeleteResponse, ApiError> {
        let url = self.url(&format!("soportes/{}", id));
        log::info!("🗑️ [API] DELETE {}", url);
        let response = Self::send(self.authorize(Request::delete(&url))).await?;
        parse_json(response).await
    }

    async fn export_soportes(&self, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        let url = self.url(format.path());
        log::info!("📤 [API] GET {}", url);
        let response = Self::send(self.authorize(Request::get(&url))).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn upload_excel(&self, file: &ExcelFile, limite: u32) -> Result<UploadResponse, ApiError> {
        let url = self.url(&format!("soportes/upload-excel/?limite={}", limite));
        log::info!("📁 [API] POST {} ({}, {} bytes)", url, file.name, file.size);

        let form = new_form_data()?;
        let appended = match &file.data {
            FileData::Browser(handle) => {
                form.append_with_blob_and_filename("file", handle, &file.name)
            }
            #[cfg(test)]
            FileData::Memory(bytes) => {
                let blob = crate::services::download::bytes_to_blob(bytes, ExportFormat::Excel.mime_type())
                    .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
                form.append_with_blob_and_filename("file", &blob, &file.name)
            }
        };
        appended.map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let request = self
            .authorize(Request::post(&url))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = Self::send_request(request).await?;
        parse_json(response).await
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        let url = self.url("auth/login");
        log::info!("🔐 [API] POST {} (usuario {})", url, form.username);

        // OAuth2 password flow: el backend espera form-data, no JSON
        let data = new_form_data()?;
        data.append_with_str("username", &form.username)
            .and_then(|_| data.append_with_str("password", &form.password))
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let request = Request::post(&url)
            .body(data)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = Self::send_request(request).await?;
        parse_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slash() {
        let api = ApiClient::with_base_url("http://localhost:8000/api/");
        assert_eq!(api.url("soportes/"), "http://localhost:8000/api/soportes/");
        assert_eq!(
            api.url(ExportFormat::Pdf.path()),
            "http://localhost:8000/api/soportes/export/pdf"
        );
    }
}
