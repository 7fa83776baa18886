// Dobles de prueba compartidos por los tests de viewmodels y estado

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{
    DeleteResponse, ExcelFile, ExportFormat, LoginForm, LoginResponse, NewSoporte, Soporte,
    UploadResponse,
};
use crate::services::{AuthApi, SoporteApi};
use crate::utils::Scheduler;

/// Scheduler que acumula las tareas hasta que el test las ejecuta
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<VecDeque<(u32, Box<dyn FnOnce()>)>>,
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push_back((delay_ms, task));
    }
}

impl ManualScheduler {
    pub fn pending_delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_next(&self) -> bool {
        let next = self.tasks.borrow_mut().pop_front();
        match next {
            Some((_, task)) => {
                task();
                true
            }
            None => false,
        }
    }

    pub fn run_all(&self) {
        while self.run_next() {}
    }
}

pub fn soporte(id: i64, nombre: &str) -> Soporte {
    Soporte {
        id: Some(id),
        nombre: nombre.to_string(),
        cedula: format!("{:05}", id),
        direccion: "Calle 10 #5-20".to_string(),
        fecha_creacion: Some("2024-03-05T14:30:00".to_string()),
    }
}

pub fn http_error(status: u16, detail: Option<&str>) -> ApiError {
    ApiError::Http {
        status,
        status_text: "Error".to_string(),
        detail: detail.map(str::to_string),
    }
}

/// API simulada: respuestas configurables y contadores de llamadas
#[derive(Default)]
pub struct MockApi {
    pub list_result: RefCell<Option<Result<Vec<Soporte>, ApiError>>>,
    pub get_result: RefCell<Option<Result<Soporte, ApiError>>>,
    pub create_result: RefCell<Option<Result<Soporte, ApiError>>>,
    pub delete_result: RefCell<Option<Result<DeleteResponse, ApiError>>>,
    pub export_result: RefCell<Option<Result<Vec<u8>, ApiError>>>,
    pub upload_result: RefCell<Option<Result<UploadResponse, ApiError>>>,
    pub login_result: RefCell<Option<Result<LoginResponse, ApiError>>>,
    pub calls: Cell<usize>,
    pub created: RefCell<Vec<NewSoporte>>,
    pub deleted: RefCell<Vec<i64>>,
    pub uploads: RefCell<Vec<(String, u32)>>,
    pub exports: RefCell<Vec<ExportFormat>>,
    pub logins: RefCell<Vec<LoginForm>>,
}

impl MockApi {
    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

fn take<T>(slot: &RefCell<Option<Result<T, ApiError>>>) -> Result<T, ApiError> {
    slot.borrow_mut()
        .take()
        .unwrap_or_else(|| Err(ApiError::Network("sin respuesta configurada".to_string())))
}

#[async_trait(?Send)]
impl SoporteApi for MockApi {
    async fn list_soportes(&self) -> Result<Vec<Soporte>, ApiError> {
        self.hit();
        take(&self.list_result)
    }

    async fn get_soporte(&self, _id: i64) -> Result<Soporte, ApiError> {
        self.hit();
        take(&self.get_result)
    }

    async fn create_soporte(&self, nuevo: &NewSoporte) -> Result<Soporte, ApiError> {
        self.hit();
        self.created.borrow_mut().push(nuevo.clone());
        take(&self.create_result)
    }

    async fn delete_soporte(&self, id: i64) -> Result<DeleteResponse, ApiError> {
        self.hit();
        self.deleted.borrow_mut().push(id);
        take(&self.delete_result)
    }

    async fn export_soportes(&self, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        self.hit();
        self.exports.borrow_mut().push(format);
        take(&self.export_result)
    }

    async fn upload_excel(&self, file: &ExcelFile, limite: u32) -> Result<UploadResponse, ApiError> {
        self.hit();
        self.uploads.borrow_mut().push((file.name.clone(), limite));
        take(&self.upload_result)
    }
}

#[async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        self.hit();
        self.logins.borrow_mut().push(form.clone());
        take(&self.login_result)
    }
}
