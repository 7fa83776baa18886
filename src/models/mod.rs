pub mod soporte;
pub mod upload;
pub mod auth;
pub mod alert;

pub use soporte::{Soporte, NewSoporte, SoporteField, DeleteResponse, ExportFormat, Download};
pub use upload::{ExcelFile, FileData, UploadResponse, UploadResult, UploadRowError, UploadValidationError, validate_excel_file};
pub use auth::{LoginForm, LoginResponse, UserSummary};
pub use alert::{Alert, AlertId, AlertKind};
