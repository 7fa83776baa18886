// ============================================================================
// VIEWMODELS - Estado de cada vista + lógica de UI
// ============================================================================

pub mod login;
pub mod soporte_list;
pub mod upload;

pub use login::LoginViewModel;
pub use soporte_list::{SoporteListState, SoporteListViewModel};
pub use upload::{UploadProgress, UploadState, UploadViewModel};
