// ============================================================================
// SOPORTE LIST VIEWMODEL - Listado, alta, baja y exportación de soportes
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AlertKind, Download, ExportFormat, NewSoporte, Soporte, SoporteField};
use crate::services::SoporteApi;
use crate::state::{AlertQueue, Notifier};
use crate::utils::CONFIRM_DELETE_MESSAGE;

/// Estado que proyecta la vista de listado
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SoporteListState {
    pub soportes: Vec<Soporte>,
    pub loading: bool,
    pub form: NewSoporte,
    pub selected: Option<Soporte>,
}

#[derive(Clone)]
pub struct SoporteListViewModel {
    api: Rc<dyn SoporteApi>,
    state: Rc<RefCell<SoporteListState>>,
    alerts: AlertQueue,
    notifier: Notifier,
}

impl SoporteListViewModel {
    pub fn new(api: Rc<dyn SoporteApi>, alerts: AlertQueue, notifier: Notifier) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(SoporteListState::default())),
            alerts,
            notifier,
        }
    }

    pub fn state(&self) -> SoporteListState {
        self.state.borrow().clone()
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    /// Actualiza un campo del formulario sin re-renderizar (el input ya muestra el valor)
    pub fn set_field(&self, field: SoporteField, value: String) {
        self.state.borrow_mut().form.set(field, value);
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
        self.notifier.notify();
    }

    /// Reemplaza la lista con la colección completa del servidor
    pub async fn load(&self) -> bool {
        self.set_loading(true);
        let result = self.api.list_soportes().await;
        let ok = match result {
            Ok(soportes) => {
                log::info!("📋 [SOPORTES] {} soportes cargados", soportes.len());
                self.state.borrow_mut().soportes = soportes;
                true
            }
            Err(e) => {
                log::error!("❌ [SOPORTES] Error al cargar soportes: {}", e);
                self.alerts.raise("Error al cargar los soportes", AlertKind::Error);
                false
            }
        };
        self.set_loading(false);
        ok
    }

    pub async fn create(&self) -> bool {
        let nuevo = self.state.borrow().form.trimmed();
        if let Err(invalid) = nuevo.validate() {
            log::warn!("⚠️ [SOPORTES] Formulario inválido: {:?}", invalid);
            self.alerts.raise(invalid.message(), AlertKind::Warning);
            return false;
        }

        match self.api.create_soporte(&nuevo).await {
            Ok(creado) => {
                log::info!("✅ [SOPORTES] Soporte creado: {:?}", creado.id);
                {
                    let mut state = self.state.borrow_mut();
                    state.soportes.push(creado);
                    state.form = NewSoporte::default();
                }
                self.alerts.raise("Soporte creado con éxito", AlertKind::Success);
                true
            }
            Err(e) => {
                log::error!("❌ [SOPORTES] Error al crear soporte: {}", e);
                self.alerts
                    .raise(e.user_message("Error al crear el soporte"), AlertKind::Error);
                false
            }
        }
    }

    /// Elimina tras confirmación interactiva; el estado local solo cambia si el servidor acepta
    pub async fn delete<F>(&self, id: i64, confirm: F) -> bool
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CONFIRM_DELETE_MESSAGE) {
            log::debug!("🚫 [SOPORTES] Eliminación de {} cancelada", id);
            return false;
        }

        match self.api.delete_soporte(id).await {
            Ok(response) => {
                log::info!("🗑️ [SOPORTES] {} (id {})", response.message, id);
                {
                    let mut state = self.state.borrow_mut();
                    state.soportes.retain(|s| s.id != Some(id));
                    if state.selected.as_ref().and_then(|s| s.id) == Some(id) {
                        state.selected = None;
                    }
                }
                self.alerts.raise("Soporte eliminado con éxito", AlertKind::Success);
                true
            }
            Err(e) => {
                log::error!("❌ [SOPORTES] Error al eliminar soporte {}: {}", id, e);
                self.alerts
                    .raise(e.user_message("Error al eliminar el soporte"), AlertKind::Error);
                false
            }
        }
    }

    /// Consulta un soporte y lo muestra en el panel de detalle
    pub async fn show(&self, id: i64) -> bool {
        match self.api.get_soporte(id).await {
            Ok(soporte) => {
                self.state.borrow_mut().selected = Some(soporte);
                self.notifier.notify();
                true
            }
            Err(e) => {
                log::error!("❌ [SOPORTES] Error al obtener soporte {}: {}", id, e);
                self.alerts
                    .raise(e.user_message("Error al obtener el soporte"), AlertKind::Error);
                false
            }
        }
    }

    pub fn close_detail(&self) {
        self.state.borrow_mut().selected = None;
        self.notifier.notify();
    }

    /// Descarga el archivo exportado; la vista se encarga de entregarlo al navegador
    pub async fn export(&self, format: ExportFormat) -> Option<Download> {
        match self.api.export_soportes(format).await {
            Ok(bytes) => {
                log::info!("📤 [SOPORTES] Exportación {:?}: {} bytes", format, bytes.len());
                Some(Download::new(format, bytes))
            }
            Err(e) => {
                log::error!("❌ [SOPORTES] {}: {}", format.error_message(), e);
                self.alerts.raise(format.error_message(), AlertKind::Error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::DeleteResponse;
    use crate::testing::{http_error, soporte, ManualScheduler, MockApi};
    use futures::executor::block_on;

    fn setup() -> (SoporteListViewModel, Rc<MockApi>) {
        let api = Rc::new(MockApi::default());
        let notifier = Notifier::new();
        let alerts = AlertQueue::new(5_000, Rc::new(ManualScheduler::default()), notifier.clone());
        (SoporteListViewModel::new(api.clone(), alerts, notifier), api)
    }

    fn fill_form(vm: &SoporteListViewModel, nombre: &str, cedula: &str, direccion: &str) {
        vm.set_field(SoporteField::Nombre, nombre.into());
        vm.set_field(SoporteField::Cedula, cedula.into());
        vm.set_field(SoporteField::Direccion, direccion.into());
    }

    #[test]
    fn load_replaces_list() {
        let (vm, api) = setup();
        *api.list_result.borrow_mut() = Some(Ok(vec![soporte(1, "Ana"), soporte(2, "Luis")]));

        assert!(block_on(vm.load()));
        let state = vm.state();
        assert_eq!(state.soportes.len(), 2);
        assert!(!state.loading);
        assert!(vm.alerts().is_empty());
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let (vm, api) = setup();
        *api.list_result.borrow_mut() = Some(Ok(vec![soporte(1, "Ana")]));
        block_on(vm.load());

        *api.list_result.borrow_mut() = Some(Err(http_error(500, None)));
        assert!(!block_on(vm.load()));
        assert_eq!(vm.state().soportes, vec![soporte(1, "Ana")]);
        let alerts = vm.alerts().alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Error al cargar los soportes");
        assert_eq!(alerts[0].kind, AlertKind::Error);
    }

    #[test]
    fn valid_create_posts_once_and_appends() {
        let (vm, api) = setup();
        *api.create_result.borrow_mut() = Some(Ok(soporte(9, "Carolina")));
        fill_form(&vm, " Carolina ", "99999", "Carrera 7 #12-30");

        assert!(block_on(vm.create()));
        assert_eq!(api.calls.get(), 1);
        // Se envían los valores sin espacios sobrantes
        assert_eq!(api.created.borrow()[0].nombre, "Carolina");

        let state = vm.state();
        assert_eq!(state.soportes.last().and_then(|s| s.id), Some(9));
        assert_eq!(state.form, NewSoporte::default());
        let alerts = vm.alerts().alerts();
        assert_eq!(alerts[0].message, "Soporte creado con éxito");
        assert_eq!(alerts[0].kind, AlertKind::Success);
    }

    #[test]
    fn invalid_create_makes_no_call_and_one_warning() {
        for (nombre, cedula, direccion) in [
            ("", "12345", "Calle 1"),
            ("Al", "12345", "Calle 1"),
            ("Alba", "1234", "Calle 1"),
            ("Alba", "12345", "Cl 1"),
        ] {
            let (vm, api) = setup();
            fill_form(&vm, nombre, cedula, direccion);

            assert!(!block_on(vm.create()));
            assert_eq!(api.calls.get(), 0);
            let alerts = vm.alerts().alerts();
            assert_eq!(alerts.len(), 1);
            assert_eq!(alerts[0].kind, AlertKind::Warning);
            // El formulario se conserva para corregirlo
            assert_eq!(vm.state().form.cedula, cedula);
        }
    }

    #[test]
    fn create_failure_shows_server_detail() {
        let (vm, api) = setup();
        *api.create_result.borrow_mut() = Some(Err(http_error(
            400,
            Some("Ya existe un soporte registrado con la cédula 12345"),
        )));
        fill_form(&vm, "Ana María", "12345", "Calle 1 Sur");

        assert!(!block_on(vm.create()));
        assert!(vm.state().soportes.is_empty());
        assert_eq!(
            vm.alerts().alerts()[0].message,
            "Ya existe un soporte registrado con la cédula 12345"
        );
    }

    #[test]
    fn delete_removes_exactly_that_record() {
        let (vm, api) = setup();
        *api.list_result.borrow_mut() =
            Some(Ok(vec![soporte(1, "Ana"), soporte(2, "Luis"), soporte(3, "Eva")]));
        block_on(vm.load());
        *api.delete_result.borrow_mut() = Some(Ok(DeleteResponse {
            message: "Soporte eliminado exitosamente".into(),
            id: Some(2),
        }));

        assert!(block_on(vm.delete(2, |_| true)));
        let ids: Vec<_> = vm.state().soportes.iter().filter_map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(*api.deleted.borrow(), vec![2]);
    }

    #[test]
    fn declined_confirmation_skips_call() {
        let (vm, api) = setup();
        let mut asked = String::new();
        assert!(!block_on(vm.delete(4, |msg| {
            asked = msg.to_string();
            false
        })));
        assert_eq!(asked, CONFIRM_DELETE_MESSAGE);
        assert_eq!(api.calls.get(), 0);
        assert!(vm.alerts().is_empty());
    }

    #[test]
    fn failed_delete_keeps_list() {
        let (vm, api) = setup();
        *api.list_result.borrow_mut() = Some(Ok(vec![soporte(1, "Ana")]));
        block_on(vm.load());
        *api.delete_result.borrow_mut() = Some(Err(http_error(404, None)));

        assert!(!block_on(vm.delete(1, |_| true)));
        assert_eq!(vm.state().soportes.len(), 1);
        assert_eq!(vm.alerts().alerts()[0].message, "Error al eliminar el soporte");
    }

    #[test]
    fn show_and_close_detail() {
        let (vm, api) = setup();
        *api.get_result.borrow_mut() = Some(Ok(soporte(5, "Eva")));
        assert!(block_on(vm.show(5)));
        assert_eq!(vm.state().selected.and_then(|s| s.id), Some(5));
        vm.close_detail();
        assert_eq!(vm.state().selected, None);
    }

    #[test]
    fn export_builds_named_download() {
        let (vm, api) = setup();
        *api.export_result.borrow_mut() = Some(Ok(vec![0x25, 0x50, 0x44, 0x46]));
        let download = block_on(vm.export(ExportFormat::Pdf)).unwrap();
        assert_eq!(download.filename, "soportes.pdf");
        assert_eq!(download.mime_type, "application/pdf");
        assert_eq!(download.bytes.len(), 4);
    }

    #[test]
    fn export_failure_raises_alert() {
        let (vm, api) = setup();
        *api.export_result.borrow_mut() = Some(Err(ApiError::Network("Failed to fetch".into())));
        assert!(block_on(vm.export(ExportFormat::Excel)).is_none());
        assert_eq!(vm.alerts().alerts()[0].message, "Error al exportar a Excel");
    }
}
