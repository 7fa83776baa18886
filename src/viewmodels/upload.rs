// ============================================================================
// UPLOAD VIEWMODEL - Carga masiva de soportes desde Excel
// ============================================================================
// El progreso son marcas de etapa (30/70/100), no bytes medidos
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::UploadConfig;
use crate::models::{
    validate_excel_file, AlertKind, ExcelFile, UploadResult, UploadValidationError,
};
use crate::services::SoporteApi;
use crate::state::{AlertQueue, Notifier};
use crate::utils::{Scheduler, NO_FILE_LABEL};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UploadStage {
    Uploading,
    Processing,
    Complete,
    Failed,
}

impl UploadStage {
    pub fn percent(&self) -> u8 {
        match self {
            UploadStage::Uploading => 30,
            UploadStage::Processing => 70,
            UploadStage::Complete | UploadStage::Failed => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadStage::Uploading => "Subiendo archivo...",
            UploadStage::Processing => "Procesando datos...",
            UploadStage::Complete => "¡Completado!",
            UploadStage::Failed => "Error en el proceso",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, UploadStage::Complete | UploadStage::Failed)
    }
}

/// Barra de progreso: oculta cuando `stage` es `None`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct UploadProgress {
    pub stage: Option<UploadStage>,
}

impl UploadProgress {
    pub fn is_visible(&self) -> bool {
        self.stage.is_some()
    }

    pub fn percent(&self) -> u8 {
        self.stage.map(|s| s.percent()).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        self.stage.map(|s| s.label()).unwrap_or("")
    }
}

#[derive(Clone, Debug)]
pub struct UploadState {
    pub file: Option<ExcelFile>,
    pub limite: u32,
    pub loading: bool,
    pub progress: UploadProgress,
    pub results: Option<UploadResult>,
    pub scroll_to_results: bool,
}

impl UploadState {
    fn new(limite: u32) -> Self {
        Self {
            file: None,
            limite,
            loading: false,
            progress: UploadProgress::default(),
            results: None,
            scroll_to_results: false,
        }
    }

    pub fn file_label(&self) -> &str {
        self.file.as_ref().map(|f| f.name.as_str()).unwrap_or(NO_FILE_LABEL)
    }
}

#[derive(Clone)]
pub struct UploadViewModel {
    api: Rc<dyn SoporteApi>,
    state: Rc<RefCell<UploadState>>,
    alerts: AlertQueue,
    scheduler: Rc<dyn Scheduler>,
    notifier: Notifier,
    config: UploadConfig,
}

impl UploadViewModel {
    pub fn new(
        api: Rc<dyn SoporteApi>,
        alerts: AlertQueue,
        scheduler: Rc<dyn Scheduler>,
        notifier: Notifier,
        config: UploadConfig,
    ) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(UploadState::new(config.default_limit))),
            alerts,
            scheduler,
            notifier,
            config,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn select_file(&self, file: Option<ExcelFile>) {
        if let Some(ref f) = file {
            log::debug!("📁 [UPLOAD] Archivo seleccionado: {} ({} bytes)", f.name, f.size);
        }
        self.state.borrow_mut().file = file;
        self.notifier.notify();
    }

    /// Texto del input numérico; lo que no sea un entero >= 1 vuelve al valor por defecto
    pub fn set_limite_input(&self, raw: &str) {
        let limite = match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => self.config.default_limit,
        };
        self.state.borrow_mut().limite = limite;
    }

    /// Valida el archivo y, si falla, muestra la alerta correspondiente
    pub fn validate(&self) -> Result<(), UploadValidationError> {
        let result = {
            let state = self.state.borrow();
            validate_excel_file(state.file.as_ref(), self.config.max_bytes)
        };
        if let Err(invalid) = result {
            log::warn!("⚠️ [UPLOAD] Archivo inválido: {:?}", invalid);
            self.alerts.raise(invalid.message(), AlertKind::Error);
        }
        result
    }

    fn set_stage(&self, stage: UploadStage) {
        self.state.borrow_mut().progress.stage = Some(stage);
        self.notifier.notify();
    }

    /// Oculta la barra tras la pausa configurada, salvo que otra carga la haya reutilizado
    fn schedule_progress_hide(&self) {
        let state = self.state.clone();
        let notifier = self.notifier.clone();
        self.scheduler.schedule(
            self.config.progress_hide_ms,
            Box::new(move || {
                let hidden = {
                    let mut state = state.borrow_mut();
                    let terminal = state.progress.stage.map(|s| s.is_terminal()).unwrap_or(false);
                    if terminal {
                        state.progress = UploadProgress::default();
                    }
                    terminal
                };
                if hidden {
                    notifier.notify();
                }
            }),
        );
    }

    /// Envía el archivo; `true` si el backend procesó la carga
    pub async fn submit(&self) -> bool {
        if self.state.borrow().loading {
            log::debug!("⏳ [UPLOAD] Ya hay una carga en curso");
            return false;
        }
        if self.validate().is_err() {
            return false;
        }

        let (file, limite) = {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.results = None;
            match state.file.clone() {
                Some(file) => (file, state.limite),
                None => {
                    state.loading = false;
                    return false;
                }
            }
        };
        self.set_stage(UploadStage::Uploading);

        log::info!("📤 [UPLOAD] Enviando {} (limite {})", file.name, limite);
        let result = self.api.upload_excel(&file, limite).await;
        self.set_stage(UploadStage::Processing);

        let ok = match result {
            Ok(response) => {
                let resultado = response.resultado;
                log::info!(
                    "✅ [UPLOAD] {} exitosos, {} fallidos de {}",
                    resultado.exitosos,
                    resultado.fallidos,
                    resultado.total_procesados
                );
                self.set_stage(UploadStage::Complete);

                if resultado.exitosos > 0 {
                    self.alerts.raise(
                        format!(
                            "✅ Carga completada: {} registros insertados correctamente",
                            resultado.exitosos
                        ),
                        AlertKind::Success,
                    );
                }
                if resultado.fallidos > 0 {
                    self.alerts.raise(
                        format!("⚠️ {} registros no pudieron ser insertados", resultado.fallidos),
                        AlertKind::Warning,
                    );
                }

                {
                    let mut state = self.state.borrow_mut();
                    state.results = Some(resultado);
                    state.file = None;
                    state.limite = self.config.default_limit;
                    state.scroll_to_results = true;
                }
                true
            }
            Err(e) => {
                log::error!("❌ [UPLOAD] Error procesando archivo: {}", e);
                self.set_stage(UploadStage::Failed);
                self.alerts
                    .raise(e.user_message("Error al procesar el archivo"), AlertKind::Error);
                false
            }
        };

        self.schedule_progress_hide();
        self.state.borrow_mut().loading = false;
        self.notifier.notify();
        ok
    }

    /// La vista consume la petición de scroll una sola vez tras renderizar
    pub fn take_scroll_request(&self) -> bool {
        std::mem::replace(&mut self.state.borrow_mut().scroll_to_results, false)
    }
}
