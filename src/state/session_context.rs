// ============================================================================
// SESSION CONTEXT - Estado de autenticación compartido entre vistas
// ============================================================================
// Se llena una sola vez al arrancar, desde el almacenamiento persistido
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{LoginResponse, UserSummary};
use crate::services::{AuthService, Session};

#[derive(Clone)]
pub struct SessionContext {
    session: Rc<RefCell<Option<Session>>>,
    auth_service: AuthService,
}

impl SessionContext {
    /// Crea el contexto leyendo la sesión guardada
    pub fn load(auth_service: AuthService) -> Self {
        let session = auth_service.load_session();
        if let Some(ref s) = session {
            log::info!(
                "💾 [SESSION] Sesión restaurada ({})",
                s.user.as_ref().map(|u| u.username.as_str()).unwrap_or("usuario desconocido")
            );
        }
        Self {
            session: Rc::new(RefCell::new(session)),
            auth_service,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.session.borrow().as_ref().and_then(|s| s.user.clone())
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.session.borrow().as_ref().map(Session::authorization)
    }

    /// Persiste el login y lo publica en el contexto
    pub fn establish(&self, response: &LoginResponse) -> Result<(), String> {
        let session = self.auth_service.save_session(response)?;
        *self.session.borrow_mut() = Some(session);
        Ok(())
    }

    /// Logout - limpiar storage y contexto
    pub fn logout(&self) {
        if let Err(e) = self.auth_service.clear_session() {
            log::error!("❌ [SESSION] Error limpiando la sesión: {}", e);
        }
        *self.session.borrow_mut() = None;
        log::info!("👋 [SESSION] Sesión cerrada");
    }
}
