// ============================================================================
// LOGIN VIEWMODEL - Formulario de acceso y creación de la sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::LoginForm;
use crate::services::AuthApi;
use crate::state::{Notifier, SessionContext};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    pub form: LoginForm,
    pub loading: bool,
    pub error: Option<String>,
    pub show_password: bool,
}

/// Mensaje visible para un fallo de login
pub fn login_error_message(error: &ApiError) -> String {
    match error.status() {
        Some(401) => "Usuario o contraseña incorrectos".to_string(),
        Some(0) => "No se puede conectar con el servidor".to_string(),
        _ => error.user_message("Error al iniciar sesión"),
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    api: Rc<dyn AuthApi>,
    session: SessionContext,
    state: Rc<RefCell<LoginState>>,
    notifier: Notifier,
}

impl LoginViewModel {
    pub fn new(api: Rc<dyn AuthApi>, session: SessionContext, notifier: Notifier) -> Self {
        Self {
            api,
            session,
            state: Rc::new(RefCell::new(LoginState::default())),
            notifier,
        }
    }

    pub fn state(&self) -> LoginState {
        self.state.borrow().clone()
    }

    /// Con token guardado se salta el formulario, sin consultar al servidor
    pub fn has_active_session(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn set_username(&self, value: String) {
        self.edit_form(|form| form.username = value);
    }

    pub fn set_password(&self, value: String) {
        self.edit_form(|form| form.password = value);
    }

    /// Editar limpia el error; solo se re-renderiza si había uno visible
    fn edit_form(&self, apply: impl FnOnce(&mut LoginForm)) {
        let had_error = {
            let mut state = self.state.borrow_mut();
            apply(&mut state.form);
            state.error.take().is_some()
        };
        if had_error {
            self.notifier.notify();
        }
    }

    pub fn toggle_password_visibility(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.show_password = !state.show_password;
        }
        self.notifier.notify();
    }

    fn fail(&self, message: String) {
        {
            let mut state = self.state.borrow_mut();
            state.error = Some(message);
            state.loading = false;
        }
        self.notifier.notify();
    }

    pub fn validate(&self) -> bool {
        let result = self.state.borrow().form.validate();
        match result {
            Ok(()) => true,
            Err(invalid) => {
                self.fail(invalid.message().to_string());
                false
            }
        }
    }

    /// `true` cuando la sesión quedó guardada y la vista debe ir al listado
    pub async fn login(&self) -> bool {
        if self.state.borrow().loading {
            log::debug!("⏳ [LOGIN] Login en curso, se ignora el envío");
            return false;
        }
        if !self.validate() {
            return false;
        }

        let form = {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.error = None;
            state.form.clone()
        };
        self.notifier.notify();

        log::info!("🔐 [LOGIN] Iniciando sesión como {}", form.username);
        match self.api.login(&form).await {
            Ok(response) if response.access_token.is_empty() => {
                log::error!("❌ [LOGIN] Respuesta sin access_token");
                self.fail("Error al iniciar sesión".to_string());
                false
            }
            Ok(response) => match self.session.establish(&response) {
                Ok(()) => {
                    log::info!("✅ [LOGIN] Sesión iniciada");
                    {
                        let mut state = self.state.borrow_mut();
                        state.loading = false;
                        state.form.password.clear();
                    }
                    self.notifier.notify();
                    true
                }
                Err(e) => {
                    log::error!("❌ [LOGIN] No se pudo guardar la sesión: {}", e);
                    self.fail("Error al iniciar sesión".to_string());
                    false
                }
            },
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                self.fail(login_error_message(&e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginResponse, UserSummary};
    use crate::services::AuthService;
    use crate::testing::{http_error, MockApi};
    use crate::utils::{KeyValueStore, MemoryStore};
    use futures::executor::block_on;
    use std::cell::Cell;

    fn setup() -> (LoginViewModel, Rc<MockApi>, Rc<MemoryStore>) {
        let api = Rc::new(MockApi::default());
        let store = Rc::new(MemoryStore::new());
        let session = SessionContext::load(AuthService::new(store.clone()));
        (LoginViewModel::new(api.clone(), session, Notifier::new()), api, store)
    }

    fn fill(vm: &LoginViewModel, username: &str, password: &str) {
        vm.set_username(username.into());
        vm.set_password(password.into());
    }

    #[test]
    fn successful_login_stores_session() {
        let (vm, api, store) = setup();
        *api.login_result.borrow_mut() = Some(Ok(LoginResponse {
            access_token: "tok-123".into(),
            token_type: "bearer".into(),
            user: Some(UserSummary { id: 1, username: "admin".into(), email: None }),
        }));
        fill(&vm, "admin", "admin123");

        assert!(block_on(vm.login()));
        assert_eq!(store.get("access_token").as_deref(), Some("tok-123"));
        assert_eq!(store.get("token_type").as_deref(), Some("bearer"));
        assert!(store.get("user").unwrap().contains("\"admin\""));
        assert!(vm.has_active_session());
        assert!(!vm.state().loading);
    }

    #[test]
    fn unauthorized_stores_nothing() {
        let (vm, api, store) = setup();
        *api.login_result.borrow_mut() = Some(Err(http_error(401, Some("Incorrect username"))));
        fill(&vm, "admin", "incorrecta");

        assert!(!block_on(vm.login()));
        assert_eq!(vm.state().error.as_deref(), Some("Usuario o contraseña incorrectos"));
        assert_eq!(store.get("access_token"), None);
        assert!(!vm.has_active_session());
    }

    #[test]
    fn unreachable_server_message() {
        let (vm, api, _) = setup();
        *api.login_result.borrow_mut() = Some(Err(ApiError::Network("Failed to fetch".into())));
        fill(&vm, "admin", "admin123");

        assert!(!block_on(vm.login()));
        assert_eq!(
            vm.state().error.as_deref(),
            Some("No se puede conectar con el servidor")
        );
    }

    #[test]
    fn other_errors_use_detail_or_fallback() {
        assert_eq!(
            login_error_message(&http_error(403, Some("Usuario inactivo"))),
            "Usuario inactivo"
        );
        assert_eq!(login_error_message(&http_error(500, None)), "Error al iniciar sesión");
    }

    #[test]
    fn invalid_form_makes_no_call() {
        let api = Rc::new(MockApi::default());
        let session = SessionContext::load(AuthService::new(Rc::new(MemoryStore::new())));
        let notifier = Notifier::new();
        let vm = LoginViewModel::new(api.clone(), session, notifier.clone());

        fill(&vm, "ad", "admin123");
        assert!(!block_on(vm.login()));
        assert_eq!(api.calls.get(), 0);
        assert_eq!(
            vm.state().error.as_deref(),
            Some("El usuario debe tener al menos 3 caracteres")
        );

        let renders = Rc::new(Cell::new(0));
        let renders_clone = renders.clone();
        notifier.subscribe(move || renders_clone.set(renders_clone.get() + 1));

        // Editar limpia el error y la vista se actualiza una vez
        vm.set_username("admin".into());
        assert_eq!(vm.state().error, None);
        assert_eq!(renders.get(), 1);

        // Sin error visible, teclear no re-renderiza
        vm.set_username("admin2".into());
        vm.set_password("otra123".into());
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn stored_token_skips_form() {
        let store = Rc::new(MemoryStore::new());
        store.set("access_token", "previo").unwrap();
        let session = SessionContext::load(AuthService::new(store));
        let api = Rc::new(MockApi::default());
        let vm = LoginViewModel::new(api.clone(), session, Notifier::new());

        assert!(vm.has_active_session());
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn toggle_password() {
        let (vm, _, _) = setup();
        vm.toggle_password_visibility();
        assert!(vm.state().show_password);
        vm.toggle_password_visibility();
        assert!(!vm.state().show_password);
    }
}
