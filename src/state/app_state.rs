// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AppConfig, CONFIG};
use crate::services::{ApiClient, AuthApi, AuthService, SoporteApi};
use crate::state::{AlertQueue, Notifier, SessionContext};
use crate::utils::{BrowserStore, KeyValueStore, MemoryStore, Scheduler, TimeoutScheduler};
use crate::viewmodels::{LoginViewModel, SoporteListViewModel, UploadViewModel};

/// Rutas hash de la aplicación
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Soportes,
    UploadExcel,
}

impl Route {
    /// Cualquier ruta desconocida vuelve al inicio
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        match path {
            "/login" => Route::Login,
            "/soportes" => Route::Soportes,
            "/upload-excel" => Route::UploadExcel,
            _ => Route::Home,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Login => "#/login",
            Route::Soportes => "#/soportes",
            Route::UploadExcel => "#/upload-excel",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::Login => "Iniciar sesión",
            Route::Soportes => "Soportes",
            Route::UploadExcel => "Carga masiva",
        }
    }
}

/// Estado global: ruta actual, sesión y un viewmodel por vista
#[derive(Clone)]
pub struct AppState {
    route: Rc<RefCell<Route>>,
    pub session: SessionContext,
    pub soportes: SoporteListViewModel,
    pub upload: UploadViewModel,
    pub login: LoginViewModel,
    notifier: Notifier,
}

impl AppState {
    /// Estado del navegador: localStorage (o memoria si no está disponible), fetch y setTimeout
    pub fn new() -> Self {
        let store: Rc<dyn KeyValueStore> = match BrowserStore::new() {
            Some(store) => Rc::new(store),
            None => {
                log::warn!("⚠️ [APP] localStorage no disponible, la sesión no se persistirá");
                Rc::new(MemoryStore::new())
            }
        };
        let session = SessionContext::load(AuthService::new(store));
        let api = Rc::new(ApiClient::new().with_session(session.clone()));
        Self::with_services(session, api.clone(), api, Rc::new(TimeoutScheduler), &CONFIG)
    }

    pub fn with_services(
        session: SessionContext,
        soporte_api: Rc<dyn SoporteApi>,
        auth_api: Rc<dyn AuthApi>,
        scheduler: Rc<dyn Scheduler>,
        config: &AppConfig,
    ) -> Self {
        let notifier = Notifier::new();
        let list_alerts = AlertQueue::new(
            config.alert_config.list_alert_ms,
            scheduler.clone(),
            notifier.clone(),
        );
        let upload_alerts = AlertQueue::new(
            config.alert_config.upload_alert_ms,
            scheduler.clone(),
            notifier.clone(),
        );

        Self {
            route: Rc::new(RefCell::new(Route::Home)),
            soportes: SoporteListViewModel::new(soporte_api.clone(), list_alerts, notifier.clone()),
            upload: UploadViewModel::new(
                soporte_api,
                upload_alerts,
                scheduler,
                notifier.clone(),
                config.upload_config.clone(),
            ),
            login: LoginViewModel::new(auth_api, session.clone(), notifier.clone()),
            session,
            notifier,
        }
    }

    pub fn route(&self) -> Route {
        *self.route.borrow()
    }

    /// Activa una ruta y devuelve la efectiva (login con sesión activa va al listado)
    pub fn enter(&self, requested: Route) -> Route {
        let route = if requested == Route::Login && self.login.has_active_session() {
            log::info!("🔁 [ROUTER] Sesión activa, redirigiendo a soportes");
            Route::Soportes
        } else {
            requested
        };
        *self.route.borrow_mut() = route;
        self.notifier.notify();
        route
    }

    pub fn logout(&self) -> Route {
        self.session.logout();
        self.enter(Route::Login)
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, MockApi};
    use std::cell::Cell;

    fn state_with_store(store: Rc<MemoryStore>) -> (AppState, Rc<MockApi>) {
        let api = Rc::new(MockApi::default());
        let session = SessionContext::load(AuthService::new(store));
        let state = AppState::with_services(
            session,
            api.clone(),
            api.clone(),
            Rc::new(ManualScheduler::default()),
            &AppConfig::default(),
        );
        (state, api)
    }

    #[test]
    fn hash_routes() {
        assert_eq!(Route::from_hash("#/soportes"), Route::Soportes);
        assert_eq!(Route::from_hash("#/soportes/"), Route::Soportes);
        assert_eq!(Route::from_hash("#/upload-excel"), Route::UploadExcel);
        assert_eq!(Route::from_hash("#/login"), Route::Login);
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/no-existe"), Route::Home);
        assert_eq!(Route::from_hash(Route::UploadExcel.hash()), Route::UploadExcel);
    }

    #[test]
    fn login_with_stored_token_redirects() {
        let store = Rc::new(MemoryStore::new());
        store.set("access_token", "abc").unwrap();
        let (state, api) = state_with_store(store);

        assert_eq!(state.enter(Route::Login), Route::Soportes);
        assert_eq!(state.route(), Route::Soportes);
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn login_without_token_stays() {
        let (state, _) = state_with_store(Rc::new(MemoryStore::new()));
        assert_eq!(state.enter(Route::Login), Route::Login);
    }

    #[test]
    fn logout_clears_storage_and_goes_to_login() {
        let store = Rc::new(MemoryStore::new());
        store.set("access_token", "abc").unwrap();
        store.set("token_type", "bearer").unwrap();
        store.set("user", r#"{"id":1,"username":"admin"}"#).unwrap();
        let (state, _) = state_with_store(store.clone());

        assert_eq!(state.logout(), Route::Login);
        assert!(!state.session.is_authenticated());
        for key in ["access_token", "token_type", "user"] {
            assert_eq!(store.get(key), None);
        }
    }

    #[test]
    fn route_changes_notify_subscribers() {
        let (state, _) = state_with_store(Rc::new(MemoryStore::new()));
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        state.subscribe_to_changes(move || hits_clone.set(hits_clone.get() + 1));

        state.enter(Route::UploadExcel);
        assert_eq!(hits.get(), 1);
    }
}
