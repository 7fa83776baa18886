// ============================================================================
// APP - Aplicación principal: root, router hash y re-render
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{append_child, capture_focus, get_element_by_id, restore_focus, location_hash, scroll_into_view, set_inner_html, set_location_hash, window};
use crate::state::{AppState, Route};
use crate::utils::SCROLL_TO_RESULTS_MS;
use crate::views::{render_app, RESULTS_ID};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Suscribirse a cambios de estado; el Timeout agrupa varios cambios en un render
        state.subscribe_to_changes(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { state, root })
    }

    /// Registra el listener de `hashchange` (una sola vez) y aplica la ruta inicial
    pub fn start(&self) -> Result<(), JsValue> {
        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let requested = Route::from_hash(&location_hash());
            if requested != state.route() {
                navigate(&state, requested);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        window()
            .ok_or_else(|| JsValue::from_str("No window"))?
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();

        navigate(&self.state, Route::from_hash(&location_hash()));
        Ok(())
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        // Un re-render (p. ej. al expirar una alerta) no debe sacar al usuario del input
        let focus = capture_focus();
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        if let Some(ref focus) = focus {
            restore_focus(focus);
        }

        if self.state.route() == Route::UploadExcel && self.state.upload.take_scroll_request() {
            Timeout::new(SCROLL_TO_RESULTS_MS, || scroll_into_view(RESULTS_ID)).forget();
        }
        Ok(())
    }
}

/// Cambia de ruta y dispara la carga de datos de la vista
pub fn navigate(state: &AppState, requested: Route) {
    let route = state.enter(requested);
    apply_route(state, route);
}

/// Sincroniza la URL con la ruta efectiva; el listado se recarga al entrar
pub fn apply_route(state: &AppState, route: Route) {
    if location_hash() != route.hash() {
        if let Err(e) = set_location_hash(route.hash()) {
            log::warn!("⚠️ [ROUTER] No se pudo actualizar el hash: {:?}", e);
        }
    }

    if route == Route::Soportes {
        let soportes = state.soportes.clone();
        wasm_bindgen_futures::spawn_local(async move {
            soportes.load().await;
        });
    }
}
