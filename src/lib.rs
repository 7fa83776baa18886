// ============================================================================
// SOPORTES ADMIN - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API + persistencia de sesión
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App (el runtime del navegador es de un solo hilo)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!(
        "🚀 Soportes Admin - Rust + MVVM ({}, API {})",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    let mut app = App::new()?;
    app.start()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: un render no debe reentrar en otro
        match app_cell.try_borrow_mut() {
            Ok(mut slot) => match slot.as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            },
            Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se omite"),
        }
    });
}

/// Re-render invocable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
