// ============================================================================
// APP VIEW - Layout principal: navegación + vista de la ruta activa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::apply_route;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::views::{render_home, render_login, render_soporte_list, render_upload_excel};

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.route();
    log::debug!("🎨 [VIEW] Renderizando {:?}", route);

    let content = match route {
        Route::Home => render_home()?,
        Route::Login => render_login(state)?,
        Route::Soportes => render_soporte_list(state)?,
        Route::UploadExcel => render_upload_excel(state)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("app-container")
        .child(render_header(state, route)?)?
        .child(ElementBuilder::new("main")?.class("app-content").child(content)?.build())?
        .build())
}

fn render_header(state: &AppState, current: Route) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("app-nav").build();
    for route in [Route::Home, Route::Soportes, Route::UploadExcel] {
        let class = if route == current { "nav-link active" } else { "nav-link" };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", route.hash())?
            .text(route.title())
            .build();
        append_child(&nav, &link)?;
    }

    let session_box = ElementBuilder::new("div")?.class("session-box").build();
    if state.session.is_authenticated() {
        let username = state
            .session
            .user()
            .map(|u| u.username)
            .unwrap_or_else(|| "Usuario".to_string());
        append_child(
            &session_box,
            &ElementBuilder::new("span")?.class("session-user").text(&format!("👤 {}", username)).build(),
        )?;

        let logout_btn = ElementBuilder::new("button")?
            .class("btn btn-logout")
            .attr("type", "button")?
            .text("Cerrar sesión")
            .build();
        {
            let state = state.clone();
            on_click(&logout_btn, move |_| {
                let route = state.logout();
                apply_route(&state, route);
            })?;
        }
        append_child(&session_box, &logout_btn)?;
    } else if current != Route::Login {
        let login_link = ElementBuilder::new("a")?
            .class("btn btn-login-link")
            .attr("href", Route::Login.hash())?
            .text("Iniciar sesión")
            .build();
        append_child(&session_box, &login_link)?;
    }

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("div")?.class("brand").text("📦 Soportes").build())?
        .child(nav)?
        .child(session_box)?
        .build())
}
