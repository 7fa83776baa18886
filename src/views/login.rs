// ============================================================================
// LOGIN VIEW - Formulario de acceso
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{append_child, event_value, on_click, on_input, on_submit, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::LoginViewModel;

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.login.clone();
    let login_state = vm.state();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("div")?.class("logo-icon").text("🔐").build())?
        .child(ElementBuilder::new("h1")?.text("Iniciar Sesión").build())?
        .child(
            ElementBuilder::new("p")?
                .text("Ingresa tus credenciales para administrar los soportes")
                .build(),
        )?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").build();

    // Usuario
    let username_input = ElementBuilder::new("input")?
        .class("form-input")
        .id("username")?
        .attr("type", "text")?
        .attr("placeholder", "Ingrese su usuario")?
        .attr("autocomplete", "username")?
        .attr("value", &login_state.form.username)?
        .flag("disabled", login_state.loading)?
        .build();
    {
        let vm = vm.clone();
        on_input(&username_input, move |e| vm.set_username(event_value(&e)))?;
    }
    append_child(&form, &form_group("username", "Usuario", username_input)?)?;

    // Contraseña + toggle de visibilidad
    let password_input = ElementBuilder::new("input")?
        .class("form-input")
        .id("password")?
        .attr("type", if login_state.show_password { "text" } else { "password" })?
        .attr("placeholder", "Ingrese su contraseña")?
        .attr("autocomplete", "current-password")?
        .attr("value", &login_state.form.password)?
        .flag("disabled", login_state.loading)?
        .build();
    {
        let vm = vm.clone();
        on_input(&password_input, move |e| vm.set_password(event_value(&e)))?;
    }
    let toggle_btn = ElementBuilder::new("button")?
        .class("password-toggle")
        .attr("type", "button")?
        .attr(
            "aria-label",
            if login_state.show_password { "Ocultar contraseña" } else { "Mostrar contraseña" },
        )?
        .text(if login_state.show_password { "🙈" } else { "👁️" })
        .build();
    {
        let vm = vm.clone();
        on_click(&toggle_btn, move |_| vm.toggle_password_visibility())?;
    }
    let password_wrapper = ElementBuilder::new("div")?
        .class("password-wrapper")
        .child(password_input)?
        .child(toggle_btn)?
        .build();
    append_child(&form, &form_group("password", "Contraseña", password_wrapper)?)?;

    if let Some(ref error) = login_state.error {
        let error_box = ElementBuilder::new("div")?
            .class("error-message")
            .attr("role", "alert")?
            .text(error)
            .build();
        append_child(&form, &error_box)?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .class("btn-login")
        .attr("type", "submit")?
        .flag("disabled", login_state.loading)?
        .text(if login_state.loading { "⏳ Iniciando sesión..." } else { "Iniciar Sesión" })
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move || submit(state.clone(), vm.clone()))?;
    }

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(header)?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(container)?
        .build())
}

fn form_group(id: &str, label: &str, control: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(control)?
        .build())
}

fn submit(state: AppState, vm: LoginViewModel) {
    spawn_local(async move {
        if vm.login().await {
            navigate(&state, Route::Soportes);
        }
    });
}
